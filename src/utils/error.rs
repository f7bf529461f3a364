use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid student row at line {line}: {message}")]
    InvalidRow { line: u64, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::CsvError(_) | RosterError::InvalidRow { .. } => ErrorCategory::Input,
            RosterError::TomlParseError(_)
            | RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RosterError::IoError(_) | RosterError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RosterError::InvalidRow { .. } => ErrorSeverity::Medium,
            RosterError::CsvError(_)
            | RosterError::TomlParseError(_)
            | RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RosterError::IoError(_) | RosterError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::InvalidRow { .. } => {
                "Fix the row in the CSV file or rerun with --on-invalid-row skip"
            }
            RosterError::CsvError(_) => {
                "Check that the file has the header Name,Student_ID,Score,Attendance"
            }
            RosterError::TomlParseError(_) => "Check the TOML syntax of the configuration file",
            RosterError::ConfigError { .. }
            | RosterError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again"
            }
            RosterError::IoError(_) => "Check that the file exists and is readable",
            RosterError::SerializationError(_) => "Report output could not be encoded; rerun with --verbose",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::InvalidRow { line, .. } => {
                format!("The student file has a malformed row at line {}", line)
            }
            RosterError::CsvError(_) => "The student file could not be read as CSV".to_string(),
            RosterError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_row_classification() {
        let err = RosterError::InvalidRow {
            line: 4,
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("line 4"));
        assert_eq!(
            err.to_string(),
            "Invalid student row at line 4: invalid digit found in string"
        );
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = RosterError::ConfigError {
            message: "invalid substitution pattern".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = RosterError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
