use crate::core::ConfigProvider;
use crate::domain::model::InvalidRowPolicy;
use crate::ingest::DEFAULT_STUDENT_COUNT;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "student-roster")]
#[command(about = "Load a student roster and run search, sort and ranking queries")]
pub struct CliConfig {
    /// CSV file with Name,Student_ID,Score,Attendance columns
    #[arg(short = 'f', long)]
    pub data_file: Option<String>,

    /// Number of random students to generate when no CSV file is loaded
    #[arg(long, default_value_t = DEFAULT_STUDENT_COUNT)]
    pub count: usize,

    /// Seed for generated students
    #[arg(long)]
    pub seed: Option<u64>,

    /// Name to look up (defaults to the first student's name)
    #[arg(long)]
    pub search_name: Option<String>,

    /// Score to look up (defaults to the middle student's score)
    #[arg(long, allow_negative_numbers = true)]
    pub search_score: Option<i32>,

    /// How many top students to show
    #[arg(long, default_value_t = 5)]
    pub top: usize,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, value_enum, default_value_t = InvalidRowPolicy::Fail)]
    pub on_invalid_row: InvalidRowPolicy,

    /// Directory that relative file paths are resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    /// Print every student after loading
    #[arg(long)]
    pub list: bool,

    /// Read settings from a TOML file instead of flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("base_dir", &self.base_dir)?;
        if let Some(path) = &self.data_file {
            validation::validate_path("data_file", path)?;
        }
        if let Some(path) = &self.output {
            validation::validate_path("output", path)?;
        }
        if let Some(name) = &self.search_name {
            validation::validate_non_empty_string("search_name", name)?;
        }
        if let Some(path) = &self.config {
            validation::validate_file_extension("config", path, &["toml"])?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn data_file(&self) -> Option<&str> {
        self.data_file.as_deref()
    }

    fn synthetic_count(&self) -> usize {
        self.count
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn on_invalid_row(&self) -> InvalidRowPolicy {
        self.on_invalid_row
    }

    fn search_name(&self) -> Option<&str> {
        self.search_name.as_deref()
    }

    fn search_score(&self) -> Option<i32> {
        self.search_score
    }

    fn top_n(&self) -> usize {
        self.top
    }

    fn report_file(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["student-roster"]);
        assert_eq!(config.synthetic_count(), DEFAULT_STUDENT_COUNT);
        assert_eq!(config.top_n(), 5);
        assert_eq!(config.on_invalid_row(), InvalidRowPolicy::Fail);
        assert!(config.data_file().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_are_parsed() {
        let config = CliConfig::parse_from([
            "student-roster",
            "-f",
            "class.csv",
            "--search-score",
            "-1",
            "--top",
            "3",
            "--on-invalid-row",
            "skip",
        ]);
        assert_eq!(config.data_file(), Some("class.csv"));
        assert_eq!(config.search_score(), Some(-1));
        assert_eq!(config.top_n(), 3);
        assert_eq!(config.on_invalid_row(), InvalidRowPolicy::Skip);
    }

    #[test]
    fn test_negative_top_is_rejected() {
        assert!(CliConfig::try_parse_from(["student-roster", "--top", "-2"]).is_err());
    }

    #[test]
    fn test_blank_search_name_fails_validation() {
        let config = CliConfig::parse_from(["student-roster", "--search-name", " "]);
        assert!(config.validate().is_err());
    }
}
