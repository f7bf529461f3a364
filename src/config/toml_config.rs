use crate::core::ConfigProvider;
use crate::domain::model::InvalidRowPolicy;
use crate::ingest::DEFAULT_STUDENT_COUNT;
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub roster: RosterSection,
    pub source: SourceConfig,
    pub synthetic: SyntheticConfig,
    pub queries: QueryConfig,
    pub report: ReportConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSection {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub data_file: Option<String>,
    pub base_dir: Option<String>,
    pub on_invalid_row: Option<InvalidRowPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyntheticConfig {
    pub count: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    pub search_name: Option<String>,
    pub search_score: Option<i32>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_file: Option<String>,
    pub list_students: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ROSTER_DATA})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn base_dir(&self) -> &str {
        self.source.base_dir.as_deref().unwrap_or(".")
    }

    pub fn list_students(&self) -> bool {
        self.report.list_students.unwrap_or(false)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.enabled
    }

    pub fn roster_name(&self) -> &str {
        self.roster.name.as_deref().unwrap_or("unnamed roster")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("source.base_dir", self.base_dir())?;

        if let Some(path) = &self.source.data_file {
            validation::validate_path("source.data_file", path)?;
            validation::validate_file_extension("source.data_file", path, &["csv"])?;
        }

        if let Some(path) = &self.report.output_file {
            validation::validate_path("report.output_file", path)?;
            validation::validate_file_extension("report.output_file", path, &["json"])?;
        }

        if let Some(name) = &self.queries.search_name {
            validation::validate_non_empty_string("queries.search_name", name)?;
        }

        if self.source.data_file.is_none() {
            validation::validate_positive_number("synthetic.count", self.synthetic_count(), 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn data_file(&self) -> Option<&str> {
        self.source.data_file.as_deref()
    }

    fn synthetic_count(&self) -> usize {
        self.synthetic.count.unwrap_or(DEFAULT_STUDENT_COUNT)
    }

    fn seed(&self) -> Option<u64> {
        self.synthetic.seed
    }

    fn on_invalid_row(&self) -> InvalidRowPolicy {
        self.source.on_invalid_row.unwrap_or_default()
    }

    fn search_name(&self) -> Option<&str> {
        self.queries.search_name.as_deref()
    }

    fn search_score(&self) -> Option<i32> {
        self.queries.search_score
    }

    fn top_n(&self) -> usize {
        self.queries.top_n.unwrap_or(DEFAULT_TOP_N)
    }

    fn report_file(&self) -> Option<&str> {
        self.report.output_file.as_deref()
    }
}
