use crate::core::overdue::{OverduePolicy, OVERDUE_THRESHOLD_HOURS};
use crate::core::timezone::Localizer;
use crate::utils::error::{Result, TimingError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 預估時間上限：一週
const MAX_ESTIMATE_MINUTES: i64 = 7 * 24 * 60;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default)]
    pub timing: TimingSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSection {
    #[serde(default = "default_threshold_hours")]
    pub threshold_hours: f64,
    pub default_estimate_minutes: Option<i64>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_threshold_hours() -> f64 {
    OVERDUE_THRESHOLD_HOURS
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl Default for TimingSection {
    fn default() -> Self {
        Self {
            threshold_hours: default_threshold_hours(),
            default_estimate_minutes: None,
            timezone: default_timezone(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TimingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TimingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TimingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ORDER_TZ})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TimingError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_hours("timing.threshold_hours", self.timing.threshold_hours)?;
        validation::validate_time_zone("timing.timezone", &self.timing.timezone)?;

        if let Some(minutes) = self.timing.default_estimate_minutes {
            validation::validate_range(
                "timing.default_estimate_minutes",
                minutes,
                1,
                MAX_ESTIMATE_MINUTES,
            )?;
        }

        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;

        Ok(())
    }

    pub fn policy(&self) -> OverduePolicy {
        OverduePolicy::new(self.timing.threshold_hours)
    }

    /// 未設定時使用一個門檻時長
    pub fn default_estimate_minutes(&self) -> i64 {
        self.timing
            .default_estimate_minutes
            .unwrap_or_else(|| self.policy().threshold_minutes())
    }

    pub fn localizer(&self) -> Result<Localizer> {
        Localizer::from_name(&self.timing.timezone)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for TimingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
