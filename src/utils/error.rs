use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimingError {
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Local time '{value}' does not exist in time zone {zone}")]
    NonexistentLocalTime { value: String, zone: String },

    #[error("Unknown time zone: {name}")]
    UnknownTimeZone { name: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入的時間或資料有誤
    Input,
    /// 設定檔或命令列參數有誤
    Configuration,
    /// 檔案系統等外部錯誤
    System,
}

impl TimingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TimingError::InvalidTimestamp { .. }
            | TimingError::NonexistentLocalTime { .. }
            | TimingError::SerializationError(_) => ErrorCategory::Input,
            TimingError::UnknownTimeZone { .. }
            | TimingError::ConfigValidationError { .. }
            | TimingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TimingError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TimingError::InvalidTimestamp { .. } => {
                "Use RFC 3339 (2026-10-18T08:00:00Z) or a naive 'YYYY-MM-DD HH:MM:SS' timestamp"
            }
            TimingError::NonexistentLocalTime { .. } => {
                "The local time falls in a DST gap; pass an explicit offset instead"
            }
            TimingError::UnknownTimeZone { .. } => {
                "Use an IANA time zone name such as 'UTC' or 'Europe/Berlin'"
            }
            TimingError::ConfigValidationError { .. }
            | TimingError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags"
            }
            TimingError::IoError(_) => "Check that the file exists and is readable",
            TimingError::SerializationError(_) => {
                "Input must be a JSON array of objects with 'id' and 'started_at'"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimingError>;
