pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use crate::adapters::{FixedClock, SystemClock};
pub use crate::config::toml_config::TimingConfig;
pub use crate::core::estimate::{estimate_completion, DEFAULT_ESTIMATE_MINUTES};
pub use crate::core::format::format_hours;
pub use crate::core::overdue::{
    elapsed_hours, is_overdue, overdue_status, OverduePolicy, OVERDUE_THRESHOLD_HOURS,
};
pub use crate::core::timezone::{Localizer, TimestampInput};
pub use crate::core::tracker::OrderTracker;
pub use crate::domain::model::{CompletionEstimate, OrderRecord, OverdueStatus, ReportEntry};
pub use crate::domain::ports::{Clock, Order};
pub use crate::utils::error::{Result, TimingError};
