pub mod estimate;
pub mod format;
pub mod overdue;
pub mod timezone;
pub mod tracker;

pub use crate::domain::model::{CompletionEstimate, OrderRecord, OverdueStatus, ReportEntry};
pub use crate::domain::ports::{Clock, Order};
pub use crate::utils::error::Result;
