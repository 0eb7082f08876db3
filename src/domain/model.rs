use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overdue classification of a single order at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverdueStatus {
    pub is_overdue: bool,
    pub hours_elapsed: f64,
    pub overdue_by_hours: f64,
}

/// Expected completion of an order started at a known instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionEstimate {
    pub estimated_end: DateTime<Utc>,
    pub estimated_hours: f64,
    pub formatted: String,
}

/// An order as read from a JSON export, before its timestamp is normalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
}

/// One line of a batch overdue report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub id: Option<String>,
    pub status: OverdueStatus,
    pub elapsed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
