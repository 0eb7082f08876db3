use crate::core::format::format_hours;
use crate::core::overdue::OverduePolicy;
use crate::domain::model::CompletionEstimate;
use chrono::{DateTime, Duration, Utc};

/// Default estimated duration of an order, in minutes.
pub const DEFAULT_ESTIMATE_MINUTES: i64 = 540;

/// Estimate when an order started at `started_at` will complete.
///
/// `estimated_minutes` defaults to [`DEFAULT_ESTIMATE_MINUTES`]. Returns `None` when there is
/// no start time, or when the end instant would fall outside the representable range.
pub fn estimate_completion(
    started_at: Option<DateTime<Utc>>,
    estimated_minutes: Option<i64>,
) -> Option<CompletionEstimate> {
    let started_at = started_at?;
    let estimated_minutes = estimated_minutes.unwrap_or(DEFAULT_ESTIMATE_MINUTES);

    let Some(estimated_end) = Duration::try_minutes(estimated_minutes)
        .and_then(|duration| started_at.checked_add_signed(duration))
    else {
        tracing::warn!(
            "⚠️ Completion estimate out of range: {} + {} minutes",
            started_at,
            estimated_minutes
        );
        return None;
    };

    let estimated_hours = estimated_minutes as f64 / 60.0;

    Some(CompletionEstimate {
        estimated_end,
        estimated_hours,
        formatted: format_hours(estimated_hours),
    })
}

impl OverduePolicy {
    /// Estimate using one threshold window when no duration is given.
    pub fn estimate(
        &self,
        started_at: Option<DateTime<Utc>>,
        estimated_minutes: Option<i64>,
    ) -> Option<CompletionEstimate> {
        estimate_completion(
            started_at,
            Some(estimated_minutes.unwrap_or_else(|| self.threshold_minutes())),
        )
    }
}
