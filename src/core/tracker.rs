use crate::core::format::format_hours;
use crate::core::overdue::OverduePolicy;
use crate::core::timezone::Localizer;
use crate::domain::model::{CompletionEstimate, OrderRecord, OverdueStatus, ReportEntry};
use crate::domain::ports::{Clock, Order};
use chrono::{DateTime, Utc};

/// Overdue checks against a clock, for callers that want "as of now" answers.
pub struct OrderTracker<C: Clock> {
    clock: C,
    policy: OverduePolicy,
    default_estimate_minutes: i64,
}

impl<C: Clock> OrderTracker<C> {
    pub fn new(clock: C) -> Self {
        Self::with_policy(clock, OverduePolicy::default())
    }

    pub fn with_policy(clock: C, policy: OverduePolicy) -> Self {
        Self {
            clock,
            default_estimate_minutes: policy.threshold_minutes(),
            policy,
        }
    }

    pub fn with_default_estimate(mut self, minutes: i64) -> Self {
        self.default_estimate_minutes = minutes;
        self
    }

    pub fn policy(&self) -> &OverduePolicy {
        &self.policy
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn is_overdue(&self, started_at: Option<DateTime<Utc>>) -> bool {
        let now = self.clock.now();
        let overdue = self.policy.is_overdue(started_at, now);
        tracing::debug!(?started_at, %now, overdue, "Overdue check");
        overdue
    }

    pub fn overdue_status<O: Order + ?Sized>(&self, order: &O) -> OverdueStatus {
        let now = self.clock.now();
        let status = self.policy.status(order, now);
        tracing::debug!(
            %now,
            hours_elapsed = status.hours_elapsed,
            overdue_by_hours = status.overdue_by_hours,
            "Overdue status"
        );
        status
    }

    pub fn estimate_completion(
        &self,
        started_at: Option<DateTime<Utc>>,
        estimated_minutes: Option<i64>,
    ) -> Option<CompletionEstimate> {
        self.policy.estimate(
            started_at,
            Some(estimated_minutes.unwrap_or(self.default_estimate_minutes)),
        )
    }

    /// Status of every record at a single instant.
    ///
    /// A blank `started_at` counts as not started. A record whose timestamp cannot be
    /// normalized is reported with an all-zero status and the error text rather than
    /// failing the batch.
    pub fn report(&self, records: &[OrderRecord], localizer: &Localizer) -> Vec<ReportEntry> {
        let now = self.clock.now();
        tracing::info!("📋 Building report for {} orders at {}", records.len(), now);

        records
            .iter()
            .map(|record| {
                // 空字串視為尚未開始
                let started_at = match record.started_at.as_deref().map(str::trim) {
                    Some(text) if !text.is_empty() => localizer.parse(text).map(Some),
                    _ => Ok(None),
                };

                match started_at {
                    Ok(started_at) => {
                        let status = self.policy.status(&started_at, now);
                        ReportEntry {
                            id: record.id.clone(),
                            status,
                            elapsed: format_hours(status.hours_elapsed),
                            error: None,
                        }
                    }
                    Err(e) => {
                        tracing::warn!("⚠️ Skipping order {:?}: {}", record.id, e);
                        ReportEntry {
                            id: record.id.clone(),
                            status: OverdueStatus::default(),
                            elapsed: format_hours(0.0),
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect()
    }
}
