use crate::domain::model::OverdueStatus;
use crate::domain::ports::Order;
use chrono::{DateTime, Utc};

/// Orders open this many calendar hours or longer are overdue.
pub const OVERDUE_THRESHOLD_HOURS: f64 = 9.0;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Wall-clock hours between two instants. Negative when `now` precedes `started_at`.
pub fn elapsed_hours(started_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let delta = now.signed_duration_since(started_at);
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / MICROS_PER_HOUR,
        None => delta.num_milliseconds() as f64 / MILLIS_PER_HOUR,
    }
}

/// 兩位小數，恰好一半時取偶數位
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverduePolicy {
    pub threshold_hours: f64,
}

impl Default for OverduePolicy {
    fn default() -> Self {
        Self {
            threshold_hours: OVERDUE_THRESHOLD_HOURS,
        }
    }
}

impl OverduePolicy {
    pub fn new(threshold_hours: f64) -> Self {
        Self { threshold_hours }
    }

    /// Default estimate for an order, one full threshold window.
    pub fn threshold_minutes(&self) -> i64 {
        (self.threshold_hours * 60.0).round() as i64
    }

    pub fn is_overdue(&self, started_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match started_at {
            Some(started_at) => elapsed_hours(started_at, now) >= self.threshold_hours,
            None => false,
        }
    }

    pub fn status<O: Order + ?Sized>(&self, order: &O, now: DateTime<Utc>) -> OverdueStatus {
        let Some(started_at) = order.started_at() else {
            return OverdueStatus::default();
        };

        let elapsed = elapsed_hours(started_at, now);
        let mut status = OverdueStatus {
            is_overdue: false,
            hours_elapsed: round2(elapsed),
            overdue_by_hours: 0.0,
        };

        if elapsed >= self.threshold_hours {
            status.is_overdue = true;
            status.overdue_by_hours = round2(elapsed - self.threshold_hours);
        }

        status
    }
}

/// Whether an order started at `started_at` has passed the 9 hour threshold at `now`.
pub fn is_overdue(started_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    OverduePolicy::default().is_overdue(started_at, now)
}

/// Overdue status of `order` at `now`, rounded to two decimals.
pub fn overdue_status<O: Order + ?Sized>(order: &O, now: DateTime<Utc>) -> OverdueStatus {
    OverduePolicy::default().status(order, now)
}
