use chrono::{DateTime, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Anything the host application tracks with a start time.
pub trait Order {
    fn started_at(&self) -> Option<DateTime<Utc>>;
}

impl Order for Option<DateTime<Utc>> {
    fn started_at(&self) -> Option<DateTime<Utc>> {
        *self
    }
}

impl Order for DateTime<Utc> {
    fn started_at(&self) -> Option<DateTime<Utc>> {
        Some(*self)
    }
}

impl<T: Order + ?Sized> Order for &T {
    fn started_at(&self) -> Option<DateTime<Utc>> {
        (**self).started_at()
    }
}
