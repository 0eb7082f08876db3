//! Boundary conversion of user-supplied timestamps to UTC.
//!
//! The calculator only ever sees `DateTime<Utc>`. Text coming from the command line, a
//! config file or a JSON export is parsed here, and naive wall-clock values are placed in
//! the configured zone explicitly.

use crate::utils::error::{Result, TimingError};
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampInput {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl TimestampInput {
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        if let Ok(aware) = DateTime::parse_from_rfc3339(text) {
            return Ok(TimestampInput::Aware(aware));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(TimestampInput::Naive)
            .ok_or_else(|| TimingError::InvalidTimestamp {
                value: text.to_string(),
                reason: "expected RFC 3339 or 'YYYY-MM-DD HH:MM[:SS]'".to_string(),
            })
    }

    pub fn is_naive(&self) -> bool {
        matches!(self, TimestampInput::Naive(_))
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(value: DateTime<Utc>) -> Self {
        TimestampInput::Aware(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(value: NaiveDateTime) -> Self {
        TimestampInput::Naive(value)
    }
}

/// Places naive timestamps in a fixed IANA zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localizer {
    zone: Tz,
}

impl Default for Localizer {
    fn default() -> Self {
        Self { zone: Tz::UTC }
    }
}

impl Localizer {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| TimingError::UnknownTimeZone {
                name: name.to_string(),
            })
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn normalize(&self, input: TimestampInput) -> Result<DateTime<Utc>> {
        match input {
            TimestampInput::Aware(aware) => Ok(aware.with_timezone(&Utc)),
            TimestampInput::Naive(naive) => match self.zone.from_local_datetime(&naive) {
                LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
                LocalResult::Ambiguous(earliest, latest) => {
                    tracing::warn!(
                        "⚠️ Ambiguous local time {} in {}, using {} (not {})",
                        naive,
                        self.zone,
                        earliest,
                        latest
                    );
                    Ok(earliest.with_timezone(&Utc))
                }
                LocalResult::None => Err(TimingError::NonexistentLocalTime {
                    value: naive.to_string(),
                    zone: self.zone.name().to_string(),
                }),
            },
        }
    }

    pub fn parse(&self, text: &str) -> Result<DateTime<Utc>> {
        let input = TimestampInput::parse(text)?;
        let normalized = self.normalize(input)?;
        tracing::debug!("Normalized '{}' to {}", text, normalized);
        Ok(normalized)
    }

    pub fn display(&self, ts: DateTime<Utc>) -> String {
        ts.with_timezone(&self.zone)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aware_and_naive() {
        let aware = TimestampInput::parse("2026-10-18T08:00:00+02:00").unwrap();
        assert!(!aware.is_naive());

        let naive = TimestampInput::parse("2026-10-18 08:00:00").unwrap();
        assert!(naive.is_naive());

        let naive = TimestampInput::parse("2026-10-18T08:00").unwrap();
        assert!(naive.is_naive());

        let fractional = TimestampInput::parse("2026-10-18T08:00:00.250").unwrap();
        assert!(fractional.is_naive());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            TimestampInput::parse("yesterday"),
            Err(TimingError::InvalidTimestamp { .. })
        ));
        assert!(TimestampInput::parse("2026-13-01 00:00:00").is_err());
        assert!(TimestampInput::parse("").is_err());
    }

    #[test]
    fn test_aware_input_ignores_zone() {
        let localizer = Localizer::from_name("Asia/Taipei").unwrap();
        let utc = localizer.parse("2026-10-18T08:00:00+02:00").unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2026, 10, 18, 6, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_input_uses_zone() {
        let localizer = Localizer::from_name("Asia/Taipei").unwrap();
        let utc = localizer.parse("2026-10-18 08:00:00").unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap());

        let utc = Localizer::default().parse("2026-10-18 08:00:00").unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_ambiguous_local_time_uses_earliest() {
        // 2026-10-25 02:30 在柏林出現兩次 (CEST 與 CET)
        let localizer = Localizer::from_name("Europe/Berlin").unwrap();
        let utc = localizer.parse("2026-10-25 02:30:00").unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2026, 10, 25, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_nonexistent_local_time_is_rejected() {
        // 2026-03-29 02:30 在柏林不存在
        let localizer = Localizer::from_name("Europe/Berlin").unwrap();
        let err = localizer.parse("2026-03-29 02:30:00").unwrap_err();
        assert!(matches!(err, TimingError::NonexistentLocalTime { .. }));
    }

    #[test]
    fn test_unknown_zone() {
        assert!(matches!(
            Localizer::from_name("Mars/Olympus_Mons"),
            Err(TimingError::UnknownTimeZone { .. })
        ));
    }

    #[test]
    fn test_display_in_zone() {
        let localizer = Localizer::from_name("Asia/Taipei").unwrap();
        let ts = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
        assert_eq!(localizer.display(ts), "2026-10-18 08:00:00 CST");
    }
}
