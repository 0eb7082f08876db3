/// Render fractional hours as `"Xh Ym"`, `"Xh"`, `"Ym"` or `"0h"`.
///
/// Partial minutes are truncated. Negative and NaN inputs render as `"0h"`.
pub fn format_hours(hours: f64) -> String {
    if hours < 0.0 || hours.is_nan() {
        return "0h".to_string();
    }

    // float → u64 轉換在溢位時飽和
    let total_minutes = (hours * 60.0) as u64;
    let hours_part = total_minutes / 60;
    let minutes_part = total_minutes % 60;

    match (hours_part, minutes_part) {
        (0, 0) => "0h".to_string(),
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero_and_negative() {
        assert_eq!(format_hours(0.0), "0h");
        assert_eq!(format_hours(-1.0), "0h");
        assert_eq!(format_hours(f64::NAN), "0h");
    }

    #[test]
    fn test_format_hours_and_minutes() {
        assert_eq!(format_hours(1.5), "1h 30m");
        assert_eq!(format_hours(9.5), "9h 30m");
        assert_eq!(format_hours(2.25), "2h 15m");
    }

    #[test]
    fn test_format_only_minutes_or_hours() {
        assert_eq!(format_hours(0.25), "15m");
        assert_eq!(format_hours(9.0), "9h");
        assert_eq!(format_hours(24.0), "24h");
    }

    #[test]
    fn test_format_truncates_partial_minutes() {
        // 59.5 秒不足一分鐘
        assert_eq!(format_hours(59.5 / 3600.0), "0h");
        // 1h 0m 54s
        assert_eq!(format_hours(1.015), "1h");
        assert_eq!(format_hours(10.0 / 60.0 + 0.0001), "10m");
    }
}
