use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
use order_overdue::utils::validation::Validate;
use order_overdue::{FixedClock, OrderRecord, OrderTracker, TimingConfig};
use tempfile::TempDir;

#[test]
fn test_report_from_config_and_json_file() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let config_path = temp_dir.path().join("order-overdue.toml");
    std::fs::write(
        &config_path,
        r#"
[timing]
threshold_hours = 9.0
timezone = "Asia/Taipei"

[logging]
level = "warn"
"#,
    )?;

    let orders_path = temp_dir.path().join("orders.json");
    std::fs::write(
        &orders_path,
        r#"[
    {"id": "ORD-1", "started_at": "2026-10-18 08:00:00"},
    {"id": "ORD-2", "started_at": "2026-10-18T15:30:00+08:00"},
    {"id": "ORD-3"},
    {"id": "ORD-4", "started_at": "18/10/2026"}
]"#,
    )?;

    let config = TimingConfig::from_file(&config_path)?;
    config.validate()?;
    let localizer = config.localizer()?;

    let records: Vec<OrderRecord> = serde_json::from_str(&std::fs::read_to_string(&orders_path)?)?;
    assert_eq!(records.len(), 4);

    // 台北 18:00
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 10, 0, 0).unwrap();
    let tracker = OrderTracker::with_policy(FixedClock::new(now), config.policy())
        .with_default_estimate(config.default_estimate_minutes());

    let entries = tracker.report(&records, &localizer);
    assert_eq!(entries.len(), 4);

    assert_eq!(entries[0].id.as_deref(), Some("ORD-1"));
    assert!(entries[0].status.is_overdue);
    assert_eq!(entries[0].status.hours_elapsed, 10.0);
    assert_eq!(entries[0].status.overdue_by_hours, 1.0);
    assert_eq!(entries[0].elapsed, "10h");

    assert!(!entries[1].status.is_overdue);
    assert_eq!(entries[1].status.hours_elapsed, 2.5);
    assert_eq!(entries[1].elapsed, "2h 30m");

    assert!(!entries[2].status.is_overdue);
    assert!(entries[2].error.is_none());
    assert_eq!(entries[2].elapsed, "0h");

    assert!(entries[3].error.is_some());

    let json = serde_json::to_value(&entries)?;
    assert_eq!(json[0]["status"]["is_overdue"], true);
    assert!(json[0].get("error").is_none());
    assert!(json[3]["error"].is_string());

    let estimate = tracker
        .estimate_completion(Some(now - Duration::hours(1)), None)
        .unwrap();
    assert_eq!(estimate.estimated_end, now + Duration::hours(8));

    Ok(())
}

#[test]
fn test_invalid_timezone_in_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bad.toml");
    std::fs::write(&config_path, "[timing]\ntimezone = \"Atlantis/Capital\"\n")?;

    let config = TimingConfig::from_file(&config_path)?;
    let err = config.validate().unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(config.localizer().is_err());

    Ok(())
}

#[test]
fn test_missing_config_file() {
    let err = TimingConfig::from_file("/nonexistent/order-overdue.toml").unwrap_err();
    assert_eq!(err.exit_code(), 3);
}
