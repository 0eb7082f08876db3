use anyhow::Context;
use clap::Parser;
use order_overdue::utils::{logger, validation::Validate};
use order_overdue::{
    format_hours, CliConfig, Clock, Command, FixedClock, Localizer, OrderRecord, OrderTracker,
    SystemClock, TimingConfig, TimingError,
};
use serde::Serialize;

fn main() {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (預設檔案不存在時使用預設值)
    let mut config = if cli.config.exists() {
        match TimingConfig::from_file(&cli.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "❌ Failed to load config file '{}': {}",
                    cli.config.display(),
                    e
                );
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        }
    } else {
        TimingConfig::default()
    };

    // 應用命令列覆蓋設定
    if let Some(timezone) = &cli.timezone {
        config.timing.timezone = timezone.clone();
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ Configuration validation failed: {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Timing config: {:?}", config);

    if let Err(e) = run(&cli, &config) {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);

        let exit_code = match e.downcast_ref::<TimingError>() {
            Some(timing_error) => {
                eprintln!("💡 {}", timing_error.recovery_suggestion());
                timing_error.exit_code()
            }
            None => 1,
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig, config: &TimingConfig) -> anyhow::Result<()> {
    let localizer = config.localizer()?;

    match &cli.command {
        Command::Check { started_at, now } => {
            let tracker = build_tracker(config, &localizer, now.as_deref())?;
            let started_at = localizer.parse(started_at)?;
            let overdue = tracker.is_overdue(Some(started_at));

            if cli.json {
                print_json(&serde_json::json!({ "is_overdue": overdue }))?;
            } else if overdue {
                println!("⏰ overdue");
            } else {
                println!("✅ on time");
            }
        }
        Command::Status { started_at, now } => {
            let tracker = build_tracker(config, &localizer, now.as_deref())?;
            let started_at = localizer.parse(started_at)?;
            let status = tracker.overdue_status(&started_at);

            if cli.json {
                print_json(&status)?;
            } else {
                println!("Started:      {}", localizer.display(started_at));
                println!(
                    "Elapsed:      {} ({:.2}h)",
                    format_hours(status.hours_elapsed),
                    status.hours_elapsed
                );
                println!(
                    "Overdue:      {}",
                    if status.is_overdue { "yes" } else { "no" }
                );
                if status.is_overdue {
                    println!(
                        "Overdue by:   {} ({:.2}h)",
                        format_hours(status.overdue_by_hours),
                        status.overdue_by_hours
                    );
                }
            }
        }
        Command::Format { hours } => {
            let formatted = format_hours(*hours);
            if cli.json {
                print_json(&serde_json::json!({ "hours": hours, "formatted": formatted }))?;
            } else {
                println!("{}", formatted);
            }
        }
        Command::Estimate {
            started_at,
            minutes,
        } => {
            let tracker = build_tracker(config, &localizer, None)?;
            let started_at = localizer.parse(started_at)?;
            let estimate = tracker
                .estimate_completion(Some(started_at), *minutes)
                .context("estimated completion is outside the supported date range")?;

            if cli.json {
                print_json(&estimate)?;
            } else {
                println!("Started:        {}", localizer.display(started_at));
                println!("Estimated end:  {}", localizer.display(estimate.estimated_end));
                println!("Duration:       {}", estimate.formatted);
            }
        }
        Command::Report { input, now } => {
            let tracker = build_tracker(config, &localizer, now.as_deref())?;
            let content = std::fs::read_to_string(input)
                .map_err(TimingError::IoError)
                .with_context(|| format!("failed to read '{}'", input.display()))?;
            let records: Vec<OrderRecord> = serde_json::from_str(&content)
                .map_err(TimingError::SerializationError)
                .with_context(|| format!("failed to parse '{}'", input.display()))?;

            let entries = tracker.report(&records, &localizer);

            if cli.json {
                print_json(&entries)?;
            } else {
                let overdue = entries.iter().filter(|e| e.status.is_overdue).count();
                println!(
                    "📋 {} orders, {} overdue (as of {})",
                    entries.len(),
                    overdue,
                    localizer.display(tracker.now())
                );
                for entry in &entries {
                    let id = entry.id.as_deref().unwrap_or("-");
                    match &entry.error {
                        Some(error) => println!("  {:<16} ⚠️ {}", id, error),
                        None if entry.status.is_overdue => println!(
                            "  {:<16} ⏰ {} (overdue by {})",
                            id,
                            entry.elapsed,
                            format_hours(entry.status.overdue_by_hours)
                        ),
                        None => println!("  {:<16} ✅ {}", id, entry.elapsed),
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_tracker(
    config: &TimingConfig,
    localizer: &Localizer,
    now: Option<&str>,
) -> order_overdue::Result<OrderTracker<Box<dyn Clock>>> {
    let clock: Box<dyn Clock> = match now {
        Some(now) => Box::new(FixedClock::new(localizer.parse(now)?)),
        None => Box::new(SystemClock),
    };

    Ok(OrderTracker::with_policy(clock, config.policy())
        .with_default_estimate(config.default_estimate_minutes()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
