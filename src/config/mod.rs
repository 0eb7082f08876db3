pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "order-overdue")]
    #[command(about = "Elapsed time and overdue status for orders")]
    pub struct CliConfig {
        /// Path to TOML configuration file
        #[arg(short, long, default_value = "order-overdue.toml")]
        pub config: PathBuf,

        /// IANA time zone for timestamps without an offset (overrides config)
        #[arg(long)]
        pub timezone: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        pub json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Check whether an order is overdue
        Check {
            #[arg(long)]
            started_at: String,
            /// Evaluate at this instant instead of the current time
            #[arg(long)]
            now: Option<String>,
        },
        /// Show elapsed hours and how far past the threshold an order is
        Status {
            #[arg(long)]
            started_at: String,
            #[arg(long)]
            now: Option<String>,
        },
        /// Format fractional hours, e.g. 1.5 -> "1h 30m"
        Format {
            #[arg(allow_negative_numbers = true)]
            hours: f64,
        },
        /// Estimate when an order will complete
        Estimate {
            #[arg(long)]
            started_at: String,
            /// Estimated duration in minutes (defaults to the configured estimate)
            #[arg(long, allow_negative_numbers = true)]
            minutes: Option<i64>,
        },
        /// Overdue report for a JSON array of orders
        Report {
            #[arg(short, long)]
            input: PathBuf,
            #[arg(long)]
            now: Option<String>,
        },
    }
}
