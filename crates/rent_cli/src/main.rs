//! rent-schedule CLI - Billing-cycle rent schedules from lease terms
//!
//! # Commands
//!
//! - `rent-schedule schedule` - Build the rent schedule for a reporting window
//! - `rent-schedule next-due --date <D> --due-day <N>` - Next occurrence of a due day
//! - `rent-schedule prorate --rent <N> --lease-start <D> --due-day <N>` - First-month proration
//!
//! Lease terms are layered: defaults, then the `--terms` TOML file, then
//! `RENT_*` environment variables, then flags.

use clap::{Args, Parser, Subcommand};
use rent_cli::config::{build_config, CliArgs, LogLevel, OutputFormat, RentTermsDraft};
use rent_cli::{commands, Result};
use rent_schedule::Date;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Lease rent schedule calculator
#[derive(Parser)]
#[command(name = "rent-schedule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the rent schedule for a reporting window
    Schedule(ScheduleArgs),

    /// Show the next occurrence of a rent due day
    NextDue {
        /// Reference date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Date,

        /// Day of month rent is due (clamped to month length)
        #[arg(long)]
        due_day: u32,

        /// Return the reference date itself if it is a due date
        #[arg(long)]
        include_current: bool,
    },

    /// Show the prorated first-month rent
    Prorate {
        /// Full monthly rent
        #[arg(short, long)]
        rent: Decimal,

        /// Lease start date (YYYY-MM-DD)
        #[arg(long)]
        lease_start: Date,

        /// Day of month rent is due
        #[arg(long)]
        due_day: u32,
    },
}

#[derive(Args)]
struct ScheduleArgs {
    /// TOML file with lease terms and output settings
    #[arg(short, long, value_name = "FILE")]
    terms: Option<PathBuf>,

    /// Starting monthly rent
    #[arg(long)]
    base_rent: Option<Decimal>,

    /// Lease start date (YYYY-MM-DD)
    #[arg(long)]
    lease_start: Option<Date>,

    /// First date of the reporting window (YYYY-MM-DD)
    #[arg(long)]
    window_start: Option<Date>,

    /// Last date of the reporting window (YYYY-MM-DD)
    #[arg(long)]
    window_end: Option<Date>,

    /// Day of month rent is due (default 1)
    #[arg(long)]
    due_day: Option<u32>,

    /// Months between rent changes (default 1)
    #[arg(long)]
    change_frequency: Option<u32>,

    /// Signed change rate, e.g. 0.03 or -0.05 (default 0)
    #[arg(long, allow_hyphen_values = true)]
    change_rate: Option<Decimal>,

    /// Prorate the first occupied cycle
    #[arg(long)]
    prorate: bool,
}

impl From<&ScheduleArgs> for RentTermsDraft {
    fn from(args: &ScheduleArgs) -> Self {
        RentTermsDraft {
            base_monthly_rent: args.base_rent,
            lease_start_date: args.lease_start,
            window_start_date: args.window_start,
            window_end_date: args.window_end,
            day_of_month_rent_due: args.due_day,
            rent_rate_change_frequency: args.change_frequency,
            rent_change_rate: args.change_rate,
            prorate_first_month: args.prorate.then_some(true),
        }
    }
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let mut args = CliArgs {
            format: cli.format,
            log_level: cli.log_level,
            verbose: cli.verbose,
            ..Default::default()
        };
        if let Commands::Schedule(schedule) = &cli.command {
            args.config_file = schedule.terms.clone();
            args.terms = schedule.into();
        }
        args
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level);
    info!(
        version = rent_cli::VERSION,
        format = %config.format,
        log_level = %config.log_level,
        "rent-schedule configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Schedule(_) => commands::schedule::run(&config, &mut out),
        Commands::NextDue {
            date,
            due_day,
            include_current,
        } => commands::next_due::run(date, due_day, include_current, config.format, &mut out),
        Commands::Prorate {
            rent,
            lease_start,
            due_day,
        } => commands::prorate::run(rent, lease_start, due_day, config.format, &mut out),
    }
}
