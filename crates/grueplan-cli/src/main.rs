//! `grueplan` CLI — combine, reconcile, and submit plan window fields from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Combine a date and a time field into an RFC 3339 instant
//! grueplan combine --date 2024-01-01 --time 14:00
//!
//! # Apply one field edit and print the reconciled window as JSON
//! grueplan reconcile \
//!   --start-date 2024-01-01 --start-time 09:00 \
//!   --end-date 2024-01-01 --end-time 10:00 \
//!   --edit start-time=11:00
//!
//! # Render the window the way a plan is submitted
//! grueplan submit --start-date 2024-01-01 --start-time 09:00 \
//!   --end-date 2024-01-01 --end-time 10:00
//!
//! # Use a named zone instead of the machine's (or set GRUEPLAN_TZ)
//! grueplan --tz America/New_York combine --date 2024-03-10 --time 02:30
//!
//! # Show reconciliation decisions
//! RUST_LOG=grueplan_time=debug grueplan reconcile ...
//! ```

use anyhow::{anyhow, Context, Result};
use chrono::{Local, TimeZone};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use grueplan_time::{Edit, Endpoint, PlanWindow};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grueplan",
    version,
    about = "Grueplan plan window arithmetic"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone to read wall times in (defaults to the local zone)
    #[arg(long, global = true, env = "GRUEPLAN_TZ")]
    tz: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Combine a date and a time field into an instant
    Combine {
        /// Date field value (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time field value (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Apply one field edit and print the reconciled window as JSON
    Reconcile {
        #[command(flatten)]
        window: WindowArgs,
        /// The edit, e.g. start-date=2024-01-05 or end-time=17:30
        #[arg(long)]
        edit: Edit,
    },
    /// Print the window's submission timestamps as JSON
    Submit {
        #[command(flatten)]
        window: WindowArgs,
    },
}

#[derive(Args)]
struct WindowArgs {
    /// Current start date (YYYY-MM-DD)
    #[arg(long)]
    start_date: String,
    /// Current start time (HH:MM)
    #[arg(long)]
    start_time: String,
    /// Current end date (YYYY-MM-DD)
    #[arg(long)]
    end_date: String,
    /// Current end time (HH:MM)
    #[arg(long)]
    end_time: String,
}

impl WindowArgs {
    fn into_window(self) -> PlanWindow {
        PlanWindow::new(
            Endpoint::new(self.start_date, self.start_time),
            Endpoint::new(self.end_date, self.end_time),
        )
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.tz.as_deref() {
        Some(name) => {
            let tz = parse_timezone(name)?;
            debug!(zone = %tz, "using named zone");
            run(&tz, cli.command)
        }
        None => {
            debug!("using local zone");
            run(&Local, cli.command)
        }
    }
}

fn run<Z: TimeZone>(tz: &Z, command: Commands) -> Result<()> {
    match command {
        Commands::Combine { date, time } => {
            let instant = grueplan_time::combine_in(tz, &date, &time)
                .with_context(|| format!("Failed to combine '{}' and '{}'", date, time))?;
            println!("{}", instant.fixed_offset().to_rfc3339());
        }
        Commands::Reconcile { window, edit } => {
            let current = window.into_window();
            let next = grueplan_time::reconcile(tz, &current, &edit)
                .with_context(|| format!("Failed to apply edit '{}'", edit))?;
            println!("{}", serde_json::to_string_pretty(&next)?);
        }
        Commands::Submit { window } => {
            let window = window.into_window();
            let submission = grueplan_time::submission(tz, &window)
                .context("Failed to build submission")?;
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }
    }

    Ok(())
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| anyhow!("Unknown timezone: '{}'. Use an IANA name such as Europe/London", name))
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}
