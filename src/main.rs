mod commands;
mod render;

use anyhow::Result;
use calx_core::config::CalxConfig;
use calx_core::date_range::DateRange;
use calx_core::store::DirStore;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calx")]
#[command(about = "Query and capture events in a line-oriented calendar directory")]
struct Cli {
    /// Read this principal's personal sources (default: the config's principal)
    #[arg(short, long, global = true)]
    principal: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events in a date window
    Events {
        /// Start of the window (YYYY-MM-DD, default: today)
        #[arg(long)]
        from: Option<String>,

        /// End of the window (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Days to look ahead when --to is not given
        #[arg(long)]
        days: Option<i64>,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an event to a source
    Add {
        /// Event date (YYYY-MM-DD); the first occurrence for recurring events
        date: String,

        /// Event description
        description: String,

        /// Repeat the event
        #[arg(short, long, value_enum)]
        recur: Option<commands::add::RecurKind>,

        /// Last possible occurrence (YYYY-MM-DD), recurring events only
        #[arg(long)]
        end: Option<String>,

        /// Target source, e.g. "global/holidays" (default: the principal's schedule)
        #[arg(short, long)]
        source: Option<String>,

        /// Rewrite the source sorted by date, dropping blanks and comments
        #[arg(long)]
        sorted: bool,
    },
    /// List event sources
    Sources,
    /// Show or change configuration
    Config {
        /// Set the default principal
        #[arg(long = "set-principal", value_name = "NAME")]
        set_principal: Option<String>,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CalxConfig::load()?;
    let store = DirStore::new(config.data_path());
    let principal = cli.principal.clone().or_else(|| config.principal.clone());

    match cli.command {
        Commands::Events { from, to, days, json } => {
            let today = chrono::Local::now().date_naive();
            let days_ahead = days.unwrap_or(config.days_ahead);
            let range = DateRange::from_args(from.as_deref(), to.as_deref(), today, days_ahead)?;
            commands::events::run(&store, principal.as_deref(), &range, today, json)
        }
        Commands::Add {
            date,
            description,
            recur,
            end,
            source,
            sorted,
        } => {
            let target = resolve_target(source, principal.as_deref())?;
            commands::add::run(&store, &target, &date, &description, recur, end.as_deref(), sorted)
        }
        Commands::Sources => commands::sources::run(&store, principal.as_deref()),
        Commands::Config { set_principal } => commands::config::run(config, set_principal),
    }
}

/// Pick the source a new event goes to: an explicit --source, or the
/// principal's schedule.
fn resolve_target(source: Option<String>, principal: Option<&str>) -> Result<String> {
    match source {
        Some(source) => Ok(source),
        None => match principal {
            Some(name) => Ok(format!("{name}/schedule")),
            None => anyhow::bail!(
                "No target source.\n\n\
                Pass one with:\n  \
                calx add --source global/holidays ...\n\n\
                or set a principal:\n  \
                calx config --principal <name>"
            ),
        },
    }
}
