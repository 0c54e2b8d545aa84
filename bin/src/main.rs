//! tickstore CLI - OHLC candles from a ClickHouse tick table.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tickstore_lib::{OutputFormat, StoreConfig};
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "tickstore")]
#[command(about = "OHLC candles from a ClickHouse tick table", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    store: StoreArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Connection settings for the tick store.
#[derive(Args)]
struct StoreArgs {
    /// ClickHouse HTTP endpoint
    #[arg(long, global = true, env = "TICKSTORE_URL", default_value = "http://localhost:8123")]
    url: String,

    /// Database holding the tick table
    #[arg(long, global = true, env = "TICKSTORE_DATABASE", default_value = "default")]
    database: String,

    /// User name
    #[arg(long, global = true, env = "TICKSTORE_USER", default_value = "default")]
    user: String,

    /// Password
    #[arg(long, global = true, env = "TICKSTORE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Tick table name
    #[arg(long, global = true, env = "TICKSTORE_TABLE", default_value = "tickdata")]
    table: String,
}

impl StoreArgs {
    fn into_config(self) -> StoreConfig {
        let config = StoreConfig::default()
            .with_url(self.url)
            .with_database(self.database)
            .with_user(self.user)
            .with_table(self.table);
        match self.password {
            Some(password) => config.with_password(password),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// One-minute candles over an inclusive range
    Candles {
        /// Instrument token
        instrument: String,

        /// Range start (YYYY-MM-DD HH:MM:SS), inclusive
        #[arg(short, long)]
        start: String,

        /// Range end (YYYY-MM-DD HH:MM:SS), inclusive
        #[arg(short, long)]
        end: String,

        /// Output format
        #[arg(short, long, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// A single candle covering the whole range
    Window {
        /// Instrument token
        instrument: String,

        /// Range start (YYYY-MM-DD HH:MM:SS), inclusive
        #[arg(short, long)]
        start: String,

        /// Range end (YYYY-MM-DD HH:MM:SS), inclusive
        #[arg(short, long, conflicts_with = "minutes", required_unless_present = "minutes")]
        end: Option<String>,

        /// Window width in minutes, as an alternative to --end
        #[arg(short, long)]
        minutes: Option<u32>,

        /// Output format
        #[arg(short, long, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = cli.store.into_config();

    match command {
        Commands::Candles {
            instrument,
            start,
            end,
            format,
            output,
        } => commands::candles::candles(config, &instrument, &start, &end, format, output).await,
        Commands::Window {
            instrument,
            start,
            end,
            minutes,
            format,
            output,
        } => {
            commands::window::window(
                config,
                &instrument,
                &start,
                end.as_deref(),
                minutes,
                format,
                output,
            )
            .await
        }
    }
}
