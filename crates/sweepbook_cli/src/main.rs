//! `sweepbook` command-line front end.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the store database.
//! - Dispatch one subcommand against the loaded `AppState`.
//!
//! # Invariants
//! - Failures exit non-zero with a single-line message; nothing panics on
//!   bad input or unknown ids.

mod commands;
mod error;

use chrono::{Local, NaiveDate};
use clap::Parser;
use commands::Command;
use error::CliError;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use sweepbook_core::db::open_db;
use sweepbook_core::{init_logging, AppConfig, AppState, SeedData, SqliteKeyValueStore};

#[derive(Parser)]
#[command(name = "sweepbook", about = "Book of business for house-cleaning providers", version)]
struct Cli {
    /// Store database file; overrides SWEEPBOOK_DB_PATH
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Start unwritten collections empty instead of with sample data
    #[arg(long)]
    no_seed: bool,

    /// Date treated as today
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sweepbook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = AppConfig::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let conn = open_db(&config.db_path)?;
    info!(
        "event=cli_start module=cli status=ok today={today} seeded={}",
        !cli.no_seed
    );

    let seed = if cli.no_seed {
        SeedData::empty()
    } else {
        SeedData::fixtures(today)
    };
    let mut state = AppState::load(SqliteKeyValueStore::new(&conn), seed);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&mut state, cli.command, today, &mut out)
}
