//! Command line front end: the presentation layer around the engine.

pub mod output;

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::{Config, ConfigError, ConfigManager, OutputFormat};
use crate::core::services::DashboardService;
use crate::domain::{PeriodError, ReportPeriod};
use crate::errors::SourceError;
use crate::storage::{json_backend::load_snapshot, MemorySource};
use crate::utils::build_info;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid period: {0}")]
    Period(#[from] PeriodError),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Parser)]
#[command(
    name = "finhealth_cli",
    version,
    about = "Financial summary, health score and freedom status"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Assemble the dashboard for one month from a JSON snapshot
    Report {
        /// Snapshot file with `accounts`, `transactions`, `loans` and `items`
        #[arg(long)]
        snapshot: PathBuf,
        /// Month 1-12, defaults to the current month
        #[arg(long)]
        month: Option<u32>,
        /// Defaults to the current year
        #[arg(long)]
        year: Option<i32>,
        /// `text` or `json`, overrides the configured output
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Directory holding `config.json`
        #[arg(long)]
        config_dir: Option<PathBuf>,
        #[arg(long)]
        no_color: bool,
    },
    /// Show or change the preferences stored in `config.json`
    Config {
        /// Directory holding `config.json`
        #[arg(long)]
        config_dir: Option<PathBuf>,
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Print build information
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print every setting (the default)
    Show,
    /// Set `locale`, `currency`, `currency_precision`, `output` or `color`
    Set { key: String, value: String },
}

/// Parses process arguments and runs the chosen command against stdout.
pub fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

pub fn execute(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Report {
            snapshot,
            month,
            year,
            format,
            config_dir,
            no_color,
        } => {
            let mut config = load_config(config_dir)?;
            if no_color {
                config.color_enabled = false;
            }
            let period = resolve_period(year, month)?;
            // One read per report keeps every collection from the same file version.
            let source = MemorySource::from(load_snapshot(&snapshot)?);
            let report = DashboardService::assemble(&source, period)?;
            match format.unwrap_or(config.output) {
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut *out, &report)?;
                    writeln!(out)?;
                }
                OutputFormat::Text => write!(out, "{}", output::render_text(&report, &config))?,
            }
        }
        Commands::Config { config_dir, action } => {
            let manager = config_manager(config_dir)?;
            let mut config = manager.load()?;
            if let Some(ConfigAction::Set { key, value }) = action {
                config.set(&key, &value)?;
                manager.save(&config)?;
                tracing::info!(%key, %value, path = %manager.config_path().display(), "saved config");
            }
            writeln!(out, "# {}", manager.config_path().display())?;
            for (key, value) in config.entries() {
                writeln!(out, "{key} = {value}")?;
            }
        }
        Commands::Version => writeln!(out, "{}", build_info::current().summary())?,
    }
    Ok(())
}

fn config_manager(config_dir: Option<PathBuf>) -> Result<ConfigManager, ConfigError> {
    match config_dir {
        Some(dir) => Ok(ConfigManager::with_base_dir(dir)),
        None => ConfigManager::new(),
    }
}

fn load_config(config_dir: Option<PathBuf>) -> Result<Config, CliError> {
    let manager = match config_dir {
        Some(dir) => ConfigManager::with_base_dir(dir),
        None => match ConfigManager::new() {
            Ok(manager) => manager,
            Err(ConfigError::NoConfigDir) => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        },
    };
    Ok(manager.load()?)
}

/// Missing parts of the period fall back to today's month and year.
fn resolve_period(year: Option<i32>, month: Option<u32>) -> Result<ReportPeriod, PeriodError> {
    let today = Local::now().date_naive();
    match (year, month) {
        (None, None) => Ok(ReportPeriod::containing(today)),
        (year, month) => ReportPeriod::new(
            year.unwrap_or_else(|| today.year()),
            month.unwrap_or_else(|| today.month()),
        ),
    }
}
