mod menu;
mod view;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wfh_core::service::report;
use wfh_core::{Config, FileRecordRepository, Prompter, RecordService, StoreError};

#[derive(Parser)]
#[command(name = "wfh")]
#[command(about = "Record and review weekly work-from-home hours", long_about = None)]
struct Cli {
    /// Config file (JSON). Defaults to ~/.wfh-tracker/config.json when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Record file to read and write
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Number of employees entered per weekly report
    #[arg(long, global = true)]
    roster_size: Option<usize>,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Interactive menu (the default)
    Menu,
    /// Print the most recent records (0 = all)
    Fetch {
        #[arg(default_value_t = 0)]
        count: usize,
        /// Decode the records and show them as a table
        #[arg(long)]
        table: bool,
    },
    /// Count low, high and near-capacity weeks among the most recent records (0 = all)
    Summary {
        #[arg(default_value_t = 0)]
        count: usize,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(path) = &cli.file {
        config.report_path = path.clone();
    }
    if let Some(size) = cli.roster_size {
        config.roster_size = size;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let repo = FileRecordRepository::new(&config.report_path)
        .with_context(|| format!("Failed to prepare {}", config.report_path.display()))?;
    let service = RecordService::new(repo);

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            menu::run(&mut prompter, &service, &config)?;
        }
        Some(Commands::Fetch { count, table }) => {
            let mut out = io::stdout().lock();
            if table {
                let decoded = match service.fetch_decoded(count, None) {
                    Err(StoreError::NotFound(_)) => {
                        writeln!(out, "No records found.")?;
                        return Ok(());
                    }
                    other => other?,
                };
                if decoded.records.is_empty() && decoded.corrupt.is_empty() {
                    writeln!(out, "No records found.")?;
                    return Ok(());
                }
                writeln!(out, "{}", view::records_table(&decoded))?;
                for (line, err) in &decoded.corrupt {
                    writeln!(out, "Warning: unreadable record ({}): {}", err, line)?;
                }
            } else {
                let lines = match service.fetch(count) {
                    Err(StoreError::NotFound(_)) => Vec::new(),
                    other => other?,
                };
                view::print_lines(&mut out, &lines)?;
            }
        }
        Some(Commands::Summary { count }) => {
            let decoded = match service.fetch_decoded(count, None) {
                Err(StoreError::NotFound(_)) => Default::default(),
                other => other?,
            };
            let totals: Vec<u32> = decoded.records.iter().map(|r| r.total_hours()).collect();
            let mut out = io::stdout().lock();
            view::print_batch_summary(&mut out, "Employee Report Summary", &report::summarize(&totals))?;
            if !decoded.corrupt.is_empty() {
                writeln!(out, "Skipped {} unreadable records.", decoded.corrupt.len())?;
            }
        }
    }
    Ok(())
}
