mod config;
mod engine;
mod export;
mod report;
mod types;

use crate::export::Format;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{io, path::PathBuf};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML plot description (the built-in default plot is used if omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the total planted hectares.
    #[arg(long)]
    hectares: Option<f64>,

    /// Override the number of simulated years.
    #[arg(long)]
    years: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Project,

    Chart,

    Export {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        #[arg(long)]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut cfg = match &args.config {
        Some(file) => config::from_file(file).context("failed to load config")?,
        None => config::default_plot(),
    };
    if let Some(hectares) = args.hectares {
        cfg.total_hectares = hectares;
    }
    if let Some(years) = args.years {
        cfg.years_to_simulate = years;
    }
    log::debug!("{cfg:#?}");

    config::check_inputs(&cfg).context("failed to check inputs")?;

    let res = engine::project(&cfg).context("failed to project demand")?;
    log::info!(
        "projected {} years of {} crops, peak demand {} L",
        res.records.len(),
        cfg.crops.len(),
        res.peak_demand
    );

    let mut stdout = io::stdout().lock();
    match args.command {
        Command::Project => {
            report::write_table(&res, &mut stdout).context("failed to write table")?;
            report::write_summary(&res, &mut stdout).context("failed to write summary")?;
        }
        Command::Chart => report::write_chart(&res, &mut stdout).context("failed to write chart")?,
        Command::Export { format, output } => {
            export::save_result(&res, format, &output).context("failed to save result")?;
            log::info!("saved {output:?}");
        }
    }

    Ok(())
}
