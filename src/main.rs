mod io;
mod model;
mod simulation;
mod strategy;

use crate::io::{config_file, reporting};
use crate::simulation::config::Parameters;
use crate::simulation::engine;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Resale forecast - daily cash and stock trajectory for a reseller
#[derive(Parser)]
#[command(name = "resale-forecast")]
#[command(about = "Simulates a single-product reseller day by day", long_about = None)]
struct Cli {
    /// Initial investment (Euro)
    #[arg(long)]
    cash: Option<f64>,

    /// Average sales per week (quantity)
    #[arg(long)]
    sales: Option<f64>,

    /// Cost of each unit (Euro)
    #[arg(long)]
    cost: Option<f64>,

    /// Margin for each unit (Euro)
    #[arg(long)]
    margin: Option<f64>,

    /// Storage cost per unit per month (Euro)
    #[arg(long)]
    storage: Option<f64>,

    /// Size of each shipment (quantity)
    #[arg(long)]
    batch: Option<u32>,

    /// Time to ship a batch (days)
    #[arg(long)]
    delay: Option<u32>,

    /// Units on hand at the start
    #[arg(long)]
    stock: Option<u32>,

    /// Simulation duration (days)
    #[arg(long)]
    days: Option<u32>,

    /// First simulated date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Config file path; when set, a missing or broken file is fatal
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective parameters back to the config file
    #[arg(long)]
    write_config: bool,

    /// Export the daily trajectory to a CSV file instead of printing
    #[arg(long)]
    export: Option<PathBuf>,
}

/// Config file first, CLI flags on top, built-in defaults underneath.
fn effective_parameters(cli: &Cli) -> Result<Parameters> {
    let mut params = match &cli.config {
        Some(path) => config_file::load(path)
            .with_context(|| format!("cannot load config file {}", path.display()))?,
        None => config_file::load_or_default(Path::new(config_file::DEFAULT_CONFIG_FILE)),
    };

    if let Some(cash) = cli.cash {
        params.cash = cash;
    }
    if let Some(sales) = cli.sales {
        params.weekly_sales_rate = sales;
    }
    if let Some(cost) = cli.cost {
        params.unit_cost = cost;
    }
    if let Some(margin) = cli.margin {
        params.unit_benefit = margin;
    }
    if let Some(storage) = cli.storage {
        params.unit_monthly_storage = storage;
    }
    if let Some(batch) = cli.batch {
        params.batch_size = batch;
    }
    if let Some(delay) = cli.delay {
        params.shipment_delay_days = delay;
    }
    if let Some(stock) = cli.stock {
        params.initial_stock = stock;
    }
    if let Some(days) = cli.days {
        params.duration_days = days;
    }
    Ok(params)
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let params = effective_parameters(&cli)?;

    // The wall clock is consulted here and nowhere else; the engine only
    // ever sees the resolved epoch.
    let epoch = cli.start_date.unwrap_or_else(|| Local::now().date_naive());

    let sim = engine::run(&params, epoch)?;

    // Run summary. The three series are the same ones a chart front end
    // would consume.
    let dates = sim.dates();
    let peak_stock = sim.stock_series().into_iter().fold(0.0_f64, f64::max);
    let final_cash = sim.cash_series().last().copied().unwrap_or(params.cash);
    info!(
        epoch = %sim.epoch,
        days = dates.len(),
        units_ordered = sim.units_ordered,
        units_arrived = sim.units_arrived,
        peak_stock,
        final_cash,
        "simulation finished"
    );

    match &cli.export {
        Some(path) => {
            reporting::write_csv(path, &sim.history)
                .with_context(|| format!("cannot export CSV to {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            reporting::print_report(&mut stdout.lock(), &sim)?;
        }
    }

    if cli.write_config {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(config_file::DEFAULT_CONFIG_FILE));
        config_file::save(&path, &params)?;
        info!(path = %path.display(), "parameters saved");
    }

    Ok(())
}
