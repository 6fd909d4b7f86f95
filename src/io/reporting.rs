// src/io/reporting.rs

use crate::simulation::engine::{DailyRecord, Simulation};
use std::io::{self, Write};
use std::path::Path;

/// Writes the tab-separated text report: one `name value description` line
/// per parameter, a blank line, then the daily cash/stock table.
pub fn print_report<W: Write>(out: &mut W, sim: &Simulation) -> io::Result<()> {
    let p = &sim.params;

    writeln!(out, "cash\t{:.2}\tinitial investment", p.cash)?;
    writeln!(out, "sales\t{:.2}\tweekly sales", p.weekly_sales_rate)?;
    writeln!(
        out,
        "storage\t{:.2}\tstorage cost per unit per month",
        p.unit_monthly_storage
    )?;
    writeln!(out, "cost\t{:.2}\tprice of each unit", p.unit_cost)?;
    writeln!(out, "margin\t{:.2}\tmargin for each unit", p.unit_benefit)?;
    writeln!(out, "batch\t{}\tunits per shipment", p.batch_size)?;
    writeln!(out, "delay\t{}\tdays to ship", p.shipment_delay_days)?;
    writeln!(out, "stock\t{}\tinitial stock", p.initial_stock)?;
    writeln!(out, "days\t{}\tsimulation duration", p.duration_days)?;
    writeln!(out)?;

    writeln!(out, "day\tcash\tstock")?;
    for record in &sim.history {
        writeln!(
            out,
            "{}\t{:.2}\t{}",
            record.date.format("%m-%d-%Y"),
            record.cash,
            record.stock as i64
        )?;
    }
    Ok(())
}

/// Writes the daily records to a CSV file.
///
/// # Arguments
/// * `path` - Destination file (e.g. "trajectory.csv").
/// * `records` - The daily snapshots from a finished simulation.
pub fn write_csv(path: &Path, records: &[DailyRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}
