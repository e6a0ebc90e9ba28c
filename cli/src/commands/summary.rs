use anyhow::Result;
use efficiency_gap::{load_results, write_summary, Config};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SummaryArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    let results = load_results(&config)?;
    let rows = results.summaries();

    println!("{:<24} {:>6} {:>8} {:>6} {:>10} {:>6}", "delegation", "seats", "gap", "extra", "imputed", "extra");
    for row in &rows {
        println!(
            "{:<24} {:>6} {:>8.3} {:>6} {:>10.3} {:>6}",
            row.name,
            row.seats,
            row.efficiency_gap,
            row.efficiency_gap_seats,
            row.efficiency_gap_imputation,
            row.efficiency_gap_seats_imputation,
        );
    }

    let skipped = results.delegations().len() - rows.len();
    if skipped > 0 {
        tracing::warn!("[summary] skipped {skipped} delegations that cannot be scored");
    }

    if let Some(path) = &args.csv {
        tracing::info!("[summary] writing table to {}", path.display());
        write_summary(&rows, path)?;
    }
    Ok(())
}
