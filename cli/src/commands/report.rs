use anyhow::{bail, Result};
use efficiency_gap::{load_results, run_report, Config, ReportContext};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ReportArgs) -> Result<()> {
    let config = Config::load(&args.config)?;

    tracing::info!("Reporting Efficiency Gap Scores");
    tracing::info!("Election results: {}", config.filename.display());
    tracing::info!("District boundaries: {}", config.geojson.display());
    tracing::info!("Infographics being added to `{}`", config.output_directory.display());

    let results = load_results(&config)?;
    let context = ReportContext::from_config(&config);

    tracing::debug!("[report] loaded {} delegations", results.delegations().len());
    let outcome = run_report(&results, &context);

    tracing::info!("[report] wrote {} infographics, {} failed", outcome.written.len(), outcome.failed.len());
    if !outcome.is_success() {
        bail!("[report] failed delegations: {}", outcome.failed.join(", "));
    }
    Ok(())
}
