use std::path::PathBuf;

/// Efficiency gap reporting CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "efficiency-gap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render one infographic per delegation into the configured output directory
    Report(ReportArgs),

    /// Print the efficiency gap of every delegation without rendering
    Summary(SummaryArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// YAML config naming the results, boundaries, fonts and output directory
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// YAML config naming the results and boundaries
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Also write the table as CSV
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub csv: Option<PathBuf>,
}
