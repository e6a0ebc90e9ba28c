mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{report, summary};

/// Install the log subscriber. `RUST_LOG` wins over the verbosity flag when set.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Report(args) => report::run(&cli, args),
        Commands::Summary(args) => summary::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
