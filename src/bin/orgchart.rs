//! Orgchart CLI Binary
//!
//! Command-line interface for browsing and filtering an org-chart dataset.

use anyhow::Context;
use clap::Parser;
use orgchart::logging::init_logging;
use orgchart::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let context = CliContext::from_cli(cli).context("initializing orgchart")?;
    init_logging(Some(context.logging_config())).context("initializing logging")?;

    let output = context.execute(&cli.command)?;
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}
