//! m3u-tools CLI Binary
//!
//! Command-line interface for printing and exporting playlist trees.

use anyhow::Context;
use clap::Parser;
use m3u_tools::logging::init_logging;
use m3u_tools::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(cli.config.clone()).context("Failed to load configuration")?;
    let logging = cli.logging_config(&context.config().logging);
    init_logging(Some(&logging))?;

    let output = context.execute(&cli.command)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
