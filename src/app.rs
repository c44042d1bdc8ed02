//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the rate provider client
//! - runs the retrieval pipeline
//! - prints the run plan and summary

use chrono::Local;
use clap::Parser;
use log::info;

use crate::cli::Cli;
use crate::data::FrankfurterClient;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `xrates` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    println!("{}\n", crate::report::PROGRAM_TITLE);

    let client = FrankfurterClient::from_env()?;
    let prepared = pipeline::prepare_run(&cli.input, &client)?;

    println!(
        "{}",
        crate::report::format_run_plan(&prepared.pair, prepared.date_count())
    );
    println!("Retrieval has started. This might take a while...\n");

    let summary = prepared.execute(&client, Local::now().naive_local())?;
    info!("Finished {} in {:?}", summary.pair, summary.elapsed);

    print!("{}", crate::report::format_run_summary(&summary));
    Ok(())
}
