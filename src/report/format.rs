//! Formatted terminal output.
//!
//! We keep formatting code in one place so the pipeline stays free of
//! presentation details and output changes stay localized.

use crate::domain::{CurrencyPair, RunSummary};

pub const PROGRAM_TITLE: &str = "x-rates retrieval program";

/// Guidance printed after a malformed or unsupported currency pair.
pub fn currency_pair_help() -> String {
    let mut out = String::new();
    out.push_str("The currency codes must have 3 capital letters as per ISO 4217\n");
    out.push_str("for example: EUR\n\n");
    out.push_str("The header line of the input file must be the currency pair as:\n");
    out.push_str("<Exchange currency code><Base currency code>\n\n");
    out.push_str("for example: USDEUR\n");
    out
}

/// Pair and workload, shown once validation has passed.
pub fn format_run_plan(pair: &CurrencyPair, date_count: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Exchange currency: {}\n", pair.exchange));
    out.push_str(&format!("Base currency    : {}\n", pair.base));
    out.push_str(&format!("Dates count      : {date_count}\n"));
    out
}

/// End-of-run report: timing, counts and where the files went.
pub fn format_run_summary(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Retrieval has completed in: {} sec\n\n",
        summary.elapsed_secs_rounded()
    ));

    out.push_str(&format!("Valid dates  : {}\n", summary.valid_dates));
    out.push_str(&format!("Invalid dates: {}\n\n", summary.invalid_dates));

    out.push_str(&format!("Input directory: {}\n", summary.input_dir.display()));
    out.push_str(&format!("Input filename: {}\n", summary.input_file.display()));
    out.push_str(&format!("Output directory: {}\n", summary.output_dir.display()));
    out.push_str(&format!("Output file: {}\n", file_name(&summary.output_file)));

    if let Some(errors) = &summary.errors_file {
        out.push_str(&format!("Errors file: {}\n", file_name(errors)));
    }

    out
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
