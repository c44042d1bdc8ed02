//! The retrieval pipeline.
//!
//! A run has two phases:
//!
//! 1. [`prepare_run`]: every fatal check (input file, header, supported codes).
//!    Nothing is written to disk in this phase.
//! 2. [`PreparedRun::execute`]: one lookup per date, in file order, with the
//!    results written to the output and errors files.
//!
//! Per-date problems never abort a run; they become `na` rows.

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDateTime;
use log::{debug, info, warn};

use crate::data::RateProvider;
use crate::domain::{
    CurrencyPair, DateEntry, REFERENCE_CURRENCY, RateResult, RunSummary, lookup_instant,
};
use crate::error::AppError;
use crate::io::{InputFile, OutputFiles, OutputPaths, read_input};

/// A validated input, ready to be fetched.
#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub input: InputFile,
    pub pair: CurrencyPair,
}

/// Run every precondition check on `input_path`.
pub fn prepare_run<P>(input_path: &Path, provider: &P) -> Result<PreparedRun, AppError>
where
    P: RateProvider + ?Sized,
{
    let input = read_input(input_path)?;
    debug!("Input directory: {}", input.dir.display());
    debug!("Input filename: {}", input.path.display());

    let pair = CurrencyPair::parse(&input.header)?;

    let supported = provider.supported_codes(REFERENCE_CURRENCY)?;
    debug!("Provider supports {} currency codes", supported.len());
    pair.ensure_supported(&supported)?;

    Ok(PreparedRun { input, pair })
}

impl PreparedRun {
    pub fn date_count(&self) -> usize {
        self.input.dates.len()
    }

    /// Fetch every date and write the result files, named after `now`.
    pub fn execute<P>(self, provider: &P, now: NaiveDateTime) -> Result<RunSummary, AppError>
    where
        P: RateProvider + ?Sized,
    {
        let start = Instant::now();
        let PreparedRun { input, pair } = self;

        let paths = OutputPaths::new(&input.dir, now);
        let output_dir = paths.dir.clone();
        let mut files = OutputFiles::create(paths, &pair.header())?;

        let mut valid_dates = 0usize;
        let mut invalid_dates = 0usize;

        for entry in &input.dates {
            let result = lookup_rate(provider, &pair, entry);
            files.write_result(&entry.raw, result)?;
            if result.is_valid() {
                valid_dates += 1;
            } else {
                invalid_dates += 1;
            }
        }

        let written = files.finish(invalid_dates > 0)?;
        info!("Retrieved {valid_dates} rate(s), {invalid_dates} date(s) without a rate");

        Ok(RunSummary {
            pair,
            input_dir: input.dir,
            input_file: input.path,
            output_dir,
            output_file: written.output,
            errors_file: written.errors,
            date_count: input.dates.len(),
            valid_dates,
            invalid_dates,
            elapsed: start.elapsed(),
        })
    }
}

/// Resolve one date line to a rate.
///
/// A malformed date skips the provider entirely; a provider failure of any
/// kind is logged and reported as `Unavailable` like a missing rate.
pub fn lookup_rate<P>(provider: &P, pair: &CurrencyPair, entry: &DateEntry) -> RateResult
where
    P: RateProvider + ?Sized,
{
    let Some(date) = entry.parse() else {
        warn!("{:?}: not a YYYY-MM-DD date", entry.raw);
        return RateResult::Unavailable;
    };

    match provider.rate(lookup_instant(date), &pair.exchange, &pair.base) {
        Ok(Some(rate)) if rate.is_finite() => RateResult::ValidRate(rate),
        Ok(_) => {
            warn!("{}: no {pair} rate available", entry.raw);
            RateResult::Unavailable
        }
        Err(e) => {
            warn!("{}: {pair} lookup failed: {e}", entry.raw);
            RateResult::Unavailable
        }
    }
}

/// Both phases in one call, with the result files named after `now`.
pub fn retrieve_rates_at<P>(
    input_path: &Path,
    provider: &P,
    now: NaiveDateTime,
) -> Result<RunSummary, AppError>
where
    P: RateProvider + ?Sized,
{
    prepare_run(input_path, provider)?.execute(provider, now)
}
