//! The rate-lookup seam.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::error::AppError;

/// Source of historical exchange rates.
///
/// One instance is built per run and handed to the pipeline, so tests can
/// swap in an in-memory implementation.
pub trait RateProvider {
    /// Every currency code the provider can quote against `reference`,
    /// including `reference` itself.
    fn supported_codes(&self, reference: &str) -> Result<HashSet<String>, AppError>;

    /// Units of `base` bought by one unit of `exchange` at `at`.
    ///
    /// `Ok(None)` means the provider answered but has no rate for that day.
    fn rate(&self, at: NaiveDateTime, exchange: &str, base: &str) -> Result<Option<f64>, AppError>;
}
