//! Shared domain types.
//!
//! Everything here lives for a single run: the currency pair from the input
//! header, the raw date lines, the per-date outcome and the final summary.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::AppError;

/// Length of a single ISO 4217 currency code.
pub const CURRENCY_CODE_LEN: usize = 3;

/// Currency the provider is asked about when listing the codes it knows.
pub const REFERENCE_CURRENCY: &str = "USD";

/// Rate column value written for dates without a usable rate.
pub const NA_MARKER: &str = "na";

/// Field separator of the output and errors files.
pub const FIELD_SEPARATOR: char = ',';

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exchange/base currency codes taken from the input header.
///
/// `USDEUR` means one unit of USD (exchange) priced in EUR (base).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    pub exchange: String,
    pub base: String,
}

impl CurrencyPair {
    /// Split a header line into its two codes.
    ///
    /// Only the length is checked here; whether the codes are known is up to
    /// the rate provider (see [`CurrencyPair::ensure_supported`]).
    pub fn parse(header: &str) -> Result<Self, AppError> {
        if header.chars().count() != CURRENCY_CODE_LEN * 2 {
            return Err(AppError::InvalidCurrencyPair {
                pair: header.to_string(),
            });
        }

        let exchange: String = header.chars().take(CURRENCY_CODE_LEN).collect();
        let base: String = header.chars().skip(CURRENCY_CODE_LEN).collect();
        Ok(Self { exchange, base })
    }

    /// Fail on the first code (exchange, then base) missing from `supported`.
    pub fn ensure_supported(&self, supported: &HashSet<String>) -> Result<(), AppError> {
        for code in [&self.exchange, &self.base] {
            if !supported.contains(code.as_str()) {
                return Err(AppError::UnsupportedCurrency { code: code.clone() });
            }
        }
        Ok(())
    }

    /// The header line as written to both output files.
    pub fn header(&self) -> String {
        format!("{}{}", self.exchange, self.base)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.exchange, self.base)
    }
}

/// One date line of the input file, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntry {
    pub raw: String,
}

impl DateEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Parse as `YYYY-MM-DD`, rejecting anything that does not format back
    /// to the exact same text (e.g. `2019-1-5`).
    pub fn parse(&self) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(&self.raw, DATE_FORMAT).ok()?;
        if date.format(DATE_FORMAT).to_string() == self.raw {
            Some(date)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.parse().is_some()
    }
}

/// `true` if `text` is a canonical ISO 8601 calendar date.
pub fn validate_date(text: &str) -> bool {
    DateEntry::new(text).is_valid()
}

/// The instant a rate is requested for: noon on the given day.
///
/// Asking for midday keeps the lookup away from day boundaries whatever
/// timezone the upstream service works in.
pub fn lookup_instant(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(12, 0, 0, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::default()))
}

/// Outcome of a single date.
///
/// A malformed date and a rate the provider could not deliver both end up as
/// `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateResult {
    ValidRate(f64),
    Unavailable,
}

impl RateResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, RateResult::ValidRate(_))
    }
}

impl fmt::Display for RateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral rates keep a decimal place: `1.0`, not `1`.
            RateResult::ValidRate(rate) if rate.fract() == 0.0 => write!(f, "{rate:.1}"),
            RateResult::ValidRate(rate) => write!(f, "{rate}"),
            RateResult::Unavailable => f.write_str(NA_MARKER),
        }
    }
}

/// What a finished run reports.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub pair: CurrencyPair,
    pub input_dir: PathBuf,
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub output_file: PathBuf,
    /// `None` when every date produced a rate and the errors file was removed.
    pub errors_file: Option<PathBuf>,
    pub date_count: usize,
    pub valid_dates: usize,
    pub invalid_dates: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn elapsed_secs_rounded(&self) -> u64 {
        self.elapsed.as_secs_f64().round() as u64
    }
}
