//! Domain types used throughout the run.
//!
//! This module defines:
//!
//! - the currency pair parsed from the input header (`CurrencyPair`)
//! - raw date lines and their validation (`DateEntry`, `validate_date`)
//! - per-date outcomes (`RateResult`) and the run summary (`RunSummary`)

pub mod types;

pub use types::*;
