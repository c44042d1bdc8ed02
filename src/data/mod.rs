//! Exchange-rate data sources.

pub mod frankfurter;
pub mod provider;

pub use frankfurter::FrankfurterClient;
pub use provider::RateProvider;
