//! Reporting utilities: banner, run plan, summary and usage guidance.

pub mod format;

pub use format::*;
