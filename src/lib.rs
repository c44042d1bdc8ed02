//! `xrates` library crate.
//!
//! The binary (`xrates`) is a thin wrapper around this library so that:
//!
//! - the retrieval pipeline is testable without spawning processes
//! - the rate provider can be swapped for an in-memory one in tests

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
