//! Input/output helpers.
//!
//! - input file checks + line splitting (`input`)
//! - output/errors file naming, writing and cleanup (`output`)

pub mod input;
pub mod output;

pub use input::*;
pub use output::*;
