//! Command-line parsing for the rate retriever.

use std::path::PathBuf;

use clap::Parser;

/// Input used when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "../data/input.txt";

/// Fetch historical exchange rates for a list of dates.
///
/// The input file holds a currency pair header (e.g. `USDEUR`) followed by
/// one `YYYY-MM-DD` date per line. Results are written next to the input as
/// `output_<timestamp>.txt`; dates without a rate go to `errors_<timestamp>.txt`.
#[derive(Debug, Parser)]
#[command(name = "xrates", version)]
pub struct Cli {
    /// Input file (currency pair header + dates).
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_to_data_dir() {
        let cli = Cli::parse_from(["xrates"]);
        assert_eq!(cli.input, PathBuf::from("../data/input.txt"));
    }

    #[test]
    fn input_is_positional() {
        let cli = Cli::parse_from(["xrates", "dates.txt"]);
        assert_eq!(cli.input, PathBuf::from("dates.txt"));
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["xrates", "a.txt", "b.txt"]).is_err());
    }
}
