//! Application error type.
//!
//! Every fatal condition of a run maps to one `AppError` variant, and every
//! variant maps to a process exit code. Library code only returns these; the
//! translation into `std::process::ExitCode` happens in `main`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input file is empty: {}", .path.display())]
    InputEmpty { path: PathBuf },

    #[error("Invalid currency pair: {pair}")]
    InvalidCurrencyPair { pair: String },

    #[error("Currency code is not supported: {code}")]
    UnsupportedCurrency { code: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Rate provider error: {0}")]
    Provider(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InputNotFound { .. } => 1,
            AppError::InputEmpty { .. } => 2,
            AppError::InvalidCurrencyPair { .. } => 3,
            AppError::UnsupportedCurrency { .. } => 4,
            AppError::Io { .. } => 5,
            AppError::Provider(_) => 6,
            AppError::Config(_) => 7,
        }
    }

    /// Whether the currency-pair format guidance should follow the message.
    pub fn wants_pair_help(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCurrencyPair { .. } | AppError::UnsupportedCurrency { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_failures_use_fixed_exit_codes() {
        let path = PathBuf::from("input.txt");
        assert_eq!(AppError::InputNotFound { path: path.clone() }.exit_code(), 1);
        assert_eq!(AppError::InputEmpty { path }.exit_code(), 2);
        assert_eq!(
            AppError::InvalidCurrencyPair { pair: "USD".to_string() }.exit_code(),
            3
        );
        assert_eq!(
            AppError::UnsupportedCurrency { code: "XXX".to_string() }.exit_code(),
            4
        );
    }

    #[test]
    fn only_pair_errors_want_guidance() {
        assert!(AppError::InvalidCurrencyPair { pair: "US".to_string() }.wants_pair_help());
        assert!(AppError::UnsupportedCurrency { code: "ABC".to_string() }.wants_pair_help());
        assert!(!AppError::Provider("down".to_string()).wants_pair_help());
        assert!(!AppError::InputEmpty { path: PathBuf::from("x") }.wants_pair_help());
    }

    #[test]
    fn io_error_keeps_context_in_message() {
        let err = AppError::io(
            "Failed to create output file",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), 5);
        assert_eq!(err.to_string(), "Failed to create output file: denied");
    }
}
