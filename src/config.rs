//! Rate provider settings.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory:
//!
//! - `XRATES_API_URL`: provider root URL (defaults to the public Frankfurter API)
//! - `XRATES_TIMEOUT_SECS`: per-request timeout in whole seconds (optional)

use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_API_URL: &str = "https://api.frankfurter.app";

const ENV_API_URL: &str = "XRATES_API_URL";
const ENV_TIMEOUT_SECS: &str = "XRATES_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root URL without a trailing slash.
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = match lookup(ENV_API_URL) {
            Some(raw) if !raw.trim().is_empty() => parse_api_url(&raw)?,
            _ => DEFAULT_API_URL.to_string(),
        };

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_timeout(&raw)?),
            _ => None,
        };

        Ok(Self { api_url, timeout })
    }
}

fn parse_api_url(raw: &str) -> Result<String, AppError> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "{ENV_API_URL} must be an http(s) URL, got '{raw}'."
        )));
    }
    Ok(url.to_string())
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    let secs = raw.trim().parse::<u64>().map_err(|e| {
        AppError::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds: {e}"))
    })?;
    if secs == 0 {
        return Err(AppError::Config(format!("{ENV_TIMEOUT_SECS} must be > 0.")));
    }
    Ok(Duration::from_secs(secs))
}
