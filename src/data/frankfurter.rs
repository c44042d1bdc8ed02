//! Frankfurter API integration (ECB reference rates).

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Settings;
use crate::data::provider::RateProvider;
use crate::error::AppError;

pub struct FrankfurterClient {
    client: Client,
    api_url: String,
}

impl FrankfurterClient {
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(&Settings::from_env()?)
    }

    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
        })
    }

    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Option<String>, AppError> {
        let url = format!("{}/{}", self.api_url, path);
        debug!("GET {url} {query:?}");

        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| AppError::Provider(format!("request to {url} failed: {e}")))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(AppError::Provider(format!(
                "request to {url} failed with status {}.",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::Provider(format!("failed to read response from {url}: {e}")))?;
        Ok(Some(body))
    }
}

impl RateProvider for FrankfurterClient {
    fn supported_codes(&self, reference: &str) -> Result<HashSet<String>, AppError> {
        let body = self
            .get("latest", &[("from", reference)])?
            .ok_or_else(|| AppError::Provider(format!("no latest rates for {reference}.")))?;
        parse_supported_codes(&body)
    }

    fn rate(&self, at: NaiveDateTime, exchange: &str, base: &str) -> Result<Option<f64>, AppError> {
        if exchange == base {
            return Ok(Some(1.0));
        }

        let day = at.date().format("%Y-%m-%d").to_string();
        match self.get(&day, &[("from", exchange), ("to", base)])? {
            Some(body) => parse_rate(&body, base),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

fn parse_body(body: &str) -> Result<RatesResponse, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::Provider(format!("failed to parse response: {e}")))
}

/// Quoted codes plus the base currency itself (which the API leaves out of
/// `rates`).
fn parse_supported_codes(body: &str) -> Result<HashSet<String>, AppError> {
    let parsed = parse_body(body)?;
    let mut codes: HashSet<String> = parsed.rates.into_keys().collect();
    if let Some(base) = parsed.base {
        codes.insert(base);
    }
    if codes.is_empty() {
        return Err(AppError::Provider("provider returned no currency codes.".to_string()));
    }
    Ok(codes)
}

fn parse_rate(body: &str, base: &str) -> Result<Option<f64>, AppError> {
    let parsed = parse_body(body)?;
    Ok(parsed
        .rates
        .get(base)
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0))
}
