//! Random number client
//!
//! Fetches one decimal fraction from random.org as plain text. This is a
//! demonstration of outbound HTTP from the proof runner and has no effect on
//! scoring. Any failure falls back to a locally generated fraction.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

const RANDOM_ORG_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";
const USER_AGENT: &str = concat!("poc-proof/", env!("CARGO_PKG_VERSION"));

/// Random number client errors
#[derive(Debug, Error)]
pub enum RandomError {
    /// Network communication error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Service returned a non-success status
    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    /// Body is not a fraction in [0, 1)
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// HTTP client for the randomness service
pub struct RandomClient {
    http_client: reqwest::Client,
    url: String,
}

impl RandomClient {
    /// Client for random.org
    pub fn new() -> Result<Self, RandomError> {
        Self::with_url(RANDOM_ORG_URL)
    }

    /// Client for an alternate endpoint serving the same plain-text format
    pub fn with_url(url: impl Into<String>) -> Result<Self, RandomError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RandomError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    /// Single request, no retry
    pub async fn try_fetch(&self) -> Result<f64, RandomError> {
        debug!(url = %self.url, "Fetching random number");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RandomError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RandomError::ApiError(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RandomError::NetworkError(e.to_string()))?;

        parse_fraction(&body)
    }

    /// Fetch a fraction, falling back to a local one on any failure
    pub async fn fetch_random_number(&self) -> f64 {
        match self.try_fetch().await {
            Ok(value) => value,
            Err(e) => {
                warn!("Error fetching random number: {}. Using local random.", e);
                local_random()
            }
        }
    }
}

/// Fetch from random.org with local fallback
pub async fn fetch_random_number() -> f64 {
    match RandomClient::new() {
        Ok(client) => client.fetch_random_number().await,
        Err(e) => {
            warn!("Error creating HTTP client: {}. Using local random.", e);
            local_random()
        }
    }
}

/// Parse a plain-text body such as `"0.47\n"`
pub fn parse_fraction(body: &str) -> Result<f64, RandomError> {
    let trimmed = body.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| RandomError::ParseError(format!("not a decimal: {:?}", trimmed)))?;

    if !(0.0..1.0).contains(&value) {
        return Err(RandomError::ParseError(format!(
            "value out of range [0, 1): {}",
            value
        )));
    }

    Ok(value)
}

/// Pseudo-random fraction in [0, 1)
pub fn local_random() -> f64 {
    rand::thread_rng().gen::<f64>()
}
