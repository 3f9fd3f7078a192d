//! Deploy-time configuration for the console core. The API base URL and the
//! request timeout come from the environment so static deployments can point
//! at a different backend without rebuilding. Configuration values are public;
//! do not store secrets here.

use crate::error::ApiError;
use std::env;
use std::time::Duration;
use url::Url;

/// Default request timeout (milliseconds) applied to every call.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

const BASE_URL_VAR: &str = "MEDISECURE_API_BASE_URL";
const TIMEOUT_VAR: &str = "MEDISECURE_REQUEST_TIMEOUT_MS";

/// Console configuration derived from the deployment environment.
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl ConsoleConfig {
    /// Builds a config from an explicit base URL with the default timeout.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ApiError> {
        let api_base_url = normalize_base_url(&api_base_url.into())?;
        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Loads config from `MEDISECURE_API_BASE_URL` and, optionally,
    /// `MEDISECURE_REQUEST_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = env::var(BASE_URL_VAR)
            .map_err(|_| ApiError::Config(format!("{BASE_URL_VAR} is not set.")))?;
        let mut config = Self::new(base_url)?;

        if let Ok(raw) = env::var(TIMEOUT_VAR) {
            let millis = raw.trim().parse::<u64>().map_err(|_| {
                ApiError::Config(format!("Invalid {TIMEOUT_VAR} value: {raw}"))
            })?;
            config.request_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

/// Trims the base URL, validates its scheme, and drops trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Config("API base URL is not configured.".to_string()));
    }

    let url = Url::parse(trimmed)
        .map_err(|err| ApiError::Config(format!("Invalid API base URL: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ApiError::Config(format!(
                "Unsupported API base URL scheme: {scheme}"
            )));
        }
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
