//! Configuration management for Mind Oasis.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring
//! the OpenRouter credential, the chat model, the listen port, and the
//! model-call timeout.
//!
//! # Environment Variables
//!
//! - `OPENROUTER_API_KEY`: API key for the model provider. Absent, empty,
//!   or left at the .env template placeholder means the service runs in
//!   fallback-only mode.
//! - `OPENROUTER_MODEL`: Chat model to request (defaults to a free tier model)
//! - `OPENROUTER_BASE_URL`: Provider base URL (defaults to https://openrouter.ai)
//! - `PORT`: HTTP listen port (defaults to 3000)
//! - `OASIS_MODEL_TIMEOUT_SECS`: Bound on the model round trip (defaults to 30)

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_MODEL_TIMEOUT_SECS, DEFAULT_PORT, ENV_VAR_API_KEY,
    ENV_VAR_BASE_URL, ENV_VAR_MODEL, ENV_VAR_MODEL_TIMEOUT, ENV_VAR_PORT, PLACEHOLDER_API_KEY,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::time::Duration;

/// Configuration for the Mind Oasis service.
///
/// This struct holds the settings needed at startup: the optional model
/// credential, the model and provider endpoint to use, the listen port,
/// and the timeout bounding each model round trip.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use mind_oasis::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     api_key: None,
///     model: "test-model".to_string(),
///     base_url: "http://127.0.0.1:8080".to_string(),
///     port: 3000,
///     model_timeout: Duration::from_secs(5),
/// };
/// assert!(!config.model_enabled());
/// ```
pub struct Config {
    /// OpenRouter API key. `None` means the live model path is unreachable
    /// and every reflection is served from the fallback tables.
    pub api_key: Option<String>,

    /// Chat model requested from the provider.
    pub model: String,

    /// Provider base URL, without a trailing slash.
    pub base_url: String,

    /// HTTP listen port.
    pub port: u16,

    /// Bound on each model round trip.
    pub model_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED_PLACEHOLDER))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("port", &self.port)
            .field("model_timeout", &self.model_timeout)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `OASIS_MODEL_TIMEOUT_SECS`
    /// is set but not parseable, or if the timeout is zero.
    pub fn load() -> AppResult<Self> {
        let api_key = resolve_api_key(env::var(ENV_VAR_API_KEY).ok());
        let model = env::var(ENV_VAR_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var(ENV_VAR_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();
        let port = parse_port(env::var(ENV_VAR_PORT).ok())?;
        let model_timeout = parse_timeout(env::var(ENV_VAR_MODEL_TIMEOUT).ok())?;

        Ok(Config {
            api_key,
            model,
            base_url,
            port,
            model_timeout,
        })
    }

    /// True when a usable credential is present and the live model path is
    /// reachable.
    pub fn model_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validates settings that `load` cannot reject on its own.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the provider base URL is not an
    /// http(s) URL.
    pub fn validate(&self) -> AppResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Model base URL must start with http:// or https://: '{}'",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Filters a raw credential down to a usable one.
///
/// Empty values and the well-known .env template placeholder count as
/// unset.
fn resolve_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY)
}

fn parse_port(raw: Option<String>) -> AppResult<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.trim().parse().map_err(|_| {
            AppError::Config(format!("Invalid {ENV_VAR_PORT} value: '{value}'"))
        }),
    }
}

fn parse_timeout(raw: Option<String>) -> AppResult<Duration> {
    let secs: u64 = match raw {
        None => DEFAULT_MODEL_TIMEOUT_SECS,
        Some(value) => value.trim().parse().map_err(|_| {
            AppError::Config(format!("Invalid {ENV_VAR_MODEL_TIMEOUT} value: '{value}'"))
        })?,
    };

    if secs == 0 {
        return Err(AppError::Config(format!(
            "{ENV_VAR_MODEL_TIMEOUT} must be at least 1 second"
        )));
    }

    Ok(Duration::from_secs(secs))
}
