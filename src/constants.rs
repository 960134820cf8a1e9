//! Constants used throughout the application.
//!
//! This module contains all constants used in Mind Oasis, organized into
//! logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default tracing filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,mind_oasis=debug";

// Configuration Keys & Environment Variables
/// Environment variable holding the OpenRouter API key.
pub const ENV_VAR_API_KEY: &str = "OPENROUTER_API_KEY";
/// Environment variable selecting the chat model.
pub const ENV_VAR_MODEL: &str = "OPENROUTER_MODEL";
/// Environment variable overriding the OpenRouter base URL.
pub const ENV_VAR_BASE_URL: &str = "OPENROUTER_BASE_URL";
/// Environment variable for the HTTP listen port.
pub const ENV_VAR_PORT: &str = "PORT";
/// Environment variable bounding the model round trip, in seconds.
pub const ENV_VAR_MODEL_TIMEOUT: &str = "OASIS_MODEL_TIMEOUT_SECS";

// Configuration Defaults
/// Default chat model requested from OpenRouter.
pub const DEFAULT_MODEL: &str = "tngtech/deepseek-r1t2-chimera:free";
/// Default OpenRouter base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai";
/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default model round-trip timeout, in seconds.
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;
/// API keys left at this value by a copied .env template count as unset.
pub const PLACEHOLDER_API_KEY: &str = "your_openrouter_api_key_here";

// Redaction
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Reflection Pipeline
/// Maximum number of characters of raw model output substituted for the
/// reflection when the output could not be parsed.
pub const RAW_REFLECTION_MAX_CHARS: usize = 200;

// PHQ-2 Classification
/// Highest total score classified as minimal symptoms.
pub const PHQ2_MINIMAL_MAX: i64 = 2;
/// Highest total score classified as mild symptoms.
pub const PHQ2_MILD_MAX: i64 = 4;
/// Total score at or above which professional support is recommended.
pub const PHQ2_NEEDS_HELP_THRESHOLD: i64 = 3;
