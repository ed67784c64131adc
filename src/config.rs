//! Validator configuration.

use std::time::Duration;

use crate::vies::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Default time-to-live for cached validation results (24 hours).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(86_400);

/// Tunables for [`VatValidator`](crate::VatValidator).
///
/// `Default` gives the production VIES endpoint, a 10 second timeout,
/// caching enabled with a 24 hour TTL, and remote failures absorbed into
/// `false` results rather than surfaced as errors.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Base URL of the VIES member-state REST endpoint.
    pub base_url: String,
    /// Per-request timeout for VIES lookups.
    pub timeout: Duration,
    /// Whether validation results are cached at all.
    pub cache_enabled: bool,
    /// How long a cached answer stays fresh.
    pub cache_ttl: Duration,
    /// Surface remote failures as errors instead of absorbing them into
    /// `false` results.
    pub surface_errors: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_enabled: true,
            cache_ttl: DEFAULT_CACHE_TTL,
            surface_errors: false,
        }
    }
}

impl ValidatorConfig {
    /// Defaults overridden from the environment.
    ///
    /// Recognized variables: `VIES_URL`, `VAT_VALIDATION_TIMEOUT`
    /// (seconds), `VAT_VALIDATION_CACHE_ENABLED`,
    /// `VAT_VALIDATION_CACHE_TTL` (seconds), and
    /// `VAT_VALIDATION_SURFACE_ERRORS`. Unparseable values fall back to
    /// the default.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = std::env::var("VIES_URL") {
            cfg.base_url = url;
        }
        if let Some(secs) = env_u64("VAT_VALIDATION_TIMEOUT") {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_u64("VAT_VALIDATION_CACHE_TTL") {
            cfg.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(enabled) = env_bool("VAT_VALIDATION_CACHE_ENABLED") {
            cfg.cache_enabled = enabled;
        }
        if let Some(surface) = env_bool("VAT_VALIDATION_SURFACE_ERRORS") {
            cfg.surface_errors = surface;
        }
        cfg
    }
}

fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.parse().ok()
}

fn env_bool(key: &str) -> Option<bool> {
    match std::env::var(key).ok()?.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
