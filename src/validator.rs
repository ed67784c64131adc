//! Cache-aware VAT validation pipeline.

use moka::sync::Cache;
use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::error::ViesError;
use crate::normalize::{ensure_country_prefix, extract_country, extract_number_part, normalize};
use crate::vies::{ViesCheck, ViesClient};

/// Upper bound on cached results. Entries expire by TTL long before a
/// realistic workload reaches this.
const CACHE_CAPACITY: u64 = 100_000;

/// Full outcome of a validation run.
///
/// `service_available` is `false` both when VIES could not be reached and
/// when no lookup was attempted at all (empty input, unresolvable
/// country); `error` explains which.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDetails {
    /// Whether the VAT number is registered, per VIES.
    pub valid: bool,
    /// The input exactly as given by the caller.
    pub original_vat: String,
    /// Normalized form, including the derived country prefix.
    pub normalized_vat: Option<String>,
    /// The VIES country code the lookup ran against (`EL` for Greece).
    pub country_code: Option<String>,
    /// Normalized value minus the country prefix.
    pub number_part: Option<String>,
    /// Whether the remote service answered.
    pub service_available: bool,
    /// Whether the cache currently holds an answer for this number.
    pub cached: bool,
    /// Explanation when `valid` is `false` for a non-answer reason.
    pub error: Option<String>,
    /// Registered company name, when the member state discloses it.
    pub name: Option<String>,
    /// Registered address, when the member state discloses it.
    pub address: Option<String>,
    /// Date of the VIES request (YYYY-MM-DD).
    pub request_date: Option<String>,
}

impl ValidationDetails {
    fn invalid(original: &str, normalized: Option<String>, error: &str) -> Self {
        Self {
            valid: false,
            original_vat: original.to_string(),
            normalized_vat: normalized,
            country_code: None,
            number_part: None,
            service_available: false,
            cached: false,
            error: Some(error.to_string()),
            name: None,
            address: None,
            request_date: None,
        }
    }
}

/// Validates EU VAT numbers against VIES, with a TTL-bound result cache.
///
/// All methods take `&self`; the validator is `Clone` and safe to share
/// across concurrent tasks. Each lookup is a single attempt bounded by
/// the configured timeout — there is no retry.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), vatcheck::ViesError> {
/// use vatcheck::{ValidatorConfig, VatValidator};
///
/// let validator = VatValidator::new(ValidatorConfig::default())?;
/// if validator.validate("NL 123456789 B01", None).await? {
///     println!("registered");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VatValidator {
    config: ValidatorConfig,
    vies: ViesClient,
    cache: Cache<String, bool>,
}

impl VatValidator {
    /// Build a validator from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ViesError::Network`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ValidatorConfig) -> Result<Self, ViesError> {
        let vies = ViesClient::new(config.base_url.clone(), config.timeout)?;
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(config.cache_ttl)
            .build();
        Ok(Self { config, vies, cache })
    }

    /// Build a validator from [`ValidatorConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Same as [`VatValidator::new`].
    pub fn from_env() -> Result<Self, ViesError> {
        Self::new(ValidatorConfig::from_env())
    }

    /// The configuration this validator was built with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a VAT number, consulting the cache when enabled.
    ///
    /// `country_hint` supplies the issuing country for numbers given
    /// without a prefix. Empty input and input whose country cannot be
    /// derived yield `Ok(false)` without a remote call.
    ///
    /// # Errors
    ///
    /// Only with [`ValidatorConfig::surface_errors`] set: remote failures
    /// propagate as [`ViesError`]. Otherwise they are logged and absorbed
    /// into `Ok(false)`.
    pub async fn validate(
        &self,
        vat_number: &str,
        country_hint: Option<&str>,
    ) -> Result<bool, ViesError> {
        self.validate_inner(vat_number, country_hint, self.config.cache_enabled)
            .await
    }

    /// Validate with caching forced off for this call only.
    ///
    /// The toggle is an explicit per-call flag, so concurrent validations
    /// never observe it and the cache itself is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`VatValidator::validate`].
    pub async fn validate_without_cache(
        &self,
        vat_number: &str,
        country_hint: Option<&str>,
    ) -> Result<bool, ViesError> {
        self.validate_inner(vat_number, country_hint, false).await
    }

    async fn validate_inner(
        &self,
        vat_number: &str,
        country_hint: Option<&str>,
        use_cache: bool,
    ) -> Result<bool, ViesError> {
        if vat_number.trim().is_empty() {
            return Ok(false);
        }

        let candidate = ensure_country_prefix(&normalize(vat_number), country_hint);
        let Some(country) = extract_country(&candidate) else {
            return Ok(false);
        };

        if use_cache {
            let key = cache_key(&country, &candidate);
            if let Some(hit) = self.cache.get(&key) {
                tracing::debug!(vat_number = %candidate, country_code = %country, "cache hit");
                return Ok(hit);
            }
            let valid = self
                .lookup(&candidate, &country)
                .await?
                .is_some_and(|check| check.valid);
            self.cache.insert(key, valid);
            return Ok(valid);
        }

        Ok(self
            .lookup(&candidate, &country)
            .await?
            .is_some_and(|check| check.valid))
    }

    /// Full validation details for a VAT number.
    ///
    /// Runs the same pipeline as [`VatValidator::validate`] but always
    /// performs a fresh VIES lookup; `cached` reports whether the cache
    /// currently holds an answer for this number. The cache is not
    /// written.
    ///
    /// # Errors
    ///
    /// Same as [`VatValidator::validate`].
    pub async fn details(
        &self,
        vat_number: &str,
        country_hint: Option<&str>,
    ) -> Result<ValidationDetails, ViesError> {
        if vat_number.trim().is_empty() {
            return Ok(ValidationDetails::invalid(
                vat_number,
                None,
                "VAT number is empty",
            ));
        }

        let normalized = normalize(vat_number);
        let candidate = ensure_country_prefix(&normalized, country_hint);
        let Some(country) = extract_country(&candidate) else {
            return Ok(ValidationDetails::invalid(
                vat_number,
                Some(normalized),
                "could not determine country code",
            ));
        };

        let number_part = extract_number_part(&candidate, &country);
        let cached =
            self.config.cache_enabled && self.cache.contains_key(&cache_key(&country, &candidate));

        let check = self.lookup(&candidate, &country).await?;
        let service_available = check.is_some();
        let (name, address, request_date) = match &check {
            Some(c) => (c.name.clone(), c.address.clone(), c.request_date.clone()),
            None => (None, None, None),
        };

        Ok(ValidationDetails {
            valid: check.is_some_and(|c| c.valid),
            original_vat: vat_number.to_string(),
            normalized_vat: Some(candidate),
            country_code: Some(country),
            number_part: Some(number_part),
            service_available,
            cached,
            error: if service_available {
                None
            } else {
                Some("VIES service unavailable".to_string())
            },
            name,
            address,
            request_date,
        })
    }

    /// Query VIES for `candidate`. Failures are logged with the VAT
    /// number, country, and status-or-error; they become `Ok(None)`
    /// ("service unavailable") unless errors are surfaced.
    async fn lookup(
        &self,
        candidate: &str,
        country: &str,
    ) -> Result<Option<ViesCheck>, ViesError> {
        let number = extract_number_part(candidate, country);
        match self.vies.check(country, &number).await {
            Ok(check) => Ok(Some(check)),
            Err(err) => {
                tracing::warn!(
                    vat_number = %candidate,
                    country_code = %country,
                    status = err.http_status(),
                    error = %err,
                    "VIES lookup failed"
                );
                if self.config.surface_errors {
                    Err(err)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

fn cache_key(country: &str, candidate: &str) -> String {
    format!("vat_validation:{country}:{candidate}")
}
