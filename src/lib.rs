//! # vatcheck
//!
//! European VAT number validation against the EU [VIES] REST service.
//!
//! Raw input is normalized (uppercased, separators stripped), the issuing
//! country is derived from the prefix or an explicit hint (`GR` maps to
//! VIES's `EL`), and the number is checked with a single `GET` against the
//! member-state endpoint. Results are cached with a configurable TTL so
//! repeated checks of the same number do not hit the service.
//!
//! Correctness of the registration check is entirely delegated to VIES —
//! this crate performs no per-country checksum validation.
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> Result<(), vatcheck::ViesError> {
//! use vatcheck::{ValidatorConfig, VatValidator};
//!
//! let validator = VatValidator::new(ValidatorConfig::default())?;
//!
//! // Boolean check — cached for 24h by default
//! let ok = validator.validate("NL 123456789 B01", None).await?;
//! println!("registered: {ok}");
//!
//! // Full details — always a fresh lookup
//! let details = validator.details("123456789B01", Some("NL")).await?;
//! println!("{} → valid={}", details.normalized_vat.unwrap(), details.valid);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure policy
//!
//! By default every failure is absorbed: malformed input and unreachable
//! service both come back as `valid = false` (with the distinction visible
//! in [`ValidationDetails::service_available`]), and callers never need
//! error handling. Setting [`ValidatorConfig::surface_errors`] makes
//! remote failures propagate as [`ViesError`] instead.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | The `vatcheck` command-line binary |
//!
//! [VIES]: https://ec.europa.eu/taxation_customs/vies/

mod config;
mod error;
mod normalize;
mod validator;
mod vies;

pub use config::{DEFAULT_CACHE_TTL, ValidatorConfig};
pub use error::ViesError;
pub use normalize::{ensure_country_prefix, extract_country, extract_number_part, normalize};
pub use validator::{ValidationDetails, VatValidator};
pub use vies::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ViesCheck, ViesClient};
