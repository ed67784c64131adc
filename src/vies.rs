//! EU VIES REST API client.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ViesError;

/// Base URL of the VIES member-state REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/ms";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Answer from a VIES member-state lookup.
#[derive(Debug, Clone)]
pub struct ViesCheck {
    /// Whether the VAT number is currently registered.
    pub valid: bool,
    /// Date of the request (YYYY-MM-DD), if reported.
    pub request_date: Option<String>,
    /// Registered company name (if disclosed by the member state).
    pub name: Option<String>,
    /// Registered address (if disclosed by the member state).
    pub address: Option<String>,
}

/// VIES REST response body. Fields beyond `isValid` are best-effort —
/// several member states withhold them or return `"---"`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckVatResponse {
    is_valid: Option<bool>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
}

/// Client for `GET {base_url}/{country}/vat/{number}`.
///
/// Cheap to clone — the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ViesClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViesClient {
    /// Build a client against `base_url` with a bounded per-request timeout.
    ///
    /// A trailing slash on `base_url` is tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`ViesError::Network`] if the underlying HTTP client cannot
    /// be constructed (e.g. no TLS backend available).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ViesError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ViesError::Network(e.to_string()))?;

        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Look up a VAT number with the issuing member state.
    ///
    /// `country` is the two-letter VIES code (`EL` for Greece), `number`
    /// the VAT number without its country prefix. A missing `isValid`
    /// field in an otherwise well-formed response counts as not valid.
    ///
    /// # Errors
    ///
    /// [`ViesError::Network`] on transport failure, [`ViesError::Http`]
    /// on a non-2xx answer, [`ViesError::Parse`] on a malformed body.
    pub async fn check(&self, country: &str, number: &str) -> Result<ViesCheck, ViesError> {
        let url = format!("{}/{}/vat/{}", self.base_url, country, number);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ViesError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ViesError::Http {
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ViesError::Network(e.to_string()))?;

        let parsed: CheckVatResponse =
            serde_json::from_str(&body).map_err(|e| ViesError::Parse(e.to_string()))?;

        Ok(ViesCheck {
            valid: parsed.is_valid.unwrap_or(false),
            request_date: parsed.request_date,
            name: parsed.name.filter(|n| n != "---" && !n.is_empty()),
            address: parsed.address.filter(|a| a != "---" && !a.is_empty()),
        })
    }

    /// The base URL this client queries (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_https() {
        assert!(DEFAULT_BASE_URL.starts_with("https://"));
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn response_deserialization() {
        let json = r#"{"isValid":true,"requestDate":"2026-03-02","name":"ACME BV","address":"KEIZERSGRACHT 1\n1015 AMSTERDAM"}"#;
        let resp: CheckVatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.is_valid, Some(true));
        assert_eq!(resp.name.as_deref(), Some("ACME BV"));
    }

    #[test]
    fn missing_is_valid_tolerated() {
        let resp: CheckVatResponse = serde_json::from_str(r#"{"requestDate":"2026-03-02"}"#).unwrap();
        assert_eq!(resp.is_valid, None);
    }

    #[test]
    fn trailing_slash_trimmed() {
        let client = ViesClient::new("http://localhost:9999/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }
}
