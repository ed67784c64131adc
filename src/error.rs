use thiserror::Error;

/// Errors from VIES lookups.
///
/// These only reach callers when the validator is configured to surface
/// errors ([`ValidatorConfig::surface_errors`](crate::ValidatorConfig));
/// by default they are absorbed into a `false` / `service_available: false`
/// result after being logged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// Transport-level failure: DNS, TLS, connect, or timeout.
    #[error("VIES request failed: {0}")]
    Network(String),

    /// The VIES endpoint answered with a non-success HTTP status.
    #[error("VIES service returned HTTP {status}")]
    Http {
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("unexpected VIES response: {0}")]
    Parse(String),
}

impl ViesError {
    /// The HTTP status carried by this error, when the service answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let e = ViesError::Network("connection timed out".into());
        assert!(e.to_string().contains("connection timed out"));

        let e = ViesError::Http { status: 503 };
        assert!(e.to_string().contains("503"));

        let e = ViesError::Parse("expected value at line 1".into());
        assert!(e.to_string().contains("expected value"));
    }

    #[test]
    fn http_status_accessor() {
        assert_eq!(ViesError::Http { status: 500 }.http_status(), Some(500));
        assert_eq!(ViesError::Network("down".into()).http_status(), None);
        assert_eq!(ViesError::Parse("bad json".into()).http_status(), None);
    }
}
