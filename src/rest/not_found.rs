//! Not-found detection.
//!
//! CoinJar does not use HTTP status codes to report a missing resource.
//! Depending on the endpoint it either answers with a bare `null` body or
//! with a 200 whose payload embeds `"status":"404"`. Every lookup funnels
//! through [`classify_not_found`] so those rules live in one place.

use tracing::debug;

use crate::error::{CoinJarError, Resource};

/// Marker embedded in transaction lookups for unknown ids.
///
/// Matching is a plain substring search, so any payload carrying this text
/// in an unrelated field is also reported as not found.
pub const STATUS_404_MARKER: &str = r#""status":"404""#;

/// How a resource's lookup endpoint signals a missing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundRule {
    /// The endpoint has no not-found signal.
    Never,
    /// The body is exactly `null`.
    NullBody,
    /// The body contains [`STATUS_404_MARKER`].
    StatusMarker,
}

impl Resource {
    /// The not-found rule used by this resource's single-record endpoint.
    pub fn not_found_rule(self) -> NotFoundRule {
        match self {
            Resource::BitcoinAddress | Resource::Contact | Resource::Payment => {
                NotFoundRule::NullBody
            }
            Resource::Transaction => NotFoundRule::StatusMarker,
            Resource::Account | Resource::FairRate => NotFoundRule::Never,
        }
    }
}

/// Return [`CoinJarError::NotFound`] if `body` signals a missing `resource`.
///
/// Only the transaction rule keeps the body in the error, since that payload
/// usually carries the service's own error description.
pub fn classify_not_found(resource: Resource, body: &[u8]) -> Result<(), CoinJarError> {
    let missing_body = match resource.not_found_rule() {
        NotFoundRule::Never => return Ok(()),
        NotFoundRule::NullBody => {
            if body != b"null" {
                return Ok(());
            }
            None
        }
        NotFoundRule::StatusMarker => {
            let text = String::from_utf8_lossy(body);
            if !text.contains(STATUS_404_MARKER) {
                return Ok(());
            }
            Some(text.into_owned())
        }
    };

    debug!(%resource, "CoinJar reported resource not found");
    Err(CoinJarError::NotFound {
        resource,
        body: missing_body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_body_is_not_found() {
        for resource in [Resource::BitcoinAddress, Resource::Contact, Resource::Payment] {
            let err = classify_not_found(resource, b"null").unwrap_err();
            assert!(matches!(
                err,
                CoinJarError::NotFound { resource: r, body: None } if r == resource
            ));
        }
    }

    #[test]
    fn test_null_must_be_exact() {
        assert!(classify_not_found(Resource::Contact, b" null\n").is_ok());
        assert!(classify_not_found(Resource::Contact, br#"{"contact":null}"#).is_ok());
    }

    #[test]
    fn test_transaction_ignores_null_body() {
        assert!(classify_not_found(Resource::Transaction, b"null").is_ok());
    }

    #[test]
    fn test_status_marker_anywhere_in_body() {
        let body = br#"{"transaction":{"uuid":"abc"},"status":"404","error":"Not found"}"#;
        let err = classify_not_found(Resource::Transaction, body).unwrap_err();
        match err {
            CoinJarError::NotFound {
                resource: Resource::Transaction,
                body: Some(raw),
            } => assert_eq!(raw.as_bytes(), body),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_marker_false_positive_in_unrelated_field() {
        // Substring matching also fires on a nested field with the same text.
        let body = br#"{"transaction":{"meta":{"status":"404"},"uuid":"abc"}}"#;
        assert!(classify_not_found(Resource::Transaction, body).is_err());
    }

    #[test]
    fn test_status_marker_requires_exact_spacing() {
        let body = br#"{"status": "404"}"#;
        assert!(classify_not_found(Resource::Transaction, body).is_ok());
    }

    #[test]
    fn test_account_and_fair_rate_never_not_found() {
        assert!(classify_not_found(Resource::Account, b"null").is_ok());
        assert!(classify_not_found(Resource::FairRate, br#"{"status":"404"}"#).is_ok());
    }
}
