//! Error types for the CoinJar client library.

use thiserror::Error;

/// The main error type for all CoinJar client operations.
#[derive(Error, Debug)]
pub enum CoinJarError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON deserialization error, either malformed JSON or an unexpected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The response decoded as an object but lacked the expected envelope key
    #[error("Invalid response: missing '{key}' field")]
    MissingEnvelope {
        /// The envelope key that was expected
        key: &'static str,
    },

    /// The remote service reported that the requested resource does not exist
    #[error("{resource} not found{}", body_suffix(.body))]
    NotFound {
        /// Which kind of resource was requested
        resource: Resource,
        /// Raw response body, kept where the service embeds its error in a payload
        body: Option<String>,
    },

    /// Query parameters could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A decimal-formatted string could not be parsed
    #[error("Invalid decimal value {value:?}: {source}")]
    InvalidDecimal {
        /// The offending string
        value: String,
        /// Underlying parse error
        source: rust_decimal::Error,
    },

    /// Missing required credentials
    #[error("Missing credentials: an API key is required")]
    MissingCredentials,
}

impl CoinJarError {
    /// Check if this error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoinJarError::NotFound { .. })
    }

    /// Check if this error came from the transport rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, CoinJarError::Http(_) | CoinJarError::HttpMiddleware(_))
    }

    /// Check if this error came from decoding the response body.
    pub fn is_decode(&self) -> bool {
        matches!(self, CoinJarError::Json(_) | CoinJarError::MissingEnvelope { .. })
    }
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(", response body: {body:?}"),
        None => String::new(),
    }
}

/// The CoinJar resources exposed by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The authenticated user's account
    Account,
    /// A bitcoin receiving address
    BitcoinAddress,
    /// An address book entry
    Contact,
    /// An outgoing payment
    Payment,
    /// A ledger transaction
    Transaction,
    /// A fair exchange rate quote
    FairRate,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Resource::Account => "Account",
            Resource::BitcoinAddress => "Bitcoin address",
            Resource::Contact => "Contact",
            Resource::Payment => "Payment",
            Resource::Transaction => "Transaction",
            Resource::FairRate => "Fair rate",
        };
        f.write_str(s)
    }
}
