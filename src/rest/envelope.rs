//! One-field response envelopes.
//!
//! Most CoinJar responses namespace their payload under a single key, e.g.
//! `{"user": {...}}` or `{"contacts": [...]}`. [`unwrap_envelope`] decodes the
//! body, pulls out that key and decodes its value as `T`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoinJarError;

/// Decode `body` as a JSON object and return the value stored under `key`.
///
/// Other keys in the object are ignored. A body that is not a JSON object
/// surfaces as [`CoinJarError::Json`]; an object without `key` surfaces as
/// [`CoinJarError::MissingEnvelope`].
///
/// # Example
///
/// ```rust
/// use coinjar_api_client::rest::unwrap_envelope;
/// use coinjar_api_client::rest::resources::FairRate;
///
/// let body = br#"{"rate":{"bid":"1.0","ask":"1.1","spot":"1.05"}}"#;
/// let rate: FairRate = unwrap_envelope(body, "rate").unwrap();
/// assert_eq!(rate.spot, "1.05");
/// ```
pub fn unwrap_envelope<T>(body: &[u8], key: &'static str) -> Result<T, CoinJarError>
where
    T: DeserializeOwned,
{
    let mut envelope: Map<String, Value> = serde_json::from_slice(body)?;
    let inner = envelope
        .remove(key)
        .ok_or(CoinJarError::MissingEnvelope { key })?;
    Ok(serde_json::from_value(inner)?)
}
