//! Custom serde helpers for CoinJar's loosely-typed payloads.
//!
//! The service is inconsistent about nulls and about whether counts are sent
//! as strings or numbers. These modules normalize those fields on the way in.

use serde::{Deserialize, Deserializer, de};

/// Deserialize a string field that may be `null`, yielding an empty string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinjar_api_client::types::serde_helpers::null_as_empty;
///
/// #[derive(Deserialize, Debug)]
/// struct Address {
///     #[serde(deserialize_with = "null_as_empty::deserialize", default)]
///     label: String,
/// }
///
/// let address: Address = serde_json::from_str(r#"{"label":null}"#).unwrap();
/// assert_eq!(address.label, "");
///
/// let address: Address = serde_json::from_str(r#"{"label":"Mojocoin"}"#).unwrap();
/// assert_eq!(address.label, "Mojocoin");
/// ```
pub mod null_as_empty {
    use super::*;

    /// Deserialize an optional string, mapping `null` to `""`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserialize a nullable value sent either as a string or a number, keeping
/// its textual form.
///
/// Numbers are rendered exactly as they appeared on the wire.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinjar_api_client::types::serde_helpers::optional_string_or_number;
///
/// #[derive(Deserialize, Debug)]
/// struct Transaction {
///     #[serde(deserialize_with = "optional_string_or_number::deserialize", default)]
///     confirmations: Option<String>,
/// }
///
/// let tx: Transaction = serde_json::from_str(r#"{"confirmations":6}"#).unwrap();
/// assert_eq!(tx.confirmations.as_deref(), Some("6"));
///
/// let tx: Transaction = serde_json::from_str(r#"{"confirmations":"12"}"#).unwrap();
/// assert_eq!(tx.confirmations.as_deref(), Some("12"));
///
/// let tx: Transaction = serde_json::from_str(r#"{"confirmations":null}"#).unwrap();
/// assert!(tx.confirmations.is_none());
/// ```
pub mod optional_string_or_number {
    use super::*;
    use serde_json::Value;

    /// Deserialize a string, number or null into `Option<String>`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(value_kind(&other)),
                &"a string, a number or null",
            )),
        }
    }

    fn value_kind(value: &Value) -> &'static str {
        match value {
            Value::Bool(_) => "boolean",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            _ => "value",
        }
    }
}
