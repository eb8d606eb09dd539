//! HTTP Basic authentication header for CoinJar requests.
//!
//! The header value is computed as:
//! ```text
//! "Basic " + base64(api_key + ":")
//! ```

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::auth::Credentials;

/// Build the `Authorization` header value for a request.
///
/// # Example
///
/// ```rust
/// use coinjar_api_client::auth::{Credentials, authorization_header};
///
/// let credentials = Credentials::new("someapikey");
/// assert_eq!(authorization_header(&credentials), "Basic c29tZWFwaWtleTo=");
/// ```
pub fn authorization_header(credentials: &Credentials) -> String {
    let user_pass = format!("{}:", credentials.expose_api_key());
    format!("Basic {}", BASE64.encode(user_pass))
}

/// Recover the API key from a Basic `Authorization` header value.
///
/// Returns `None` if the value is not a well-formed Basic credential.
/// The password part, which CoinJar leaves empty, is discarded.
pub fn decode_authorization_header(value: &str) -> Option<String> {
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let user_pass = String::from_utf8(decoded).ok()?;
    let (user, _password) = user_pass.split_once(':')?;
    Some(user.to_string())
}
