//! CoinJar REST API endpoint paths.
//!
//! Paths are relative to the base URL. Caller-supplied identifiers are
//! percent-encoded as a single path segment.

use url::form_urlencoded;

/// Base URL for the CoinJar REST API.
pub const COINJAR_BASE_URL: &str = "https://api.coinjar.io/v1";

/// Get the authenticated user's account.
pub const ACCOUNT: &str = "account.json";
/// List bitcoin addresses.
pub const BITCOIN_ADDRESSES: &str = "bitcoin_addresses.json";
/// List contacts.
pub const CONTACTS: &str = "contacts.json";
/// List payments.
pub const PAYMENTS: &str = "payments.json";
/// List transactions.
pub const TRANSACTIONS: &str = "transactions.json";

/// Get a single bitcoin address.
pub fn bitcoin_address(address: &str) -> String {
    format!("bitcoin_addresses/{}.json", encode_segment(address))
}

/// Get a single contact.
pub fn contact(uuid: &str) -> String {
    format!("contacts/{}.json", encode_segment(uuid))
}

/// Get a single payment.
pub fn payment(uuid: &str) -> String {
    format!("payments/{}.json", encode_segment(uuid))
}

/// Get a single transaction.
pub fn transaction(uuid: &str) -> String {
    format!("transactions/{}.json", encode_segment(uuid))
}

/// Get the fair rate for a currency.
pub fn fair_rate(currency: &str) -> String {
    format!("fair_rate/{}.json", encode_segment(currency))
}

// form_urlencoded escapes everything outside [A-Za-z0-9*-._] and writes
// spaces as '+'; a literal '+' is already escaped, so the swap is lossless.
fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
