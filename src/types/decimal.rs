//! Decimal parsing for CoinJar's string-encoded amounts.
//!
//! Amounts and balances travel as decimal strings and are stored that way.
//! These helpers parse them into exact `Decimal` values on demand.

use rust_decimal::Decimal;

use crate::error::CoinJarError;

/// Parse a decimal-formatted string exactly.
///
/// Fails instead of rounding if the value carries more precision than
/// `Decimal` can hold.
pub fn parse_decimal(value: &str) -> Result<Decimal, CoinJarError> {
    Decimal::from_str_exact(value.trim()).map_err(|source| CoinJarError::InvalidDecimal {
        value: value.to_string(),
        source,
    })
}

/// Parse an optional decimal string, treating absence as `None`.
pub(crate) fn parse_optional_decimal(value: Option<&str>) -> Result<Option<Decimal>, CoinJarError> {
    value.map(parse_decimal).transpose()
}
