//! Common types used across the CoinJar client library.

pub mod decimal;
pub mod pagination;
pub mod serde_helpers;

pub use decimal::parse_decimal;
pub use pagination::{DEFAULT_LIMIT, Pagination};
