//! # CoinJar Client
//!
//! An async Rust client library for the CoinJar REST API.
//!
//! ## Features
//!
//! - Read access to account, bitcoin addresses, contacts, payments,
//!   transactions and fair exchange rates
//! - HTTP Basic authentication with the API key
//! - Strong typing for all response records
//! - Amounts kept as exact decimal strings, with `rust_decimal` accessors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinjar_api_client::rest::CoinJarRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinJarRestClient::new("my_api_key");
//!     let transactions = client.list_transactions(10, 0).await?;
//!     for tx in transactions {
//!         println!("{} {} {}", tx.uuid, tx.status, tx.amount);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CoinJarError, Resource};
pub use rest::{CoinJarClient, CoinJarRestClient};
pub use types::Pagination;

/// Result type alias using CoinJarError
pub type Result<T> = std::result::Result<T, CoinJarError>;
