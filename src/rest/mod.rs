//! CoinJar REST API client.
//!
//! Every operation is a single authenticated GET whose JSON body is decoded
//! into a typed record, usually after unwrapping a one-field envelope.
//!
//! # Trait-based API
//!
//! The [`CoinJarClient`] trait abstracts all operations, so code can be
//! written against it and exercised with a mock implementation.
//!
//! ```rust,ignore
//! use coinjar_api_client::rest::{CoinJarClient, CoinJarRestClient};
//!
//! async fn use_client<C: CoinJarClient>(client: &C) -> Result<(), coinjar_api_client::CoinJarError> {
//!     let user = client.account().await?;
//!     println!("Balance: {}", user.available_balance);
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod envelope;
pub mod not_found;
pub mod resources;
mod traits;

pub use client::{CoinJarRestClient, CoinJarRestClientBuilder};
pub use endpoints::COINJAR_BASE_URL;
pub use envelope::unwrap_envelope;
pub use not_found::{NotFoundRule, classify_not_found};
pub use traits::{CoinJarClient, CoinJarClientExt};
