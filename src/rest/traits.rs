//! Trait definition for the CoinJar REST API client.
//!
//! [`CoinJarClient`] abstracts every read operation so callers can depend on
//! the trait and substitute a mock in tests. [`CoinJarClientExt`] layers a few
//! conveniences on top of any implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use coinjar_api_client::rest::{CoinJarClient, CoinJarRestClient};
//!
//! async fn show_rate<C: CoinJarClient>(client: &C) -> Result<(), coinjar_api_client::CoinJarError> {
//!     let rate = client.fair_rate("AUD").await?;
//!     println!("AUD spot: {}", rate.spot);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;

use crate::error::CoinJarError;
use crate::rest::CoinJarRestClient;
use crate::rest::resources::{BitcoinAddress, Contact, FairRate, Payment, Transaction, User};
use crate::types::DEFAULT_LIMIT;

/// Trait defining all CoinJar REST API operations.
///
/// The no-argument list methods default to the first page of
/// [`DEFAULT_LIMIT`] records.
pub trait CoinJarClient: Send + Sync {
    /// Get the authenticated user's account.
    fn account(&self) -> impl Future<Output = Result<User, CoinJarError>> + Send;

    /// List bitcoin addresses.
    fn list_bitcoin_addresses(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<BitcoinAddress>, CoinJarError>> + Send;

    /// Get a single bitcoin address.
    fn bitcoin_address(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<BitcoinAddress, CoinJarError>> + Send;

    /// List contacts.
    fn list_contacts(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Contact>, CoinJarError>> + Send;

    /// Get a single contact.
    fn contact(&self, uuid: &str) -> impl Future<Output = Result<Contact, CoinJarError>> + Send;

    /// List payments.
    fn list_payments(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Payment>, CoinJarError>> + Send;

    /// Get a single payment.
    fn payment(&self, uuid: &str) -> impl Future<Output = Result<Payment, CoinJarError>> + Send;

    /// List transactions.
    fn list_transactions(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<Transaction>, CoinJarError>> + Send;

    /// Get a single transaction.
    fn transaction(
        &self,
        uuid: &str,
    ) -> impl Future<Output = Result<Transaction, CoinJarError>> + Send;

    /// Get the fair exchange rate for a currency.
    fn fair_rate(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<FairRate, CoinJarError>> + Send;

    /// List the first page of bitcoin addresses.
    fn bitcoin_addresses(
        &self,
    ) -> impl Future<Output = Result<Vec<BitcoinAddress>, CoinJarError>> + Send {
        self.list_bitcoin_addresses(DEFAULT_LIMIT, 0)
    }

    /// List the first page of contacts.
    fn contacts(&self) -> impl Future<Output = Result<Vec<Contact>, CoinJarError>> + Send {
        self.list_contacts(DEFAULT_LIMIT, 0)
    }

    /// List the first page of payments.
    fn payments(&self) -> impl Future<Output = Result<Vec<Payment>, CoinJarError>> + Send {
        self.list_payments(DEFAULT_LIMIT, 0)
    }

    /// List the first page of transactions.
    fn transactions(&self) -> impl Future<Output = Result<Vec<Transaction>, CoinJarError>> + Send {
        self.list_transactions(DEFAULT_LIMIT, 0)
    }
}

impl CoinJarClient for CoinJarRestClient {
    async fn account(&self) -> Result<User, CoinJarError> {
        CoinJarRestClient::account(self).await
    }

    async fn list_bitcoin_addresses(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<BitcoinAddress>, CoinJarError> {
        CoinJarRestClient::list_bitcoin_addresses(self, limit, offset).await
    }

    async fn bitcoin_address(&self, address: &str) -> Result<BitcoinAddress, CoinJarError> {
        CoinJarRestClient::bitcoin_address(self, address).await
    }

    async fn list_contacts(&self, limit: u32, offset: u32) -> Result<Vec<Contact>, CoinJarError> {
        CoinJarRestClient::list_contacts(self, limit, offset).await
    }

    async fn contact(&self, uuid: &str) -> Result<Contact, CoinJarError> {
        CoinJarRestClient::contact(self, uuid).await
    }

    async fn list_payments(&self, limit: u32, offset: u32) -> Result<Vec<Payment>, CoinJarError> {
        CoinJarRestClient::list_payments(self, limit, offset).await
    }

    async fn payment(&self, uuid: &str) -> Result<Payment, CoinJarError> {
        CoinJarRestClient::payment(self, uuid).await
    }

    async fn list_transactions(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Transaction>, CoinJarError> {
        CoinJarRestClient::list_transactions(self, limit, offset).await
    }

    async fn transaction(&self, uuid: &str) -> Result<Transaction, CoinJarError> {
        CoinJarRestClient::transaction(self, uuid).await
    }

    async fn fair_rate(&self, currency: &str) -> Result<FairRate, CoinJarError> {
        CoinJarRestClient::fair_rate(self, currency).await
    }
}

/// Conveniences built on top of any [`CoinJarClient`].
#[allow(async_fn_in_trait)]
pub trait CoinJarClientExt: CoinJarClient {
    /// The account's available balance as an exact decimal.
    async fn spendable_balance(&self) -> Result<Decimal, CoinJarError> {
        self.account().await?.available_balance_decimal()
    }

    /// Find a contact on the first page whose payee name matches exactly.
    async fn find_contact_by_payee(
        &self,
        payee_name: &str,
    ) -> Result<Option<Contact>, CoinJarError> {
        let contacts = self.contacts().await?;
        Ok(contacts.into_iter().find(|c| c.payee_name == payee_name))
    }

    /// Collect every page of transactions, stopping at the first empty page.
    ///
    /// The offset advances by the number of records received, so a server
    /// that caps the page below `page_size` still yields every record.
    async fn all_transactions(&self, page_size: u32) -> Result<Vec<Transaction>, CoinJarError> {
        let limit = page_size.max(1);
        let mut offset = 0u32;
        let mut all = Vec::new();
        loop {
            let batch = self.list_transactions(limit, offset).await?;
            if batch.is_empty() {
                return Ok(all);
            }
            let received = u32::try_from(batch.len()).unwrap_or(u32::MAX);
            all.extend(batch);
            match offset.checked_add(received) {
                Some(next) => offset = next,
                None => return Ok(all),
            }
        }
    }
}

// Blanket implementation for types that implement CoinJarClient
impl<T: CoinJarClient> CoinJarClientExt for T {}
