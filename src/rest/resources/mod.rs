//! CoinJar resource endpoints.
//!
//! Every method is one authenticated GET. Single-record lookups apply the
//! resource's not-found rule (see [`classify_not_found`]) before decoding.
//!
//! [`classify_not_found`]: crate::rest::not_found::classify_not_found

mod types;

pub use types::*;

use crate::error::{CoinJarError, Resource};
use crate::rest::CoinJarRestClient;
use crate::rest::endpoints;
use crate::types::Pagination;

impl CoinJarRestClient {
    /// Get the authenticated user's account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinjar_api_client::rest::CoinJarRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinJarRestClient::new("my_api_key");
    ///     let user = client.account().await?;
    ///     println!("{} <{}>: {}", user.full_name, user.email, user.available_balance);
    ///     Ok(())
    /// }
    /// ```
    pub async fn account(&self) -> Result<User, CoinJarError> {
        self.get_enveloped(endpoints::ACCOUNT, "user").await
    }

    /// List the first page (100 records) of bitcoin addresses.
    pub async fn bitcoin_addresses(&self) -> Result<Vec<BitcoinAddress>, CoinJarError> {
        self.list_bitcoin_addresses_page(&Pagination::default()).await
    }

    /// List bitcoin addresses.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of addresses to return.
    /// * `offset` - Number of addresses to skip.
    pub async fn list_bitcoin_addresses(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<BitcoinAddress>, CoinJarError> {
        self.list_bitcoin_addresses_page(&Pagination::new(limit, offset))
            .await
    }

    /// List bitcoin addresses within a pagination window.
    pub async fn list_bitcoin_addresses_page(
        &self,
        page: &Pagination,
    ) -> Result<Vec<BitcoinAddress>, CoinJarError> {
        self.get_page(endpoints::BITCOIN_ADDRESSES, page, "bitcoin_addresses")
            .await
    }

    /// Get a single bitcoin address.
    ///
    /// Returns [`CoinJarError::NotFound`] if the address is unknown.
    pub async fn bitcoin_address(&self, address: &str) -> Result<BitcoinAddress, CoinJarError> {
        self.get_resource(
            Resource::BitcoinAddress,
            &endpoints::bitcoin_address(address),
            "bitcoin_address",
        )
        .await
    }

    /// List the first page (100 records) of contacts.
    pub async fn contacts(&self) -> Result<Vec<Contact>, CoinJarError> {
        self.list_contacts_page(&Pagination::default()).await
    }

    /// List contacts.
    pub async fn list_contacts(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Contact>, CoinJarError> {
        self.list_contacts_page(&Pagination::new(limit, offset)).await
    }

    /// List contacts within a pagination window.
    pub async fn list_contacts_page(
        &self,
        page: &Pagination,
    ) -> Result<Vec<Contact>, CoinJarError> {
        self.get_page(endpoints::CONTACTS, page, "contacts").await
    }

    /// Get a single contact.
    ///
    /// Returns [`CoinJarError::NotFound`] if the contact is unknown.
    pub async fn contact(&self, uuid: &str) -> Result<Contact, CoinJarError> {
        self.get_resource(Resource::Contact, &endpoints::contact(uuid), "contact")
            .await
    }

    /// List the first page (100 records) of payments.
    pub async fn payments(&self) -> Result<Vec<Payment>, CoinJarError> {
        self.list_payments_page(&Pagination::default()).await
    }

    /// List payments.
    pub async fn list_payments(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Payment>, CoinJarError> {
        self.list_payments_page(&Pagination::new(limit, offset)).await
    }

    /// List payments within a pagination window.
    pub async fn list_payments_page(
        &self,
        page: &Pagination,
    ) -> Result<Vec<Payment>, CoinJarError> {
        self.get_page(endpoints::PAYMENTS, page, "payments").await
    }

    /// Get a single payment.
    ///
    /// Returns [`CoinJarError::NotFound`] if the payment is unknown.
    pub async fn payment(&self, uuid: &str) -> Result<Payment, CoinJarError> {
        self.get_resource(Resource::Payment, &endpoints::payment(uuid), "payment")
            .await
    }

    /// List the first page (100 records) of transactions.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, CoinJarError> {
        self.list_transactions_page(&Pagination::default()).await
    }

    /// List transactions.
    pub async fn list_transactions(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Transaction>, CoinJarError> {
        self.list_transactions_page(&Pagination::new(limit, offset))
            .await
    }

    /// List transactions within a pagination window.
    pub async fn list_transactions_page(
        &self,
        page: &Pagination,
    ) -> Result<Vec<Transaction>, CoinJarError> {
        self.get_page(endpoints::TRANSACTIONS, page, "transactions")
            .await
    }

    /// Get a single transaction.
    ///
    /// The service answers unknown ids with a payload containing
    /// `"status":"404"`; that is reported as [`CoinJarError::NotFound`] with
    /// the raw body attached.
    pub async fn transaction(&self, uuid: &str) -> Result<Transaction, CoinJarError> {
        self.get_resource(
            Resource::Transaction,
            &endpoints::transaction(uuid),
            "transaction",
        )
        .await
    }

    /// Get the fair exchange rate for a currency, e.g. `"AUD"`.
    pub async fn fair_rate(&self, currency: &str) -> Result<FairRate, CoinJarError> {
        self.get_flat(&endpoints::fair_rate(currency)).await
    }
}
