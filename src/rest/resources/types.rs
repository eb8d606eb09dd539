//! Types returned by the CoinJar REST API.
//!
//! Monetary values are kept as the decimal strings the service sends. Each
//! record offers `Decimal` accessors that parse them exactly on demand.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::CoinJarError;
use crate::types::decimal::parse_optional_decimal;
use crate::types::parse_decimal;
use crate::types::serde_helpers::{null_as_empty, optional_string_or_number};

/// The authenticated user's account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// User identifier.
    pub uuid: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Spendable balance in BTC.
    pub available_balance: String,
    /// Balance awaiting confirmation in BTC.
    pub unconfirmed_balance: String,
}

impl User {
    /// The available balance as an exact decimal.
    pub fn available_balance_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.available_balance)
    }

    /// The unconfirmed balance as an exact decimal.
    pub fn unconfirmed_balance_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.unconfirmed_balance)
    }
}

/// A bitcoin receiving address owned by the account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BitcoinAddress {
    /// User-assigned label; empty when unset.
    #[serde(deserialize_with = "null_as_empty::deserialize", default)]
    pub label: String,
    /// Total confirmed BTC received.
    pub total_confirmed: String,
    /// Total BTC received including unconfirmed.
    pub total_received: String,
    /// The bitcoin address.
    pub address: String,
}

impl BitcoinAddress {
    /// Total confirmed as an exact decimal.
    pub fn total_confirmed_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.total_confirmed)
    }

    /// Total received as an exact decimal.
    pub fn total_received_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.total_received)
    }
}

/// Kind of payee a contact or payment points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum PayeeType {
    /// Another CoinJar wallet
    Wallet,
    /// A raw bitcoin address
    Address,
    /// An email address
    Email,
    /// Any value this library does not know about
    Other(String),
}

impl From<String> for PayeeType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "WALLET" => PayeeType::Wallet,
            "ADDRESS" => PayeeType::Address,
            "EMAIL" => PayeeType::Email,
            _ => PayeeType::Other(value),
        }
    }
}

impl PayeeType {
    /// The wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            PayeeType::Wallet => "WALLET",
            PayeeType::Address => "ADDRESS",
            PayeeType::Email => "EMAIL",
            PayeeType::Other(s) => s,
        }
    }
}

impl std::fmt::Display for PayeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An address book entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    /// Contact identifier.
    pub uuid: String,
    /// Display name.
    pub name: String,
    /// Payee identifier (email, wallet or address).
    pub payee_name: String,
    /// Kind of payee.
    pub payee_type: PayeeType,
    /// Creation time (ISO-8601).
    pub created_at: String,
    /// Last update time (ISO-8601).
    pub updated_at: String,
}

/// An outgoing payment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Payment {
    /// Payment identifier.
    pub uuid: String,
    /// Payment status, e.g. `COMPLETED`.
    pub status: String,
    /// Signed amount in BTC.
    pub amount: String,
    /// Optional reference supplied by the sender.
    #[serde(default)]
    pub reference: Option<String>,
    /// Payee identifier.
    pub payee_name: String,
    /// Kind of payee.
    pub payee_type: PayeeType,
    /// Creation time (ISO-8601).
    pub created_at: String,
    /// Last update time (ISO-8601).
    pub updated_at: String,
    /// Ledger transaction produced by this payment.
    #[serde(default)]
    pub related_transaction: Option<Transaction>,
}

impl Payment {
    /// The amount as an exact decimal.
    pub fn amount_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.amount)
    }
}

/// One side of a ledger movement.
///
/// Counterparty fields are absent for purely internal transfers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    /// Numeric transaction id.
    pub id: i64,
    /// Transaction identifier.
    pub uuid: String,
    /// Signed amount in BTC.
    pub amount: String,
    /// Transaction status, e.g. `SENT`.
    pub status: String,
    /// Network confirmations, sent as a string or a number.
    #[serde(deserialize_with = "optional_string_or_number::deserialize", default)]
    pub confirmations: Option<String>,
    /// Optional reference.
    #[serde(default)]
    pub reference: Option<String>,
    /// Counterparty bitcoin address.
    #[serde(default)]
    pub counterparty_address: Option<String>,
    /// Counterparty display name.
    #[serde(default)]
    pub counterparty_name: Option<String>,
    /// Counterparty kind.
    #[serde(default)]
    pub counterparty_type: Option<String>,
    /// Counterparty CoinJar user id.
    #[serde(default)]
    pub counterparty_user_id: Option<i64>,
    /// On-chain transaction id.
    #[serde(default)]
    pub bitcoin_txid: Option<String>,
    /// Id of the payment this transaction belongs to.
    #[serde(default)]
    pub payment_id: Option<i64>,
    /// Uuid of the payment this transaction belongs to.
    #[serde(default)]
    pub related_payment_uuid: Option<String>,
    /// Owning user id.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Creation time (ISO-8601).
    pub created_at: String,
    /// Last update time (ISO-8601).
    pub updated_at: String,
}

impl Transaction {
    /// The amount as an exact decimal.
    pub fn amount_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.amount)
    }

    /// Confirmations as a decimal, if reported.
    pub fn confirmations_decimal(&self) -> Result<Option<Decimal>, CoinJarError> {
        parse_optional_decimal(self.confirmations.as_deref())
    }

    /// Whether the transaction moved funds out of the account.
    pub fn is_outgoing(&self) -> bool {
        self.amount.trim_start().starts_with('-')
    }
}

/// Fair exchange rate quote for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FairRate {
    /// Best bid.
    pub bid: String,
    /// Best ask.
    pub ask: String,
    /// Spot price.
    pub spot: String,
}

impl FairRate {
    /// Bid as an exact decimal.
    pub fn bid_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.bid)
    }

    /// Ask as an exact decimal.
    pub fn ask_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.ask)
    }

    /// Spot as an exact decimal.
    pub fn spot_decimal(&self) -> Result<Decimal, CoinJarError> {
        parse_decimal(&self.spot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize() {
        let json = r#"{
            "available_balance": "1.0",
            "email": "test@example.com",
            "full_name": "John Doe",
            "unconfirmed_balance": "0.3",
            "uuid": "29d7f276-ba50-11e3-b016-7eddf9792095"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.uuid, "29d7f276-ba50-11e3-b016-7eddf9792095");
        assert_eq!(user.available_balance_decimal().unwrap(), Decimal::new(10, 1));
        assert_eq!(user.unconfirmed_balance_decimal().unwrap(), Decimal::new(3, 1));
    }

    #[test]
    fn test_payee_type_known_and_unknown() {
        let contact: Contact = serde_json::from_str(
            r#"{
                "updated_at": "2013-06-25T17:58:23.000+10:00",
                "uuid": "e359fd02-0079-4ef0-9f1f-706a84f39cca",
                "name": "Ryan Zhou",
                "payee_name": "ryan@coinjar.io",
                "payee_type": "WALLET",
                "created_at": "2013-06-25T17:58:23.000+10:00"
            }"#,
        )
        .unwrap();
        assert_eq!(contact.payee_type, PayeeType::Wallet);

        let other = PayeeType::from("BANK".to_string());
        assert_eq!(other, PayeeType::Other("BANK".to_string()));
        assert_eq!(other.to_string(), "BANK");
    }

    #[test]
    fn test_transaction_nullable_fields() {
        let json = r#"{
            "confirmations": null,
            "status": "SENT",
            "amount": "-1.25",
            "reference": null,
            "user_id": 1,
            "counterparty_user_id": null,
            "updated_at": "2013-06-19T12:06:54.000+10:00",
            "uuid": "880b8337-f262-460b-a762-6193f1b0ec33",
            "bitcoin_txid": null,
            "counterparty_address": null,
            "id": 10018,
            "payment_id": 9590,
            "created_at": "2013-06-19T12:06:54.000+10:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, 10018);
        assert_eq!(tx.payment_id, Some(9590));
        assert!(tx.confirmations.is_none());
        assert!(tx.counterparty_user_id.is_none());
        assert!(tx.counterparty_name.is_none());
        assert!(tx.is_outgoing());
        assert_eq!(tx.amount_decimal().unwrap(), Decimal::new(-125, 2));
        assert_eq!(tx.confirmations_decimal().unwrap(), None);
    }

    #[test]
    fn test_fair_rate_decimals() {
        let rate: FairRate =
            serde_json::from_str(r#"{"bid":"648.06","ask":"660.62","spot":"654.34"}"#).unwrap();
        assert_eq!(rate.bid_decimal().unwrap().to_string(), "648.06");
        assert_eq!(rate.ask_decimal().unwrap().to_string(), "660.62");
        assert_eq!(rate.spot_decimal().unwrap().to_string(), "654.34");
    }
}
