use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{AccountIban, Currency, Description, TransactionType};

/// A single synthetic money movement, shaped like the body the transactions API accepts.
///
/// Every field is always populated. Records carry no relationship to each other and are
/// dropped as soon as they have been submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Random version 4 UUID.
    pub id: Uuid,
    /// Positive amount with two decimal places, sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Currency,
    pub account_iban: AccountIban,
    /// Serialized as `YYYY-MM-DD`.
    pub value_date: NaiveDate,
    pub description: Description,
    pub customer_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType
}
