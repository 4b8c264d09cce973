mod date_range;
mod errors;
mod iban;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use date_range::DateRange;
pub use errors::DateRangeError;
pub use iban::{AccountIban, DEFAULT_IBAN_PREFIX, IBAN_GROUP_RANGE};

/// 1-based position of a record within a run.
pub type SequenceNumber = usize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Chf,
    Jpy,
    Idr
}

impl Currency {
    pub const ALL: [Currency; 5] = [Currency::Usd, Currency::Eur, Currency::Chf, Currency::Jpy, Currency::Idr];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Chf => "CHF",
            Currency::Jpy => "JPY",
            Currency::Idr => "IDR"
        }
    }
}

impl Display for Currency {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// Direction of the money movement as seen from the account.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Credit,
    Debit
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Credit, TransactionType::Debit];
}

/// The fixed set of booking texts a generated transaction can carry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Description {
    #[serde(rename = "Online payment")]
    OnlinePayment,
    #[serde(rename = "ATM withdrawal")]
    AtmWithdrawal,
    #[serde(rename = "Salary payment")]
    SalaryPayment,
    #[serde(rename = "Shopping mall")]
    ShoppingMall,
    #[serde(rename = "Transfer to friend")]
    TransferToFriend,
    #[serde(rename = "Utility bill")]
    UtilityBill
}

impl Display for Description {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.text())
    }
}

impl Description {
    pub const ALL: [Description; 6] = [
        Description::OnlinePayment,
        Description::AtmWithdrawal,
        Description::SalaryPayment,
        Description::ShoppingMall,
        Description::TransferToFriend,
        Description::UtilityBill
    ];

    pub fn text(&self) -> &'static str {
        match self {
            Description::OnlinePayment => "Online payment",
            Description::AtmWithdrawal => "ATM withdrawal",
            Description::SalaryPayment => "Salary payment",
            Description::ShoppingMall => "Shopping mall",
            Description::TransferToFriend => "Transfer to friend",
            Description::UtilityBill => "Utility bill"
        }
    }
}
