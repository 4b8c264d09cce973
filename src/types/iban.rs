use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub const DEFAULT_IBAN_PREFIX: &str = "CH92-0000";
pub const IBAN_GROUP_RANGE: std::ops::RangeInclusive<u16> = 1000..=9999;

/// A templated pseudo-IBAN: a fixed prefix followed by three 4-digit groups.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountIban(String);

impl AccountIban {
    pub fn from_groups(prefix: &str, groups: [u16; 3]) -> Self {
        let [first, second, third] = groups;
        AccountIban(format!("{prefix}-{first:04}-{second:04}-{third:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AccountIban {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
