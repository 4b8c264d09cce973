use thiserror::Error;

use crate::types::DateRangeError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: invalid endpoint [{endpoint}]: {reason}")]
    InvalidEndpoint {
        endpoint: String,
        reason: String
    },
    #[error("Config error: bearer token is empty")]
    EmptyToken,
    #[error("Config error: {0}")]
    DateRange(#[from] DateRangeError)
}
