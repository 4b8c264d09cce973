use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Transport error: could not connect: {0}")]
    Connect(String),
    #[error("Transport error: request timed out: {0}")]
    Timeout(String),
    #[error("Transport error: {0}")]
    Request(#[source] reqwest::Error)
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() {
            Self::Connect(error.to_string())
        } else if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else {
            Self::Request(error)
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Submit error: record could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Submit error: {0}")]
    Transport(#[from] TransportError)
}
