use thiserror::Error;

use crate::client::SubmitError;
use crate::types::SequenceNumber;

#[derive(Debug, Error)]
pub enum SeederError {
    #[error("Run aborted at transaction [{sequence}]: {source}")]
    Aborted {
        sequence: SequenceNumber,
        source: SubmitError
    }
}
