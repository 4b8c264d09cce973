use tracing::debug;

use crate::client::{OutboundRequest, SubmitError, Transport, APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE};
use crate::models::TransactionRecord;

const SUCCESS_STATUS: u16 = 200;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// The server answered 200.
    Accepted,
    /// The server answered with any other status.
    Rejected {
        status: u16,
        body: String
    }
}

/// Serializes records and POSTs them to a single endpoint.
pub struct Submitter<T: Transport> {
    transport: T,
    endpoint: String,
    bearer_token: Option<String>
}

impl<T: Transport> Submitter<T> {
    pub fn new(transport: T, endpoint: impl Into<String>, bearer_token: Option<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            bearer_token
        }
    }

    /// Builds the request for `record` without sending it.
    ///
    /// `Content-Type: application/json` is always set. `Authorization: Bearer <token>` is
    /// added only when a token is configured.
    pub fn build_request(&self, record: &TransactionRecord) -> Result<OutboundRequest, SubmitError> {
        let body = serde_json::to_string(record)?;
        let mut headers = vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())];

        if let Some(token) = &self.bearer_token {
            headers.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
        }

        Ok(OutboundRequest {
            url: self.endpoint.clone(),
            headers,
            body
        })
    }

    /// Sends one record and waits for the response.
    ///
    /// # Errors
    /// Returns `SubmitError` if the record cannot be serialized or the request never
    /// produced a response. A non-200 status is not an error, it is `SubmitOutcome::Rejected`.
    pub async fn submit(&self, record: &TransactionRecord) -> Result<SubmitOutcome, SubmitError> {
        let request = self.build_request(record)?;

        debug!("Submitting transaction [{}] to {}", record.id, self.endpoint);

        let response = self.transport.send(request).await?;

        if response.status == SUCCESS_STATUS {
            Ok(SubmitOutcome::Accepted)
        } else {
            Ok(SubmitOutcome::Rejected {
                status: response.status,
                body: response.body
            })
        }
    }
}
