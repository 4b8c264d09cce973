mod errors;
#[cfg(test)]
pub mod fake;
mod http_transport;
mod submitter;

pub use errors::{SubmitError, TransportError};
pub use http_transport::HttpTransport;
pub use submitter::{SubmitOutcome, Submitter};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// A fully prepared POST: target, headers and serialized body.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String
}

impl OutboundRequest {
    /// Looks a header up by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What came back from the server. Only used for logging, nothing is parsed out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String
}

pub trait Transport: Send + Sync {
    fn send(&self, request: OutboundRequest) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
