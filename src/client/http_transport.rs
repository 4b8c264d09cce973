use reqwest::Client;
use tracing::trace;

use crate::client::{OutboundRequest, Transport, TransportError, TransportResponse, AUTHORIZATION};

/// [`Transport`] backed by a `reqwest` client with its default timeouts.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new()
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        trace!("POST {} (authorized: {})", request.url, request.header(AUTHORIZATION).is_some());

        let OutboundRequest { url, headers, body } = request;
        let mut builder = self.client.post(&url).body(body);

        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        trace!("POST {url} answered [{status}] with {} bytes", body.len());

        Ok(TransportResponse { status, body })
    }
}
