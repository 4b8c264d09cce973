use std::sync::{Arc, Mutex};

use crate::client::{OutboundRequest, Transport, TransportError, TransportResponse};

type Responder = Box<dyn Fn(usize) -> Result<TransportResponse, TransportError> + Send + Sync>;

/// In-memory [`Transport`] that records every request and answers from a script keyed by
/// the 1-based call number.
pub struct FakeTransport {
    responder: Responder,
    requests: Arc<Mutex<Vec<OutboundRequest>>>
}

impl FakeTransport {
    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(usize) -> Result<TransportResponse, TransportError> + Send + Sync + 'static
    {
        Self {
            responder: Box::new(responder),
            requests: Arc::new(Mutex::new(Vec::new()))
        }
    }

    pub fn always(status: u16) -> Self {
        Self::with_responder(move |_| Ok(TransportResponse { status, body: String::new() }))
    }

    pub fn requests(&self) -> Arc<Mutex<Vec<OutboundRequest>>> {
        self.requests.clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: OutboundRequest) -> Result<TransportResponse, TransportError> {
        let call = {
            let mut requests = self.requests.lock().expect("fake transport lock poisoned");
            requests.push(request);
            requests.len()
        };

        (self.responder)(call)
    }
}
