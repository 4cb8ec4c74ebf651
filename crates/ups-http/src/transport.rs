//! Blocking HTTP transport

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, trace};

use crate::endpoints::{Endpoints, Operation};
use crate::error::TransportError;

/// Submits one request document and returns the raw response body.
///
/// Implementations are stateless between calls; the client treats every
/// submit as an independent exchange. Tests substitute an in-memory double
/// here to run the protocol without a network.
pub trait Transport {
    fn submit(&self, operation: Operation, body: &str) -> Result<String, TransportError>;
}

/// Blocking reqwest transport against a fixed endpoint table
pub struct HttpTransport {
    client: Client,
    endpoints: Endpoints,
}

impl HttpTransport {
    /// Create a transport with a 30-second request timeout
    pub fn new(endpoints: Endpoints) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(TransportError::Request)?;
        Ok(Self { client, endpoints })
    }

    /// Create a transport with a caller-configured client
    pub fn with_client(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Transport for HttpTransport {
    fn submit(&self, operation: Operation, body: &str) -> Result<String, TransportError> {
        let url = self.endpoints.url(operation);
        debug!(operation = operation.name(), url, bytes = body.len(), "submitting carrier request");
        trace!(request = body, "request body");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/xml")
            .body(body.to_string())
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(operation = operation.name(), bytes = text.len(), "received carrier response");
        trace!(response = text.as_str(), "response body");
        Ok(text)
    }
}
