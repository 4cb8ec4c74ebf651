//! HTTP error types for the UPS client

use thiserror::Error;
use ups_core::UpsError;
use ups_xml::XmlError;

/// Errors raised by the transport layer
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("carrier endpoint returned HTTP {status}")]
    Status { status: u16, body: String },
}

/// Errors raised by [`crate::UpsClient`] operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("shipper number is required for shipment operations")]
    MissingShipperNumber,

    #[error(transparent)]
    Api(#[from] UpsError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Xml(#[from] XmlError),
}
