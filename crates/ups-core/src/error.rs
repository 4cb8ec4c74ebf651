//! Error types for UPS Core

use thiserror::Error;
use ups_xml::XmlError;

/// Errors that can occur while building requests or reading responses
#[derive(Debug, Error)]
pub enum UpsError {
    /// The confirm step returned no shipment digest; carries the carrier's
    /// error description verbatim.
    #[error("carrier rejected the shipment: {0}")]
    CarrierRejected(String),

    /// An expected response path is absent (malformed or unexpected-shape
    /// response).
    #[error("missing field in carrier response: {0}")]
    MissingField(String),

    /// A response field was present but unusable.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// The caller supplied a delivery-confirmation key outside the fixed
    /// enumeration.
    #[error("unknown delivery confirmation type: {0:?}")]
    UnknownDeliveryConfirmation(String),

    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UpsError {
    pub(crate) fn missing(path: &[&str]) -> Self {
        UpsError::MissingField(path.join("/"))
    }
}
