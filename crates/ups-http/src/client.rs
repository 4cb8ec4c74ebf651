//! UPS client: credentials, wire framing, and the two-step workflow

use tracing::debug;
use ups_core::{
    accept_request, access_request, confirm_request, shipment_digest, track_request, Shipment,
    ShipmentRequest, TrackingInfo, UpsResult,
};
use ups_xml::{encode, XmlMap};

use crate::endpoints::{Endpoints, Operation};
use crate::error::ClientError;
use crate::transport::{HttpTransport, Transport};

/// API access credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub license_number: String,
    pub user_id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        license_number: impl Into<String>,
        user_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            license_number: license_number.into(),
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}

/// Client for the carrier's track and shipment operations.
///
/// The constructor parameters are the entire configuration surface: the
/// credentials, an optional default billing account (shipper number), and a
/// debug flag that selects the carrier's test endpoints and enables verbose
/// request/response logging. The client holds no mutable state; every call
/// is an independent exchange.
pub struct UpsClient {
    credentials: Credentials,
    shipper_number: Option<String>,
    debug: bool,
    transport: Box<dyn Transport>,
}

impl UpsClient {
    /// Create a client against the carrier-hosted endpoints.
    ///
    /// `debug` selects the test endpoint table; production otherwise.
    pub fn new(
        credentials: Credentials,
        shipper_number: Option<String>,
        debug: bool,
    ) -> Result<Self, ClientError> {
        let endpoints = if debug {
            Endpoints::testing()
        } else {
            Endpoints::production()
        };
        let transport = HttpTransport::new(endpoints)?;
        Ok(Self::with_transport(
            credentials,
            shipper_number,
            debug,
            Box::new(transport),
        ))
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(
        credentials: Credentials,
        shipper_number: Option<String>,
        debug: bool,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            credentials,
            shipper_number,
            debug,
            transport,
        }
    }

    pub fn shipper_number(&self) -> Option<&str> {
        self.shipper_number.as_deref()
    }

    /// Query tracking status for one tracking number
    pub fn track(&self, tracking_number: &str) -> Result<TrackingInfo, ClientError> {
        let document = track_request(tracking_number);
        let result = self.submit(Operation::Track, &document)?;
        Ok(TrackingInfo::new(tracking_number, result))
    }

    /// Run the confirm/accept workflow to completion.
    ///
    /// The returned [`Shipment`] is fully populated or this call fails; no
    /// confirmed-but-unaccepted state is ever observable. A confirm response
    /// without a digest aborts with the carrier's error text before any
    /// accept request is issued.
    pub fn create_shipment(&self, request: &ShipmentRequest) -> Result<Shipment, ClientError> {
        let shipper_number = self
            .shipper_number
            .as_deref()
            .ok_or(ClientError::MissingShipperNumber)?;

        let confirm_document = confirm_request(request, shipper_number)?;
        let confirm = self.submit(Operation::ShipConfirm, &confirm_document)?;
        let digest = shipment_digest(&confirm)?;

        let accept_document = accept_request(&digest);
        let accept = self.submit(Operation::ShipAccept, &accept_document)?;

        Ok(Shipment::new(confirm, accept, request.file_format.clone()))
    }

    /// Frame a request document into the wire body: the access-request
    /// document followed by the operation document, each with its own XML
    /// declaration.
    fn wire_body(&self, document: &XmlMap) -> Result<String, ClientError> {
        let access = access_request(
            &self.credentials.license_number,
            &self.credentials.user_id,
            &self.credentials.password,
        );
        Ok(format!("{}\n{}", encode(&access)?, encode(document)?))
    }

    fn submit(&self, operation: Operation, document: &XmlMap) -> Result<UpsResult, ClientError> {
        let body = self.wire_body(document)?;
        if self.debug {
            debug!(operation = operation.name(), request = body.as_str(), "carrier request");
        }
        let response = self.transport.submit(operation, &body)?;
        if self.debug {
            debug!(operation = operation.name(), response = response.as_str(), "carrier response");
        }
        Ok(UpsResult::new(response))
    }
}
