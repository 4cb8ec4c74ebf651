//! # UPS Core
//!
//! Data model, request builders, and response accessors for the UPS XML API.
//!
//! This crate provides:
//! - The shipment data model (addresses, packages, services, references)
//! - Builders producing the track, shipment-confirm, and shipment-accept
//!   request documents as [`ups_xml`] trees
//! - Response wrappers deriving tracking status, cost, tracking numbers, and
//!   label bytes from raw carrier responses
//!
//! Nothing here touches the network: builders are pure functions over the
//! data model, and accessors consume response bodies the transport layer
//! already fetched. The `ups-http` crate wires both to the carrier endpoints.
//!
//! ## Example
//!
//! ```rust
//! use ups_core::{confirm_request, Address, PackageInfo, ShipmentRequest};
//!
//! let shipper = Address::new("Acme", "555 0100", "1 Main St", "Portland", "OR", "US", "97201");
//! let recipient = Address::new("Beta", "555 0200", "9 Oak Ave", "Austin", "TX", "US", "78701");
//! let request = ShipmentRequest::new(shipper, recipient, vec![PackageInfo::new(3.0)]);
//!
//! let document = confirm_request(&request, "12345E").unwrap();
//! assert!(document.path(&["ShipmentConfirmRequest", "Shipment", "Shipper"]).is_some());
//! ```

pub mod documents;
pub mod error;
pub mod result;
pub mod shipment;
pub mod tracking;
pub mod types;

pub use documents::{access_request, accept_request, confirm_request, track_request};
pub use error::UpsError;
pub use result::UpsResult;
pub use shipment::{shipment_digest, PackageResult, Shipment};
pub use tracking::{Activity, ActivityStatus, TrackingInfo};
pub use types::{
    Address, DeliveryConfirmation, Dimensions, PackageInfo, ReferenceNumber, ShipmentRequest,
    ShippingService,
};
