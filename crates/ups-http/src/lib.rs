//! # UPS HTTP Transport
//!
//! HTTP transport and client for the UPS XML API.
//!
//! This crate provides:
//! - The fixed endpoint tables (test vs. production) keyed by operation
//! - A [`Transport`] trait with a blocking reqwest implementation
//! - [`UpsClient`], which owns the credentials and runs the track and
//!   confirm/accept workflows end to end
//!
//! ## Example
//!
//! ```ignore
//! use ups_core::{Address, PackageInfo, ShipmentRequest};
//! use ups_http::{Credentials, UpsClient};
//!
//! let client = UpsClient::new(
//!     Credentials::new("license", "user", "password"),
//!     Some("12345E".to_string()),
//!     true, // debug: test endpoints + verbose logging
//! )?;
//!
//! let info = client.track("1Z12345E0291980793")?;
//! println!("delivered: {:?}", info.delivered()?);
//!
//! let request = ShipmentRequest::new(shipper, recipient, vec![PackageInfo::new(3.0)]);
//! let shipment = client.create_shipment(&request)?;
//! println!("cost: {}", shipment.cost()?);
//! ```

mod client;
mod endpoints;
mod error;
mod transport;

pub use client::{Credentials, UpsClient};
pub use endpoints::{Endpoints, Operation};
pub use error::{ClientError, TransportError};
pub use transport::{HttpTransport, Transport};
