//! # UPS XML
//!
//! Dynamic XML document tree and converter for the UPS XML API.
//!
//! This crate provides:
//! - A tagged value tree ([`XmlValue`] / [`XmlMap`]) for assembling carrier
//!   documents whose element sets are mostly conditional
//! - An encoder producing a complete XML document string
//! - A decoder producing the tree from a carrier response body
//!
//! The carrier's wire format collapses one-element lists: a response element
//! that may repeat arrives as a bare value when it occurs once. The decoder
//! mirrors that collapse (repeated siblings become [`XmlValue::List`], a single
//! occurrence stays bare), and [`XmlValue::as_list`] is the normalization point
//! callers apply at every response boundary.
//!
//! ## Example
//!
//! ```rust
//! use ups_xml::{decode, encode, XmlMap};
//!
//! let document = XmlMap::new().with(
//!     "TrackRequest",
//!     XmlMap::new().with("TrackingNumber", "1Z12345E0291980793"),
//! );
//!
//! let xml = encode(&document).unwrap();
//! let parsed = decode(&xml).unwrap();
//! assert_eq!(parsed, document);
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod value;

pub use decode::decode;
pub use encode::encode;
pub use error::XmlError;
pub use value::{XmlMap, XmlValue};
