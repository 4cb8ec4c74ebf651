//! Shipment result accessors

use std::io;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ups_xml::XmlValue;

use crate::error::UpsError;
use crate::result::UpsResult;

const DIGEST_PATH: [&str; 2] = ["ShipmentConfirmResponse", "ShipmentDigest"];
const ERROR_DESCRIPTION_PATH: [&str; 4] = [
    "ShipmentConfirmResponse",
    "Response",
    "Error",
    "ErrorDescription",
];
const CHARGES_PATH: [&str; 4] = [
    "ShipmentConfirmResponse",
    "ShipmentCharges",
    "TotalCharges",
    "MonetaryValue",
];
const IDENTIFICATION_PATH: [&str; 2] = [
    "ShipmentConfirmResponse",
    "ShipmentIdentificationNumber",
];
const PACKAGE_RESULTS_PATH: [&str; 3] = [
    "ShipmentAcceptResponse",
    "ShipmentResults",
    "PackageResults",
];

/// Extract the shipment digest from a confirm response.
///
/// # Errors
///
/// A response without a digest is a carrier rejection;
/// [`UpsError::CarrierRejected`] carries the response's error description
/// verbatim.
pub fn shipment_digest(confirm: &UpsResult) -> Result<String, UpsError> {
    let document = confirm.parse()?;
    if let Some(digest) = document.path(&DIGEST_PATH).and_then(XmlValue::as_text) {
        return Ok(digest.to_string());
    }

    let description = document
        .path(&ERROR_DESCRIPTION_PATH)
        .and_then(XmlValue::as_text)
        .unwrap_or("carrier response carried no error description");
    Err(UpsError::CarrierRejected(description.to_string()))
}

/// Label and tracking data for one package in an accepted shipment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageResult {
    /// Base64-encoded label image
    pub label: String,
    /// Declared label image format, or the requested file format when the
    /// response does not declare one
    pub label_format: String,
    pub tracking_number: String,
}

impl PackageResult {
    /// The label image decoded to raw bytes
    pub fn label_bytes(&self) -> Result<Vec<u8>, UpsError> {
        // The carrier wraps the image data; strip whitespace before decoding.
        let compact: String = self.label.split_whitespace().collect();
        BASE64.decode(compact).map_err(|e| UpsError::InvalidValue {
            field: "PackageResults/LabelImage/GraphicImage".to_string(),
            reason: e.to_string(),
        })
    }
}

/// One completed confirm/accept exchange.
///
/// Constructed by the client only after both protocol steps succeeded; a
/// shipment is never observable with a confirmed-but-unaccepted state. The
/// accept response is authoritative for per-package tracking numbers and
/// labels; the confirm response carries the overall cost and the shipment
/// identification number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    confirm: UpsResult,
    accept: UpsResult,
    file_format: String,
}

impl Shipment {
    pub fn new(confirm: UpsResult, accept: UpsResult, file_format: impl Into<String>) -> Self {
        Self {
            confirm,
            accept,
            file_format: file_format.into(),
        }
    }

    pub fn confirm_result(&self) -> &UpsResult {
        &self.confirm
    }

    pub fn accept_result(&self) -> &UpsResult {
        &self.accept
    }

    /// Total shipment charges from the confirm response
    pub fn cost(&self) -> Result<f64, UpsError> {
        let document = self.confirm.parse()?;
        let value = document
            .path(&CHARGES_PATH)
            .and_then(XmlValue::as_text)
            .ok_or_else(|| UpsError::missing(&CHARGES_PATH))?;
        value.parse::<f64>().map_err(|e| UpsError::InvalidValue {
            field: "TotalCharges/MonetaryValue".to_string(),
            reason: e.to_string(),
        })
    }

    /// The shipment-level identification number from the confirm response,
    /// independent of the per-package tracking numbers
    pub fn tracking_number(&self) -> Result<String, UpsError> {
        let document = self.confirm.parse()?;
        let number = document
            .path(&IDENTIFICATION_PATH)
            .and_then(XmlValue::as_text)
            .ok_or_else(|| UpsError::missing(&IDENTIFICATION_PATH))?;
        Ok(number.to_string())
    }

    /// Per-package results from the accept response, in response order.
    ///
    /// A single-package response arrives collapsed to a bare record and is
    /// normalized to a one-element list. Recomputed on every call.
    pub fn package_results(&self) -> Result<Vec<PackageResult>, UpsError> {
        let document = self.accept.parse()?;
        let results = document
            .path(&PACKAGE_RESULTS_PATH)
            .ok_or_else(|| UpsError::missing(&PACKAGE_RESULTS_PATH))?;
        results
            .as_list()
            .into_iter()
            .map(|entry| self.package_result(entry))
            .collect()
    }

    fn package_result(&self, entry: &XmlValue) -> Result<PackageResult, UpsError> {
        let label = entry
            .path(&["LabelImage", "GraphicImage"])
            .and_then(XmlValue::as_text)
            .ok_or_else(|| {
                UpsError::missing(&["PackageResults", "LabelImage", "GraphicImage"])
            })?;
        let label_format = entry
            .path(&["LabelImage", "LabelImageFormat", "Code"])
            .and_then(XmlValue::as_text)
            .unwrap_or(&self.file_format);
        let tracking_number = entry
            .path(&["TrackingNumber"])
            .and_then(XmlValue::as_text)
            .ok_or_else(|| UpsError::missing(&["PackageResults", "TrackingNumber"]))?;

        Ok(PackageResult {
            label: label.to_string(),
            label_format: label_format.to_string(),
            tracking_number: tracking_number.to_string(),
        })
    }

    /// Every package's tracking number, in response order
    pub fn tracking_numbers(&self) -> Result<Vec<String>, UpsError> {
        Ok(self
            .package_results()?
            .into_iter()
            .map(|package| package.tracking_number)
            .collect())
    }

    /// The first package's label image decoded to raw bytes
    pub fn label(&self) -> Result<Vec<u8>, UpsError> {
        let packages = self.package_results()?;
        let first = packages
            .first()
            .ok_or_else(|| UpsError::missing(&PACKAGE_RESULTS_PATH))?;
        first.label_bytes()
    }

    /// Write the first package's label bytes to a caller-supplied sink.
    ///
    /// Flushing and closing stay with the caller.
    pub fn save_label<W: io::Write>(&self, sink: &mut W) -> Result<(), UpsError> {
        let bytes = self.label()?;
        sink.write_all(&bytes)?;
        Ok(())
    }
}
