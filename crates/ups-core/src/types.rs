//! UPS data model
//!
//! Shipment inputs as the caller provides them. All types are plain owned
//! data, immutable once handed to a builder, and serde-serializable so
//! callers can keep them in their own configuration.

use serde::{Deserialize, Serialize};

use crate::error::UpsError;

/// A shipper, recipient, or alternate-delivery address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub name: String,

    /// Falls back to `name` in built documents when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention_name: Option<String>,

    pub phone: String,

    #[serde(default)]
    pub email: String,

    pub address1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,

    /// Overrides the recipient company name in built documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// UPS Access Point location identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

impl Address {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address1: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attention_name: None,
            phone: phone.into(),
            email: String::new(),
            address1: address1.into(),
            address2: None,
            city: city.into(),
            state: state.into(),
            country: country.into(),
            postal_code: postal_code.into(),
            company: None,
            location_id: None,
        }
    }

    pub fn with_attention(mut self, attention_name: impl Into<String>) -> Self {
        self.attention_name = Some(attention_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address2(mut self, address2: impl Into<String>) -> Self {
        self.address2 = Some(address2.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_location_id(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    /// The attention name, falling back to the addressee name
    pub fn attention(&self) -> &str {
        self.attention_name.as_deref().unwrap_or(&self.name)
    }
}

/// Package dimensions; the unit defaults to inches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

impl Dimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            unit: "IN".to_string(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

/// One package in a shipment
///
/// Packaging type `02` is a customer-supplied box; weight defaults to pounds.
/// A package without dimensions produces no dimensions block in the confirm
/// document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub packaging_type: String,
    pub weight: f64,
    pub weight_unit: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_confirmation: Option<DeliveryConfirmation>,
}

impl PackageInfo {
    pub fn new(weight: f64) -> Self {
        Self {
            description: None,
            packaging_type: "02".to_string(),
            weight,
            weight_unit: "LBS".to_string(),
            dimensions: None,
            delivery_confirmation: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_packaging_type(mut self, packaging_type: impl Into<String>) -> Self {
        self.packaging_type = packaging_type.into();
        self
    }

    pub fn with_weight_unit(mut self, weight_unit: impl Into<String>) -> Self {
        self.weight_unit = weight_unit.into();
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_delivery_confirmation(mut self, confirmation: DeliveryConfirmation) -> Self {
        self.delivery_confirmation = Some(confirmation);
        self
    }
}

/// A carrier service selection
///
/// Friendly codes resolve through [`service_code`]; anything else passes
/// through to the document verbatim, so new carrier codes work without a
/// library change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingService {
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ShippingService {
    /// A bare string is treated as a service code with no description
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn ground() -> Self {
        ShippingService::new("ground").with_description("Ground")
    }

    /// The carrier code, after friendly-code resolution
    pub fn resolved_code(&self) -> &str {
        service_code(&self.code)
    }
}

impl Default for ShippingService {
    fn default() -> Self {
        ShippingService::ground()
    }
}

/// Resolve a friendly service code to the carrier's numeric code.
///
/// Unrecognized input passes through unchanged.
pub fn service_code(code: &str) -> &str {
    match code {
        "1dayair" => "01",               // Next Day Air
        "2dayair" => "02",               // 2nd Day Air
        "ground" => "03",                // Ground
        "express" => "07",               // Express
        "worldwide_expedited" => "08",   // Expedited
        "standard" => "11",              // UPS Standard
        "3_day_select" => "12",          // 3 Day Select
        "next_day_air_saver" => "13",    // Next Day Air Saver
        "next_day_air_early_am" => "14", // Next Day Air Early AM
        "express_plus" => "54",          // Express Plus
        "2nd_day_air_am" => "59",        // 2nd Day Air A.M.
        "ups_saver" => "65",             // UPS Saver
        "ups_today_standard" => "82",    // UPS Today Standard
        "ups_today_dedicated_courier" => "83", // UPS Today Dedicated Courier
        "ups_today_intercity" => "84",   // UPS Today Intercity
        "ups_today_express" => "85",     // UPS Today Express
        "ups_today_express_saver" => "86", // UPS Today Express Saver
        other => other,
    }
}

/// DCIS signature requirement attached to a package
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryConfirmation {
    NoSignature,
    SignatureRequired,
    AdultSignatureRequired,
    UspsDeliveryConfirmation,
}

impl DeliveryConfirmation {
    /// Look up a confirmation type by its key.
    ///
    /// # Errors
    ///
    /// Returns [`UpsError::UnknownDeliveryConfirmation`] for keys outside the
    /// fixed enumeration.
    pub fn from_key(key: &str) -> Result<Self, UpsError> {
        match key {
            "no_signature" => Ok(DeliveryConfirmation::NoSignature),
            "signature_required" => Ok(DeliveryConfirmation::SignatureRequired),
            "adult_signature_required" => Ok(DeliveryConfirmation::AdultSignatureRequired),
            "usps_delivery_confirmation" => Ok(DeliveryConfirmation::UspsDeliveryConfirmation),
            other => Err(UpsError::UnknownDeliveryConfirmation(other.to_string())),
        }
    }

    /// The carrier's DCIS type code
    pub fn dcis_type(self) -> u8 {
        match self {
            DeliveryConfirmation::NoSignature => 1,
            DeliveryConfirmation::SignatureRequired => 2,
            DeliveryConfirmation::AdultSignatureRequired => 3,
            DeliveryConfirmation::UspsDeliveryConfirmation => 4,
        }
    }
}

/// A shipment reference number
///
/// When `code` is absent the confirm builder assigns the 1-based position of
/// the entry in the reference list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub value: String,
}

impl ReferenceNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            code: None,
            value: value.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            value: value.into(),
        }
    }
}

/// Everything the caller supplies for one shipment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShipmentRequest {
    pub from_addr: Address,
    pub to_addr: Address,
    pub packages: Vec<PackageInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_addr: Option<Address>,

    /// Label print method, e.g. `EPL` or `GIF`
    pub file_format: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_numbers: Vec<ReferenceNumber>,

    pub service: ShippingService,

    #[serde(default)]
    pub description: String,

    /// Shipment-level delivery-confirmation key, resolved through
    /// [`DeliveryConfirmation::from_key`] at build time and applied to every
    /// package that does not carry its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_confirmation: Option<String>,
}

impl ShipmentRequest {
    pub fn new(from_addr: Address, to_addr: Address, packages: Vec<PackageInfo>) -> Self {
        Self {
            from_addr,
            to_addr,
            packages,
            alternate_addr: None,
            file_format: "EPL".to_string(),
            reference_numbers: Vec::new(),
            service: ShippingService::default(),
            description: String::new(),
            delivery_confirmation: None,
        }
    }

    pub fn with_alternate_addr(mut self, alternate_addr: Address) -> Self {
        self.alternate_addr = Some(alternate_addr);
        self
    }

    pub fn with_file_format(mut self, file_format: impl Into<String>) -> Self {
        self.file_format = file_format.into();
        self
    }

    pub fn with_reference_numbers(mut self, reference_numbers: Vec<ReferenceNumber>) -> Self {
        self.reference_numbers = reference_numbers;
        self
    }

    pub fn with_service(mut self, service: ShippingService) -> Self {
        self.service = service;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_delivery_confirmation(mut self, key: impl Into<String>) -> Self {
        self.delivery_confirmation = Some(key.into());
        self
    }

    /// True when shipper and recipient are both US addresses.
    ///
    /// Domestic shipments attach reference numbers to the package blocks;
    /// international shipments attach them to the shipment block.
    pub fn is_domestic(&self) -> bool {
        self.from_addr.country == "US" && self.to_addr.country == "US"
    }
}
