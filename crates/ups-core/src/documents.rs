//! Request document builders
//!
//! Pure functions from the data model to [`ups_xml`] trees. The transport
//! layer encodes the trees and prepends the access-request document; nothing
//! here performs I/O, so every carrier-specific branch is testable offline.

use ups_xml::{XmlMap, XmlValue};

use crate::error::UpsError;
use crate::types::{Address, DeliveryConfirmation, PackageInfo, ShipmentRequest};

/// Build the credentials document sent ahead of every operation request
pub fn access_request(license_number: &str, user_id: &str, password: &str) -> XmlMap {
    XmlMap::new().with(
        "AccessRequest",
        XmlMap::new()
            .with("AccessLicenseNumber", license_number)
            .with("UserId", user_id)
            .with("Password", password),
    )
}

/// Build a track request for one tracking number.
///
/// The number is carrier-assigned and not validated for format; the carrier
/// answers malformed numbers with its own error response.
pub fn track_request(tracking_number: &str) -> XmlMap {
    XmlMap::new().with(
        "TrackRequest",
        XmlMap::new()
            .with(
                "Request",
                XmlMap::new()
                    .with(
                        "TransactionReference",
                        XmlMap::new()
                            .with("CustomerContext", "Get tracking status")
                            .with("XpciVersion", "1.0"),
                    )
                    .with("RequestAction", "Track")
                    .with("RequestOption", "activity"),
            )
            .with("TrackingNumber", tracking_number),
    )
}

/// Build the shipment-confirm request document.
///
/// `shipper_number` is the billing account from the connection configuration;
/// it appears both in the shipper block and in the bill-shipper payment block.
///
/// # Errors
///
/// Returns [`UpsError::UnknownDeliveryConfirmation`] when the shipment-level
/// delivery-confirmation key is outside the fixed enumeration.
pub fn confirm_request(
    request: &ShipmentRequest,
    shipper_number: &str,
) -> Result<XmlMap, UpsError> {
    let shipment_confirmation = request
        .delivery_confirmation
        .as_deref()
        .map(DeliveryConfirmation::from_key)
        .transpose()?;

    let packages: Vec<XmlValue> = request
        .packages
        .iter()
        .map(|package| XmlValue::Map(package_block(package, shipment_confirmation)))
        .collect();

    let mut shipper = XmlMap::new()
        .with("Name", request.from_addr.name.as_str())
        .with("AttentionName", request.from_addr.attention())
        .with("PhoneNumber", request.from_addr.phone.as_str())
        .with("ShipperNumber", shipper_number)
        .with("EMailAddress", request.from_addr.email.as_str());
    shipper.set("Address", address_block(&request.from_addr));

    let mut ship_to = XmlMap::new()
        .with(
            "CompanyName",
            request
                .to_addr
                .company
                .as_deref()
                .unwrap_or(&request.to_addr.name),
        )
        .with("AttentionName", request.to_addr.attention())
        .with("PhoneNumber", request.to_addr.phone.as_str())
        .with("EMailAddress", request.to_addr.email.as_str());
    ship_to.set("Address", address_block(&request.to_addr));
    if let Some(location_id) = &request.to_addr.location_id {
        ship_to.set("LocationID", location_id.as_str());
    }

    let mut service = XmlMap::new().with("Code", request.service.resolved_code());
    if let Some(description) = &request.service.description {
        service.set("Description", description.as_str());
    }

    let mut shipment = XmlMap::new()
        .with("Shipper", shipper)
        .with("ShipTo", ship_to)
        .with("Service", service)
        .with(
            "PaymentInformation",
            XmlMap::new().with(
                "Prepaid",
                XmlMap::new().with(
                    "BillShipper",
                    XmlMap::new().with("AccountNumber", shipper_number),
                ),
            ),
        )
        .with("Package", packages);

    if let Some(alternate) = &request.alternate_addr {
        shipment.set(
            "AlternateDeliveryAddress",
            XmlMap::new()
                .with("Name", alternate.name.as_str())
                .with("AttentionName", alternate.attention())
                .with("Address", address_block(alternate)),
        );
    }

    // An Access Point delivery also flags the shipment indication type.
    if request.to_addr.location_id.is_some() {
        shipment.set("ShipmentIndicationType", XmlMap::new().with("Code", "01"));
    }

    apply_reference_numbers(request, &mut shipment);

    Ok(XmlMap::new().with(
        "ShipmentConfirmRequest",
        XmlMap::new()
            .with(
                "Request",
                XmlMap::new()
                    .with(
                        "TransactionReference",
                        XmlMap::new()
                            .with("CustomerContext", "get new shipment")
                            .with("XpciVersion", "1.0001"),
                    )
                    .with("RequestAction", "ShipConfirm")
                    .with("RequestOption", "nonvalidate"),
            )
            .with("Shipment", shipment)
            .with("LabelSpecification", label_specification(&request.file_format)),
    ))
}

/// Build the shipment-accept request embedding the confirm step's digest
pub fn accept_request(digest: &str) -> XmlMap {
    XmlMap::new().with(
        "ShipmentAcceptRequest",
        XmlMap::new()
            .with(
                "Request",
                XmlMap::new()
                    .with(
                        "TransactionReference",
                        XmlMap::new()
                            .with("CustomerContext", "shipment accept reference")
                            .with("XpciVersion", "1.0001"),
                    )
                    .with("RequestAction", "ShipAccept"),
            )
            .with("ShipmentDigest", digest),
    )
}

fn address_block(address: &Address) -> XmlMap {
    let mut block = XmlMap::new();
    block.set("AddressLine1", address.address1.as_str());
    if let Some(address2) = &address.address2 {
        block.set("AddressLine2", address2.as_str());
    }
    block.set("City", address.city.as_str());
    block.set("StateProvinceCode", address.state.as_str());
    block.set("CountryCode", address.country.as_str());
    block.set("PostalCode", address.postal_code.as_str());
    block
}

fn package_block(
    package: &PackageInfo,
    shipment_confirmation: Option<DeliveryConfirmation>,
) -> XmlMap {
    let mut block = XmlMap::new();
    if let Some(description) = &package.description {
        block.set("Description", description.as_str());
    }
    block.set(
        "PackagingType",
        XmlMap::new().with("Code", package.packaging_type.as_str()),
    );
    block.set(
        "PackageWeight",
        XmlMap::new()
            .with(
                "UnitOfMeasurement",
                XmlMap::new().with("Code", package.weight_unit.as_str()),
            )
            .with("Weight", format_number(package.weight)),
    );
    if let Some(dimensions) = &package.dimensions {
        block.set(
            "Dimensions",
            XmlMap::new()
                .with(
                    "UnitOfMeasurement",
                    XmlMap::new().with("Code", dimensions.unit.as_str()),
                )
                .with("Length", format_number(dimensions.length))
                .with("Width", format_number(dimensions.width))
                .with("Height", format_number(dimensions.height)),
        );
    }

    // The carrier wants the options element even when no option is set.
    let mut service_options = XmlMap::new();
    if let Some(confirmation) = package.delivery_confirmation.or(shipment_confirmation) {
        service_options.set(
            "DeliveryConfirmation",
            XmlMap::new().with("DCISType", confirmation.dcis_type().to_string()),
        );
    }
    block.set("PackageServiceOptions", service_options);
    block
}

/// Attach reference numbers per the carrier's domestic/international split.
///
/// US-to-US shipments carry references on each package block; any other
/// country pair carries the shipment description and the references on the
/// shipment block. The split is a documented carrier convention.
fn apply_reference_numbers(request: &ShipmentRequest, shipment: &mut XmlMap) {
    if request.reference_numbers.is_empty() {
        return;
    }

    let references: Vec<XmlValue> = request
        .reference_numbers
        .iter()
        .enumerate()
        .map(|(index, reference)| {
            let code = reference
                .code
                .clone()
                .unwrap_or_else(|| (index + 1).to_string());
            XmlValue::Map(
                XmlMap::new()
                    .with("Code", code)
                    .with("Value", reference.value.as_str()),
            )
        })
        .collect();

    if request.is_domestic() {
        if let Some(XmlValue::List(packages)) = shipment.get_mut("Package") {
            for package in packages.iter_mut() {
                if let Some(block) = package.as_map_mut() {
                    block.set("ReferenceNumber", references.clone());
                }
            }
        }
    } else {
        shipment.set("Description", request.description.as_str());
        shipment.set("ReferenceNumber", references);
    }
}

fn label_specification(file_format: &str) -> XmlMap {
    XmlMap::new()
        .with(
            "LabelPrintMethod",
            XmlMap::new().with("Code", file_format),
        )
        .with(
            "LabelStockSize",
            XmlMap::new().with("Width", "6").with("Height", "4"),
        )
        .with("HTTPUserAgent", "Mozilla/4.5")
        .with("LabelImageFormat", XmlMap::new().with("Code", "GIF"))
}

/// Format a numeric field the way the carrier expects: no trailing `.0` on
/// whole numbers, decimals otherwise.
fn format_number(value: f64) -> String {
    value.to_string()
}
