//! Tree-to-document encoding

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::XmlError;
use crate::value::{XmlMap, XmlValue};

/// Encode a document tree into an XML string.
///
/// The output carries an XML declaration followed by one element per
/// top-level entry (carrier documents have exactly one root). Text content is
/// escaped; element order follows the tree's insertion order.
pub fn encode(document: &XmlMap) -> Result<String, XmlError> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
        .map_err(write_error)?;
    for (name, value) in document.entries() {
        write_value(&mut writer, name, value)?;
    }
    String::from_utf8(writer.into_inner()).map_err(write_error)
}

fn write_value(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &XmlValue,
) -> Result<(), XmlError> {
    match value {
        XmlValue::Text(text) => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(write_error)?;
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_error)?;
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(write_error)?;
        }
        // A list repeats the parent-assigned name once per item.
        XmlValue::List(items) => {
            for item in items {
                write_value(writer, name, item)?;
            }
        }
        XmlValue::Map(map) => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(write_error)?;
            for (child_name, child) in map.entries() {
                write_value(writer, child_name, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(write_error)?;
        }
    }
    Ok(())
}

fn write_error(error: impl std::fmt::Display) -> XmlError {
    XmlError::Write(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_nested_maps() {
        let document = XmlMap::new().with(
            "AccessRequest",
            XmlMap::new()
                .with("AccessLicenseNumber", "1A2B3C")
                .with("UserId", "shipper")
                .with("Password", "secret"),
        );
        let xml = encode(&document).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\
             <AccessRequest>\
             <AccessLicenseNumber>1A2B3C</AccessLicenseNumber>\
             <UserId>shipper</UserId>\
             <Password>secret</Password>\
             </AccessRequest>"
        );
    }

    #[test]
    fn encodes_lists_as_repeated_elements() {
        let document = XmlMap::new().with(
            "Shipment",
            XmlMap::new().with(
                "Package",
                vec![
                    XmlValue::Map(XmlMap::new().with("Description", "books")),
                    XmlValue::Map(XmlMap::new().with("Description", "tools")),
                ],
            ),
        );
        let xml = encode(&document).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\
             <Shipment>\
             <Package><Description>books</Description></Package>\
             <Package><Description>tools</Description></Package>\
             </Shipment>"
        );
    }

    #[test]
    fn escapes_text_content() {
        let document = XmlMap::new().with("Description", "nuts & bolts <1cm>");
        let xml = encode(&document).unwrap();
        assert!(xml.contains("nuts &amp; bolts &lt;1cm&gt;"));
    }

    #[test]
    fn empty_map_becomes_empty_element() {
        let document = XmlMap::new().with("PackageServiceOptions", XmlMap::new());
        let xml = encode(&document).unwrap();
        assert!(xml.contains("<PackageServiceOptions></PackageServiceOptions>"));
    }
}
