//! Document-to-tree decoding

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::XmlError;
use crate::value::{XmlMap, XmlValue};

/// Decode an XML document into a tree.
///
/// The root map holds one entry per root element. Elements with only text
/// become [`XmlValue::Text`]; elements with children become [`XmlValue::Map`];
/// repeated sibling names fold into [`XmlValue::List`], mirroring the
/// carrier's singular-or-list collapse. Attributes are not preserved — the
/// carrier's response payloads carry their data in elements.
pub fn decode(xml: &str) -> Result<XmlMap, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // One frame per open element: name, child map, accumulated text. The
    // bottom frame collects the root elements.
    let mut stack: Vec<(String, XmlMap, String)> =
        vec![(String::new(), XmlMap::new(), String::new())];

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(start) => {
                let name = element_name(start.name().as_ref());
                stack.push((name, XmlMap::new(), String::new()));
            }
            Event::Empty(start) => {
                let name = element_name(start.name().as_ref());
                if let Some((_, children, _)) = stack.last_mut() {
                    children.push(name, XmlValue::Text(String::new()));
                }
            }
            Event::Text(content) => {
                let unescaped = content.unescape().map_err(parse_error)?;
                if let Some((_, _, text)) = stack.last_mut() {
                    text.push_str(&unescaped);
                }
            }
            Event::CData(content) => {
                let raw = String::from_utf8_lossy(&content.into_inner()).into_owned();
                if let Some((_, _, text)) = stack.last_mut() {
                    text.push_str(&raw);
                }
            }
            Event::End(_) => {
                let (name, children, text) = match stack.pop() {
                    Some(frame) if !stack.is_empty() => frame,
                    _ => return Err(XmlError::Parse("unbalanced end tag".to_string())),
                };
                // Elements with children are maps; any stray text is dropped
                // (the carrier does not produce mixed content).
                let value = if children.is_empty() {
                    XmlValue::Text(text)
                } else {
                    XmlValue::Map(children)
                };
                if let Some((_, parent, _)) = stack.last_mut() {
                    parent.push(name, value);
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(XmlError::Parse("unexpected end of document".to_string()));
    }
    let (_, root, _) = stack.remove(0);
    if root.is_empty() {
        return Err(XmlError::Parse("document has no root element".to_string()));
    }
    Ok(root)
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn parse_error(error: impl std::fmt::Display) -> XmlError {
    XmlError::Parse(error.to_string())
}
