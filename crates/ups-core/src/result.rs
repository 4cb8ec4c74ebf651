//! Raw response wrapper

use ups_xml::{decode, XmlMap};

use crate::error::UpsError;

/// One raw carrier response body.
///
/// The body is parsed on every [`UpsResult::parse`] call rather than cached;
/// accessors stay pure functions of the stored text and malformed responses
/// surface at the access site, not at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsResult {
    raw: String,
}

impl UpsResult {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The response exactly as the carrier sent it
    pub fn xml(&self) -> &str {
        &self.raw
    }

    /// Parse the response into a document tree
    pub fn parse(&self) -> Result<XmlMap, UpsError> {
        decode(&self.raw).map_err(UpsError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recomputes_per_call() {
        let result = UpsResult::new("<Response><Code>1</Code></Response>");
        let first = result.parse().unwrap();
        let second = result.parse().unwrap();
        assert_eq!(first, second);
        assert_eq!(result.xml(), "<Response><Code>1</Code></Response>");
    }

    #[test]
    fn malformed_body_errors_at_parse_time() {
        let result = UpsResult::new("not xml at all <");
        assert!(matches!(result.parse(), Err(UpsError::Xml(_))));
    }
}
