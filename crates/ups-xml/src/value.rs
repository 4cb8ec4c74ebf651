//! Tagged XML value tree
//!
//! Carrier documents are deeply nested and mostly conditional, so requests are
//! assembled as a dynamic tree of text / list / map nodes rather than as fixed
//! structs. Map entries keep insertion order; the carrier is sensitive to
//! element order within a parent.

/// One node of an XML document tree
#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    /// Element text content
    Text(String),
    /// Repeated sibling elements sharing one name
    List(Vec<XmlValue>),
    /// Child elements, in document order
    Map(XmlMap),
}

impl XmlValue {
    /// Text content, if this node is a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Child map, if this node has child elements
    pub fn as_map(&self) -> Option<&XmlMap> {
        match self {
            XmlValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable child map, if this node has child elements
    pub fn as_map_mut(&mut self) -> Option<&mut XmlMap> {
        match self {
            XmlValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Normalize the singular-or-list wire collapse.
    ///
    /// A list yields its items; any other node yields itself as a one-element
    /// list. Applied at every response boundary where the carrier collapses a
    /// one-element list into a bare value.
    pub fn as_list(&self) -> Vec<&XmlValue> {
        match self {
            XmlValue::List(items) => items.iter().collect(),
            other => vec![other],
        }
    }

    /// Walk a path of element names through nested maps
    pub fn path(&self, path: &[&str]) -> Option<&XmlValue> {
        let mut current = self;
        for segment in path {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<&str> for XmlValue {
    fn from(text: &str) -> Self {
        XmlValue::Text(text.to_string())
    }
}

impl From<String> for XmlValue {
    fn from(text: String) -> Self {
        XmlValue::Text(text)
    }
}

impl From<XmlMap> for XmlValue {
    fn from(map: XmlMap) -> Self {
        XmlValue::Map(map)
    }
}

impl From<Vec<XmlValue>> for XmlValue {
    fn from(items: Vec<XmlValue>) -> Self {
        XmlValue::List(items)
    }
}

/// An ordered set of named child nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlMap {
    entries: Vec<(String, XmlValue)>,
}

impl XmlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for assembling nested literals
    pub fn with(mut self, key: impl Into<String>, value: impl Into<XmlValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert a value, replacing any existing entry with the same name
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<XmlValue>) {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *existing = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Insert a value, folding a repeated name into a list.
    ///
    /// This is the decoder's insert: the second occurrence of a name converts
    /// the entry into a list holding both values, and further occurrences
    /// append to it.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<XmlValue>) {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            match existing {
                XmlValue::List(items) => items.push(value),
                _ => {
                    let first = std::mem::replace(existing, XmlValue::List(Vec::new()));
                    if let XmlValue::List(items) = existing {
                        items.push(first);
                        items.push(value);
                    }
                }
            }
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut XmlValue> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[(String, XmlValue)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk a path of element names starting at this map
    pub fn path(&self, path: &[&str]) -> Option<&XmlValue> {
        let (first, rest) = path.split_first()?;
        self.get(first)?.path(rest)
    }
}
