//! Error types for XML conversion

use thiserror::Error;

/// Errors that can occur while converting between documents and trees
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum XmlError {
    #[error("XML parse error: {0}")]
    Parse(String),

    #[error("XML write error: {0}")]
    Write(String),
}
