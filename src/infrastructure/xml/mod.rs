//! Owned XML document model with quick-xml backed parsing and writing

mod document;
mod reader;
mod writer;

use thiserror::Error;

pub use document::{Element, Node, XmlDocument};

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("XML parse error: {0}")]
    Parse(String),

    #[error("XML write error: {0}")]
    Write(String),

    #[error("Unbalanced XML element nesting")]
    Unbalanced,

    #[error("XML document has no root element")]
    MissingRoot,
}
