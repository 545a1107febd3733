//! Error types for the crosswalk and the METS assembler

use thiserror::Error;

use crate::application::ports::RenderError;
use crate::domain::errors::DomainError;
use crate::infrastructure::xml::XmlError;

/// Error type for attribute crosswalk operations
#[derive(Debug, Error)]
pub enum CrosswalkError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Error type for METS assembly
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
