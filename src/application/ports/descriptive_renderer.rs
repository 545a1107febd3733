#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use super::RepositoryWork;
use crate::domain::entities::WorkFile;
use crate::infrastructure::xml::{XmlDocument, XmlError};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Descriptive rendering failed: {0}")]
    Failed(String),

    #[error("Rendered document is not valid XML: {0}")]
    Xml(#[from] XmlError),
}

/// Port producing the work-level descriptive (MODS) document
#[cfg_attr(test, automock)]
pub trait WorkDescriptiveRenderer: Send + Sync {
    /// `Ok(None)` when the work has nothing to describe
    fn render_work(&self, work: &dyn RepositoryWork) -> Result<Option<XmlDocument>, RenderError>;
}

/// Port producing per-file descriptive documents
#[cfg_attr(test, automock)]
pub trait FileDescriptiveRenderer: Send + Sync {
    /// `Ok(None)` when the file has no descriptive metadata
    fn render_file(&self, file: &WorkFile) -> Result<Option<XmlDocument>, RenderError>;
}
