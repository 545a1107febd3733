//! Per-file metadata

use serde::Serialize;

use super::map_fields;
use super::tables::{FILE_FIELDS, FILE_SET_EXTRA_PERMITTED};
use crate::config::Config;
use crate::domain::entities::Attributes;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::Record;

/// Flat attributes mapped from one file's metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedFileMetadata {
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dmd_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub attributes: Attributes,
}

pub(super) fn map_file_fields(metadata: &Record<'_>) -> Result<Attributes, DomainError> {
    map_fields(metadata, FILE_FIELDS)
}

/// Whether a file-set model accepts `key`
pub fn is_permitted_file_set_attribute(key: &str) -> bool {
    FILE_FIELDS.iter().any(|(_, target)| *target == key) || FILE_SET_EXTRA_PERMITTED.contains(&key)
}

/// File attributes ready to be applied to a file set
///
/// `id` is never applied. With `permitted_only` set, anything the file-set
/// model does not accept is dropped as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FileSetAttributes(Attributes);

impl FileSetAttributes {
    pub fn from_mapped(mapped: &Attributes, config: &Config) -> Self {
        let mut attributes = mapped.clone();
        attributes.remove("id");
        if config.permitted_only {
            attributes.retain_fields(is_permitted_file_set_attribute);
        }
        Self(attributes)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.0
    }

    pub fn into_inner(self) -> Attributes {
        self.0
    }
}
