use serde::{Deserialize, Serialize};

use crate::application::crosswalk::{FileSetAttributes, MappedFileMetadata};
use crate::config::Config;
use crate::domain::entities::AttributeTree;
use crate::domain::value_objects::{DepositDocument, FileMetadataRecord};

/// Request to map one deposit
#[derive(Debug, Clone, Deserialize)]
pub struct MapDepositRequest {
    /// Declared work model; generic when absent
    #[serde(default)]
    pub model: Option<String>,
    pub metadata: DepositDocument,
    #[serde(default)]
    pub files: Vec<FileMetadataRecord>,
}

/// Mapped attributes for one file
#[derive(Debug, Clone, Serialize)]
pub struct MappedFileDto {
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dmd_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub attributes: FileSetAttributes,
}

impl MappedFileDto {
    pub fn from_mapped(mapped: MappedFileMetadata, config: &Config) -> Self {
        let attributes = FileSetAttributes::from_mapped(&mapped.attributes, config);
        Self {
            file_id: mapped.file_id,
            dmd_id: mapped.dmd_id,
            file_path: mapped.file_path,
            attributes,
        }
    }
}

/// Response for a mapped deposit
#[derive(Debug, Clone, Serialize)]
pub struct MapDepositResponse {
    pub model: String,
    pub attributes: AttributeTree,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<MappedFileDto>,
}
