use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DepositDocument;

/// One content file of a deposit with its metadata sub-mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadataRecord {
    #[serde(rename = "fileid")]
    pub file_id: String,

    #[serde(rename = "dmdid", default, skip_serializing_if = "Option::is_none")]
    pub dmd_id: Option<String>,

    #[serde(rename = "filepath", default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl FileMetadataRecord {
    pub fn new(file_id: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            file_id: file_id.into(),
            dmd_id: None,
            file_path: None,
            metadata,
        }
    }

    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// Metadata wrapped as a deposit document so the same accessors apply
    pub fn metadata_document(&self) -> DepositDocument {
        DepositDocument::new(self.metadata.clone())
    }
}
