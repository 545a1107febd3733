use serde::{Deserialize, Serialize};

/// A content file attached to a repository work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkFile {
    /// Reference the per-file renderer resolves the file by
    pub file_ref: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Public location: a URL or a bare storage path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl WorkFile {
    pub fn new(file_ref: impl Into<String>) -> Self {
        Self {
            file_ref: file_ref.into(),
            mime_type: None,
            location: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// MIME type, treating a blank value as unknown
    pub fn known_mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// Location, treating a blank value as unresolvable
    pub fn known_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.trim().is_empty())
    }
}
