//! JSON work manifest: a file-backed repository work with pre-rendered
//! descriptive documents

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::application::ports::{
    FileDescriptiveRenderer, RenderError, RepositoryWork, WorkDescriptiveRenderer,
};
use crate::domain::entities::WorkFile;
use crate::infrastructure::xml::XmlDocument;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid work manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// One file entry of a manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestFile {
    #[serde(flatten)]
    pub file: WorkFile,

    /// Per-file descriptive document as an XML string
    #[serde(default)]
    pub descriptive_xml: Option<String>,
}

/// A repository work described in JSON
///
/// ```json
/// {
///   "rights": "CC-BY 4.0",
///   "descriptive_xml": "<mods:mods ...>...</mods:mods>",
///   "files": [{"file_ref": "f1", "mime_type": "application/pdf", "location": "store/f1.pdf"}]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkManifest {
    #[serde(default)]
    pub rights: Option<String>,

    /// Work-level descriptive document as an XML string
    #[serde(default)]
    pub descriptive_xml: Option<String>,

    #[serde(default)]
    pub files: Vec<ManifestFile>,
}

impl WorkManifest {
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl RepositoryWork for WorkManifest {
    fn files(&self) -> Vec<WorkFile> {
        self.files.iter().map(|entry| entry.file.clone()).collect()
    }

    fn rights(&self) -> Option<String> {
        self.rights.clone()
    }
}

/// Renderer serving documents parsed once from a manifest
#[derive(Debug, Clone, Default)]
pub struct StaticRenderer {
    work: Option<XmlDocument>,
    files: HashMap<String, XmlDocument>,
}

impl StaticRenderer {
    pub fn from_manifest(manifest: &WorkManifest) -> Result<Self, RenderError> {
        let work = parse_optional(manifest.descriptive_xml.as_deref())?;

        let mut files = HashMap::new();
        for entry in &manifest.files {
            if let Some(document) = parse_optional(entry.descriptive_xml.as_deref())? {
                files.insert(entry.file.file_ref.clone(), document);
            }
        }

        debug!(
            "Loaded {} per-file descriptive documents from manifest",
            files.len()
        );
        Ok(Self { work, files })
    }
}

fn parse_optional(xml: Option<&str>) -> Result<Option<XmlDocument>, RenderError> {
    match xml.filter(|x| !x.trim().is_empty()) {
        Some(xml) => Ok(Some(XmlDocument::parse(xml)?)),
        None => Ok(None),
    }
}

impl WorkDescriptiveRenderer for StaticRenderer {
    fn render_work(&self, _work: &dyn RepositoryWork) -> Result<Option<XmlDocument>, RenderError> {
        Ok(self.work.clone())
    }
}

impl FileDescriptiveRenderer for StaticRenderer {
    fn render_file(&self, file: &WorkFile) -> Result<Option<XmlDocument>, RenderError> {
        Ok(self.files.get(&file.file_ref).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "rights": "All rights reserved",
        "descriptive_xml": "<mods:mods xmlns:mods=\"http://www.loc.gov/mods/v3\"><mods:titleInfo><mods:title>T</mods:title></mods:titleInfo></mods:mods>",
        "files": [
            {"file_ref": "f1", "mime_type": "application/pdf", "location": "store/f1.pdf",
             "descriptive_xml": "<ora:file xmlns:ora=\"http://ora.example/ns\">f1</ora:file>"},
            {"file_ref": "f2", "location": "https://ora.example/f2"}
        ]
    }"#;

    #[test]
    fn test_manifest_is_a_repository_work() {
        let manifest = WorkManifest::from_json_str(MANIFEST).unwrap();
        let files = manifest.files();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].mime_type.as_deref(), Some("application/pdf"));
        assert!(files[1].mime_type.is_none());
        assert_eq!(manifest.rights().as_deref(), Some("All rights reserved"));
    }

    #[test]
    fn test_static_renderer_serves_parsed_documents() {
        let manifest = WorkManifest::from_json_str(MANIFEST).unwrap();
        let renderer = StaticRenderer::from_manifest(&manifest).unwrap();

        let work = renderer.render_work(&manifest).unwrap().unwrap();
        assert_eq!(work.root().name(), "mods:mods");

        let files = manifest.files();
        assert!(renderer.render_file(&files[0]).unwrap().is_some());
        assert!(renderer.render_file(&files[1]).unwrap().is_none());
    }

    #[test]
    fn test_invalid_xml_is_a_render_error() {
        let manifest = WorkManifest {
            descriptive_xml: Some("<mods:mods>".to_string()),
            ..WorkManifest::default()
        };
        let err = StaticRenderer::from_manifest(&manifest).unwrap_err();
        assert!(matches!(err, RenderError::Xml(_)));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(
            WorkManifest::from_json_str("{\"files\": 3}"),
            Err(ManifestError::Json(_))
        ));
        assert!(matches!(
            WorkManifest::from_file("/definitely/missing.json"),
            Err(ManifestError::Io(_))
        ));
    }
}
