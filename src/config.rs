use std::path::Path;

use serde::Deserialize;

/// Crosswalk settings
///
/// Loaded from `CROSSWALK_*` environment variables or a TOML file; every
/// field has a default so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the generating agent written to the METS header
    pub agent_name: String,
    /// Prefix that turns a bare storage path into a local file URI
    pub file_uri_prefix: String,
    /// Restrict file-set attributes to the permitted list
    pub permitted_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent_name: "Deposit Crosswalk".to_string(),
            file_uri_prefix: "file:///".to_string(),
            permitted_only: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            agent_name: std::env::var("CROSSWALK_AGENT_NAME").unwrap_or(defaults.agent_name),
            file_uri_prefix: std::env::var("CROSSWALK_FILE_URI_PREFIX")
                .unwrap_or(defaults.file_uri_prefix),
            permitted_only: std::env::var("CROSSWALK_PERMITTED_ONLY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.permitted_only),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid crosswalk config: {}", e))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {:?}: {}", path.as_ref(), e))?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.agent_name.trim().is_empty() {
            return Err("CROSSWALK_AGENT_NAME cannot be empty".to_string());
        }

        if !self.file_uri_prefix.contains(':') {
            return Err(
                "CROSSWALK_FILE_URI_PREFIX must include a URI scheme (e.g. file:///)".to_string(),
            );
        }

        Ok(())
    }
}
