//! Typed configuration model.
//!
//! The configuration is a typed struct for known fields, with unknown
//! override keys collected into an `extra` bucket so user configuration
//! files can carry forward-compatible sections without breaking the load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder author name shipped with the defaults.
pub const DEFAULT_AUTHOR_NAME: &str = "Your Name";

/// Placeholder author email shipped with the defaults.
pub const DEFAULT_AUTHOR_EMAIL: &str = "your.email@example.com";

/// Identifier of the manifest file type, always generated for a project.
pub const MANIFEST_FILE_ID: &str = "pyproject";

/// Author defaults used when the CLI does not supply a name/email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl AuthorConfig {
    /// True when the configured name is empty or still the shipped placeholder.
    pub fn name_is_placeholder(&self) -> bool {
        self.name.is_empty() || self.name == DEFAULT_AUTHOR_NAME
    }

    /// True when the configured email is empty or still the shipped placeholder.
    pub fn email_is_placeholder(&self) -> bool {
        self.email.is_empty() || self.email == DEFAULT_AUTHOR_EMAIL
    }
}

/// Development dependency specifiers, one list per dependency tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevDependencies {
    #[serde(default)]
    pub poetry: Vec<String>,
    #[serde(default)]
    pub uv: Vec<String>,
}

/// Definition of a single project template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateDef {
    /// Human-readable template description.
    #[serde(default)]
    pub description: String,
    /// Runtime dependency specifiers.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Development dependency specifiers per tool.
    #[serde(default)]
    pub dev_dependencies: DevDependencies,
    /// Ordered file-type identifiers to generate.
    #[serde(default)]
    pub files: Vec<String>,
}

impl TemplateDef {
    /// File list with the manifest identifier appended exactly once.
    ///
    /// Appending is idempotent: a template that already lists the manifest
    /// keeps its list unchanged.
    pub fn files_with_manifest(&self) -> Vec<String> {
        let mut files = self.files.clone();
        if !files.iter().any(|f| f == MANIFEST_FILE_ID) {
            files.push(MANIFEST_FILE_ID.to_string());
        }
        files
    }

    /// Whether the template's file list names the given identifier.
    pub fn includes(&self, id: &str) -> bool {
        self.files.iter().any(|f| f == id)
    }
}

fn default_python_version() -> String {
    ">=3.11".to_string()
}

/// Top-level typed configuration.
///
/// Known regions (`author`, `templates`, `python_version`) are typed;
/// anything else from a user override document lands in `extra` and stays
/// reachable through [`crate::Config::get`] dotted-path lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigData {
    #[serde(default)]
    pub author: AuthorConfig,
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateDef>,
    #[serde(default = "default_python_version")]
    pub python_version: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_with_manifest_appends_once() {
        let def = TemplateDef {
            files: vec!["gitignore".to_string(), "readme".to_string()],
            ..Default::default()
        };
        let files = def.files_with_manifest();
        assert_eq!(files.last().map(String::as_str), Some("pyproject"));

        // Appending again must not grow the list.
        let again = TemplateDef {
            files: files.clone(),
            ..Default::default()
        }
        .files_with_manifest();
        assert_eq!(again, files);
    }

    #[test]
    fn test_author_placeholders() {
        let author = AuthorConfig {
            name: DEFAULT_AUTHOR_NAME.to_string(),
            email: "jane@example.com".to_string(),
        };
        assert!(author.name_is_placeholder());
        assert!(!author.email_is_placeholder());
    }
}
