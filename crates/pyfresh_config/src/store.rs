//! Configuration loading and lookup.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, warn};

use crate::defaults::DEFAULT_CONFIG_YAML;
use crate::error::{ConfigError, ConfigResult};
use crate::merge::deep_merge;
use crate::model::{AuthorConfig, ConfigData, TemplateDef};

/// Environment variable overriding the configured author name.
pub const ENV_AUTHOR_NAME: &str = "PYFRESH_AUTHOR_NAME";

/// Environment variable overriding the configured author email.
pub const ENV_AUTHOR_EMAIL: &str = "PYFRESH_AUTHOR_EMAIL";

/// Author overrides taken from the process environment.
///
/// Factored out of [`Config::load`] so tests can inject values without
/// mutating the real environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub author_name: Option<String>,
    pub author_email: Option<String>,
}

impl EnvOverrides {
    /// Read overrides from the process environment.
    pub fn from_process_env() -> Self {
        Self {
            author_name: env::var(ENV_AUTHOR_NAME).ok().filter(|v| !v.is_empty()),
            author_email: env::var(ENV_AUTHOR_EMAIL).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Express the overrides as a mergeable configuration fragment.
    fn as_overlay(&self) -> Option<Value> {
        if self.author_name.is_none() && self.author_email.is_none() {
            return None;
        }
        let mut author = serde_yaml::Mapping::new();
        if let Some(name) = &self.author_name {
            author.insert("name".into(), name.clone().into());
        }
        if let Some(email) = &self.author_email {
            author.insert("email".into(), email.clone().into());
        }
        let mut root = serde_yaml::Mapping::new();
        root.insert("author".into(), Value::Mapping(author));
        Some(Value::Mapping(root))
    }
}

/// Loaded configuration: typed fields plus the merged document tree.
///
/// The configuration is immutable after load. The merged tree is retained
/// so dotted-path lookup sees exactly what the merge produced, including
/// unknown override keys.
#[derive(Debug, Clone)]
pub struct Config {
    data: ConfigData,
    merged: Value,
}

impl Config {
    /// Load configuration from built-in defaults, deep-merged with an
    /// optional user override file, then environment overrides on top.
    ///
    /// The load is atomic: the configuration is built entirely in memory
    /// and returned by value.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with_env(path, &EnvOverrides::from_process_env())
    }

    /// Load with explicit environment overrides.
    pub fn load_with_env(path: Option<&Path>, env: &EnvOverrides) -> ConfigResult<Self> {
        let mut merged: Value = serde_yaml::from_str(DEFAULT_CONFIG_YAML)
            .expect("built-in default configuration is valid YAML");

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                let overlay: Value =
                    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                        path: path.to_path_buf(),
                        source,
                    })?;
                if !overlay.is_null() {
                    deep_merge(&mut merged, overlay);
                }
                debug!("Merged user configuration from {}", path.display());
            } else {
                warn!("Configuration file not found: {}", path.display());
            }
        }

        if let Some(overlay) = env.as_overlay() {
            deep_merge(&mut merged, overlay);
        }

        // A scalar where a mapping is expected fails loudly here rather
        // than being coerced.
        let data: ConfigData = serde_yaml::from_value(merged.clone())?;

        Ok(Self { data, merged })
    }

    /// Look up a value by dotted path in the merged document.
    ///
    /// Returns `None` if any segment is absent or the traversal hits a
    /// non-mapping value.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut value = &self.merged;
        for segment in path.split('.') {
            value = value.get(segment)?;
        }
        Some(value)
    }

    /// Look up a template definition by name.
    pub fn template(&self, name: &str) -> ConfigResult<&TemplateDef> {
        self.data
            .templates
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTemplate(name.to_string()))
    }

    /// Names of all configured templates.
    pub fn template_names(&self) -> Vec<&str> {
        self.data.templates.keys().map(String::as_str).collect()
    }

    /// Author defaults.
    pub fn author(&self) -> &AuthorConfig {
        &self.data.author
    }

    /// Python version constraint.
    pub fn python_version(&self) -> &str {
        &self.data.python_version
    }

    /// Unknown top-level keys carried through from an override document.
    pub fn extra(&self) -> &BTreeMap<String, Value> {
        &self.data.extra
    }

    /// Write the default configuration as an example file.
    pub fn write_example(path: &Path) -> ConfigResult<()> {
        fs::write(path, DEFAULT_CONFIG_YAML.trim_start())?;
        Ok(())
    }
}
