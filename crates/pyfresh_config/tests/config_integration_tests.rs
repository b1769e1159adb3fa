//! Integration tests for configuration loading.

use std::fs;

use pyfresh_config::{Config, ConfigError, EnvOverrides};
use tempfile::tempdir;

#[test]
fn test_override_file_merges_over_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(
        &path,
        r#"
author:
  name: "Jane Doe"
templates:
  data:
    description: "Data science project"
    dependencies:
      - "numpy>=1.26.0"
    files:
      - gitignore
      - readme
      - main
"#,
    )
    .unwrap();

    let config = Config::load_with_env(Some(&path), &EnvOverrides::default()).unwrap();

    // Scalar override wins, untouched sibling keeps its default.
    assert_eq!(config.author().name, "Jane Doe");
    assert_eq!(config.author().email, "your.email@example.com");

    // Override-only template is added, defaults survive.
    assert!(config.template("data").is_ok());
    assert!(config.template("standard").is_ok());
    assert_eq!(config.template_names().len(), 5);
}

#[test]
fn test_env_overrides_beat_override_file() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "author:\n  name: File Author\n  email: file@x.com\n").unwrap();

    let env = EnvOverrides {
        author_name: Some("Env Author".to_string()),
        author_email: Some("env@x.com".to_string()),
    };
    let config = Config::load_with_env(Some(&path), &env).unwrap();
    assert_eq!(config.author().name, "Env Author");
    assert_eq!(config.author().email, "env@x.com");
}

#[test]
fn test_malformed_override_fails() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "author: [unclosed\n").unwrap();

    let result = Config::load_with_env(Some(&path), &EnvOverrides::default());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_scalar_where_mapping_expected_fails() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "author: just-a-string\n").unwrap();

    let result = Config::load_with_env(Some(&path), &EnvOverrides::default());
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_missing_override_file_uses_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("does-not-exist.yaml");

    let config = Config::load_with_env(Some(&path), &EnvOverrides::default()).unwrap();
    assert_eq!(config.template_names().len(), 4);
}

#[test]
fn test_unknown_override_keys_survive() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.yaml");
    fs::write(&path, "my_section:\n  enabled: true\n").unwrap();

    let config = Config::load_with_env(Some(&path), &EnvOverrides::default()).unwrap();
    assert!(config.extra().contains_key("my_section"));
    assert_eq!(
        config.get("my_section.enabled").and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[test]
fn test_write_example_round_trips() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("example.yaml");

    Config::write_example(&path).unwrap();
    let config = Config::load_with_env(Some(&path), &EnvOverrides::default()).unwrap();
    assert_eq!(config.template_names().len(), 4);
}
