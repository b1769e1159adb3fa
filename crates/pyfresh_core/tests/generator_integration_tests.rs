//! Integration tests for the generation pipeline.

use std::fs;

use pyfresh_config::{Config, EnvOverrides};
use pyfresh_core::{CoreError, GenerateOptions, ProjectGenerator, SilentPrompt};
use pyfresh_templates::Tool;
use tempfile::tempdir;

fn generator() -> ProjectGenerator {
    let config = Config::load_with_env(None, &EnvOverrides::default()).unwrap();
    ProjectGenerator::new(config)
}

fn options(name: &str, output_dir: &std::path::Path) -> GenerateOptions {
    GenerateOptions::new(name, output_dir)
        .author("Test Author")
        .email("test@example.com")
}

#[test]
fn test_dry_run_creates_nothing() {
    let temp = tempdir().unwrap();
    let opts = options("test-project", temp.path())
        .template("minimal")
        .dry_run(true);

    let report = generator().generate(&opts, &SilentPrompt).unwrap();

    assert!(report.dry_run);
    assert!(!temp.path().join("test-project").exists());
    assert!(!report.planned_files.is_empty());
}

#[test]
fn test_minimal_generation_produces_exact_tree() {
    let temp = tempdir().unwrap();
    let opts = options("my-app", temp.path()).template("minimal");

    let report = generator().generate(&opts, &SilentPrompt).unwrap();

    let project_dir = temp.path().join("my-app");
    assert_eq!(report.project_dir, project_dir);
    assert!(project_dir.join(".gitignore").exists());
    assert!(project_dir.join("README.md").exists());
    assert!(project_dir.join("pyproject.toml").exists());
    assert!(project_dir.join("src/my_app/main.py").exists());
    assert!(project_dir.join("tests").is_dir());

    // Not part of the minimal template.
    assert!(!project_dir.join("Makefile").exists());
    assert!(!project_dir.join("src/my_app/cli.py").exists());
    assert!(!project_dir.join("tests/test_main.py").exists());
}

#[test]
fn test_standard_generation_includes_tooling_files() {
    let temp = tempdir().unwrap();
    let opts = options("svc", temp.path()).tool(Tool::Uv);

    generator().generate(&opts, &SilentPrompt).unwrap();

    let project_dir = temp.path().join("svc");
    assert!(project_dir.join("Makefile").exists());
    assert!(project_dir.join("tests/test_main.py").exists());

    let makefile = fs::read_to_string(project_dir.join("Makefile")).unwrap();
    assert!(makefile.contains("uv sync"));
    let manifest = fs::read_to_string(project_dir.join("pyproject.toml")).unwrap();
    assert!(manifest.contains("Test Author"));
    assert!(manifest.contains("test@example.com"));
}

#[test]
fn test_existing_directory_without_force_fails_untouched() {
    let temp = tempdir().unwrap();
    let opts = options("my-app", temp.path()).template("minimal");
    let g = generator();

    g.generate(&opts, &SilentPrompt).unwrap();
    let readme = temp.path().join("my-app/README.md");
    fs::write(&readme, "hand-edited").unwrap();

    let result = g.generate(&opts, &SilentPrompt);
    assert!(matches!(result, Err(CoreError::DirectoryExists(_))));
    assert_eq!(fs::read_to_string(&readme).unwrap(), "hand-edited");
}

#[test]
fn test_force_fully_replaces_prior_content() {
    let temp = tempdir().unwrap();
    let opts = options("my-app", temp.path()).template("minimal");
    let g = generator();

    g.generate(&opts, &SilentPrompt).unwrap();
    let stray = temp.path().join("my-app/stray.txt");
    fs::write(&stray, "leftover").unwrap();

    g.generate(&opts.clone().force(true), &SilentPrompt).unwrap();

    assert!(!stray.exists());
    assert!(temp.path().join("my-app/README.md").exists());
}

#[test]
fn test_force_dry_run_does_not_remove_existing() {
    let temp = tempdir().unwrap();
    let opts = options("my-app", temp.path()).template("minimal");
    let g = generator();

    g.generate(&opts, &SilentPrompt).unwrap();
    let report = g
        .generate(&opts.clone().force(true).dry_run(true), &SilentPrompt)
        .unwrap();

    assert!(report.dry_run);
    assert!(temp.path().join("my-app/README.md").exists());
}

#[test]
fn test_unknown_template_fails_with_no_directory() {
    let temp = tempdir().unwrap();
    let opts = options("x", temp.path()).template("bogus");

    let result = generator().generate(&opts, &SilentPrompt);
    assert!(matches!(result, Err(CoreError::Config(_))));
    assert!(!temp.path().join("x").exists());
}

#[test]
fn test_project_name_normalization_flows_through() {
    let temp = tempdir().unwrap();
    let opts = options("  My App ", temp.path()).template("minimal");

    let report = generator().generate(&opts, &SilentPrompt).unwrap();

    assert_eq!(report.project_name, "My_App");
    assert_eq!(report.package_name, "my_app");
    assert!(temp.path().join("My_App/src/my_app/main.py").exists());
}

#[test]
fn test_default_description_fallback() {
    let temp = tempdir().unwrap();
    let opts = options("demo", temp.path()).template("minimal");

    generator().generate(&opts, &SilentPrompt).unwrap();

    let readme = fs::read_to_string(temp.path().join("demo/README.md")).unwrap();
    assert!(readme.contains("A Python project generated with pyfresh"));
}

#[test]
fn test_placeholder_author_resolved_through_prompt_seam() {
    let temp = tempdir().unwrap();
    // No author supplied: config placeholder goes through the prompt,
    // which returns the default silently.
    let opts = GenerateOptions::new("demo", temp.path())
        .template("minimal")
        .dry_run(true);

    let report = generator().generate(&opts, &SilentPrompt).unwrap();
    assert_eq!(report.author, "Your Name");
    assert_eq!(report.email, "your.email@example.com");
}
