//! File-type identifiers and their target paths.

use std::fmt;
use std::path::PathBuf;

use crate::error::{TemplateError, TemplateResult};

/// Closed set of file types a template can request.
///
/// Any identifier outside the closed set is treated as an implicit request
/// for the manifest file; see [`FileType::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Gitignore,
    Readme,
    Makefile,
    Main,
    CliMain,
    WebMain,
    Test,
    Pyproject,
}

impl FileType {
    /// Parse an identifier, falling back to the manifest file type for
    /// anything outside the closed set.
    pub fn parse(id: &str) -> Self {
        Self::parse_strict(id).unwrap_or(FileType::Pyproject)
    }

    /// Parse an identifier, rejecting anything outside the closed set.
    pub fn parse_strict(id: &str) -> TemplateResult<Self> {
        match id {
            "gitignore" => Ok(FileType::Gitignore),
            "readme" => Ok(FileType::Readme),
            "makefile" => Ok(FileType::Makefile),
            "main" => Ok(FileType::Main),
            "cli_main" => Ok(FileType::CliMain),
            "web_main" => Ok(FileType::WebMain),
            "test" => Ok(FileType::Test),
            "pyproject" => Ok(FileType::Pyproject),
            other => Err(TemplateError::UnknownFileType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Gitignore => "gitignore",
            FileType::Readme => "readme",
            FileType::Makefile => "makefile",
            FileType::Main => "main",
            FileType::CliMain => "cli_main",
            FileType::WebMain => "web_main",
            FileType::Test => "test",
            FileType::Pyproject => "pyproject",
        }
    }

    /// Target path of the rendered file, relative to the project root.
    pub fn relative_path(&self, package_name: &str) -> PathBuf {
        match self {
            FileType::Gitignore => PathBuf::from(".gitignore"),
            FileType::Readme => PathBuf::from("README.md"),
            FileType::Makefile => PathBuf::from("Makefile"),
            FileType::Main => ["src", package_name, "main.py"].iter().collect(),
            FileType::CliMain => ["src", package_name, "cli.py"].iter().collect(),
            FileType::WebMain => ["src", package_name, "app.py"].iter().collect(),
            FileType::Test => ["tests", "test_main.py"].iter().collect(),
            FileType::Pyproject => PathBuf::from("pyproject.toml"),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A file scheduled for generation: its rendering rule and target path.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub file_type: FileType,
    pub relative_path: PathBuf,
}

impl PlannedFile {
    /// Plan a file from a template's file-type identifier.
    ///
    /// Identifiers outside the closed set render as the manifest but keep
    /// the raw identifier as their target path.
    pub fn for_id(id: &str, package_name: &str) -> Self {
        match FileType::parse_strict(id) {
            Ok(file_type) => Self {
                file_type,
                relative_path: file_type.relative_path(package_name),
            },
            Err(_) => Self {
                file_type: FileType::Pyproject,
                relative_path: PathBuf::from(id),
            },
        }
    }
}
