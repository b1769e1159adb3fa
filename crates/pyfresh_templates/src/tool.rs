//! Dependency management tool selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Supported dependency management conventions.
///
/// The tool affects the install/run command text in rendered files and
/// selects the manifest format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Poetry,
    Uv,
}

impl Tool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Poetry => "poetry",
            Tool::Uv => "uv",
        }
    }

    /// Command that installs project dependencies.
    pub fn install_command(&self) -> &'static str {
        match self {
            Tool::Poetry => "poetry install",
            Tool::Uv => "uv sync",
        }
    }

    /// Command that runs the generated package as a module.
    pub fn run_command(&self, package_name: &str) -> String {
        match self {
            Tool::Poetry => format!("poetry run python -m {package_name}"),
            Tool::Uv => format!("uv run python -m {package_name}"),
        }
    }

    /// Prefix for commands executed through the tool.
    pub fn command_prefix(&self) -> &'static str {
        match self {
            Tool::Poetry => "poetry run",
            Tool::Uv => "uv run",
        }
    }
}

impl FromStr for Tool {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poetry" => Ok(Tool::Poetry),
            "uv" => Ok(Tool::Uv),
            other => Err(TemplateError::UnknownTool(other.to_string())),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("poetry".parse::<Tool>().unwrap(), Tool::Poetry);
        assert_eq!("uv".parse::<Tool>().unwrap(), Tool::Uv);
        assert!("pipenv".parse::<Tool>().is_err());
    }

    #[test]
    fn test_commands() {
        assert_eq!(Tool::Poetry.install_command(), "poetry install");
        assert_eq!(Tool::Uv.run_command("my_app"), "uv run python -m my_app");
    }
}
