//! Render context: the resolved substitution values for one generation.

use crate::tool::Tool;

/// Substitution values fed into rendering.
///
/// Constructed once per generation call and passed read-only into every
/// rendering rule.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Normalized project name (trimmed, spaces replaced).
    pub project_name: String,
    /// Importable package name (lowercase, hyphens replaced).
    pub package_name: String,
    pub author: String,
    pub email: String,
    pub description: String,
    pub tool: Tool,
    /// Python version constraint echoed into the manifest.
    pub python_version: String,
}
