//! Project generation pipeline.
//!
//! One `generate` call is an independent linear pipeline: resolve naming
//! and author info, look up the template, build the file plan, then either
//! report the plan (dry run) or write the tree and initialize git.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use pyfresh_config::{Config, TemplateDef};
use pyfresh_templates::{PlannedFile, RenderContext, TemplateRenderer, Tool};

use crate::error::{CoreError, CoreResult};
use crate::git;
use crate::prompt::Prompt;

/// Fallback description when none is supplied.
const DEFAULT_DESCRIPTION: &str = "A Python project generated with pyfresh";

/// Options for one generation call.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub project_name: String,
    pub author: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub template: String,
    pub tool: Tool,
    pub output_dir: PathBuf,
    pub force: bool,
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(project_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            author: None,
            email: None,
            description: None,
            template: "standard".to_string(),
            tool: Tool::Poetry,
            output_dir: output_dir.into(),
            force: false,
            dry_run: false,
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn tool(mut self, tool: Tool) -> Self {
        self.tool = tool;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Outcome of a generation call.
///
/// For a dry run the report is the plan; nothing was written.
#[derive(Debug)]
pub struct GenerationReport {
    pub project_name: String,
    pub package_name: String,
    pub project_dir: PathBuf,
    pub template: String,
    pub template_description: String,
    pub tool: Tool,
    pub author: String,
    pub email: String,
    /// Directories of the project tree, relative to the project root.
    pub planned_dirs: Vec<PathBuf>,
    /// Generated files, relative to the project root.
    pub planned_files: Vec<PathBuf>,
    pub git_initialized: bool,
    pub dry_run: bool,
}

/// Orchestrates the generation flow.
pub struct ProjectGenerator {
    config: Config,
    renderer: TemplateRenderer,
}

impl ProjectGenerator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            renderer: TemplateRenderer::new(),
        }
    }

    /// Generate a new project.
    ///
    /// On a mid-pipeline write failure, files already written are not
    /// rolled back.
    pub fn generate(
        &self,
        options: &GenerateOptions,
        prompt: &dyn Prompt,
    ) -> CoreResult<GenerationReport> {
        let project_name = normalize_project_name(&options.project_name);
        let package_name = derive_package_name(&project_name);

        let author = self.resolve_author(options.author.as_deref(), prompt);
        let email = self.resolve_email(options.email.as_deref(), prompt);
        let description = options
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        // Unknown template aborts before any filesystem mutation.
        let def = self.config.template(&options.template)?;

        let context = RenderContext {
            project_name: project_name.clone(),
            package_name: package_name.clone(),
            author: author.clone(),
            email: email.clone(),
            description,
            tool: options.tool,
            python_version: self.config.python_version().to_string(),
        };

        let project_dir = options.output_dir.join(&project_name);
        if project_dir.exists() {
            if !options.force {
                return Err(CoreError::DirectoryExists(project_dir));
            }
            if !options.dry_run {
                info!("Removing existing directory {}", project_dir.display());
                fs::remove_dir_all(&project_dir)?;
            }
        }

        let planned_dirs = vec![PathBuf::from("src").join(&package_name), PathBuf::from("tests")];
        let plan: Vec<PlannedFile> = def
            .files_with_manifest()
            .iter()
            .map(|id| PlannedFile::for_id(id, &package_name))
            .collect();

        let mut report = GenerationReport {
            project_name,
            package_name,
            project_dir: project_dir.clone(),
            template: options.template.clone(),
            template_description: def.description.clone(),
            tool: options.tool,
            author,
            email,
            planned_dirs,
            planned_files: plan.iter().map(|f| f.relative_path.clone()).collect(),
            git_initialized: false,
            dry_run: options.dry_run,
        };

        if options.dry_run {
            debug!("Dry run - skipping filesystem writes");
            return Ok(report);
        }

        info!(
            "Creating project '{}' in {}",
            report.project_name,
            project_dir.display()
        );
        fs::create_dir_all(&project_dir)?;
        for dir in &report.planned_dirs {
            fs::create_dir_all(project_dir.join(dir))?;
        }

        self.write_files(&project_dir, &plan, &context, def)?;

        report.git_initialized = git::init_repository(&project_dir);
        Ok(report)
    }

    fn write_files(
        &self,
        project_dir: &Path,
        plan: &[PlannedFile],
        context: &RenderContext,
        def: &TemplateDef,
    ) -> CoreResult<()> {
        for planned in plan {
            let content = self.renderer.render(planned.file_type, context, def)?;
            let full_path = project_dir.join(&planned.relative_path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&full_path, content).map_err(|source| CoreError::FileWrite {
                path: full_path.clone(),
                source,
            })?;
            debug!("Wrote {}", planned.relative_path.display());
        }
        Ok(())
    }

    fn resolve_author(&self, supplied: Option<&str>, prompt: &dyn Prompt) -> String {
        if let Some(author) = supplied {
            return author.to_string();
        }
        let configured = self.config.author();
        if configured.name_is_placeholder() {
            prompt.ask("Author name", &configured.name)
        } else {
            configured.name.clone()
        }
    }

    fn resolve_email(&self, supplied: Option<&str>, prompt: &dyn Prompt) -> String {
        if let Some(email) = supplied {
            return email.to_string();
        }
        let configured = self.config.author();
        if configured.email_is_placeholder() {
            prompt.ask("Author email", &configured.email)
        } else {
            configured.email.clone()
        }
    }
}

/// Trim surrounding whitespace and replace inner spaces with underscores.
fn normalize_project_name(name: &str) -> String {
    name.trim().replace(' ', "_")
}

/// Lowercase with hyphens replaced, yielding an importable package name.
fn derive_package_name(project_name: &str) -> String {
    project_name.to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_normalization() {
        assert_eq!(normalize_project_name("  my project "), "my_project");
        assert_eq!(derive_package_name("My-App"), "my_app");
        assert_eq!(derive_package_name("my_app"), "my_app");
    }
}
