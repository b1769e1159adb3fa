//! CLI argument definitions and command execution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use pyfresh_config::Config;
use pyfresh_core::{
    GenerateOptions, GenerationReport, Prompt, ProjectGenerator, SilentPrompt, StdinPrompt,
};
use pyfresh_templates::Tool;

/// pyfresh - Generate Python project structures with configurable templates
#[derive(Parser)]
#[command(name = "pyfresh")]
#[command(version, about = "Generate Python project structures with configurable templates")]
#[command(long_about = r#"
pyfresh scaffolds a new Python project from a named template, substituting
author and project metadata into the generated files.

EXAMPLES:
  pyfresh my-project                    # Interactive mode
  pyfresh my-project --author "John Doe" --email "john@example.com"
  pyfresh my-project --template minimal --tool uv
  pyfresh my-project --config my-config.yaml

EXIT CODES:
  0   - Success
  1   - General error
  130 - Cancelled by user
"#)]
pub struct Cli {
    /// Name of the project to create
    pub project_name: String,

    /// Project author name (default: from config or prompt)
    #[arg(long)]
    pub author: Option<String>,

    /// Project author email (default: from config or prompt)
    #[arg(long)]
    pub email: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Project template to use
    #[arg(long, default_value = "standard", value_parser = ["standard", "minimal", "cli", "web"])]
    pub template: String,

    /// Dependency management tool
    #[arg(long, default_value = "poetry", value_parser = ["poetry", "uv"])]
    pub tool: String,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for the project
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Overwrite existing project directory
    #[arg(long)]
    pub force: bool,

    /// Show what would be created without writing files
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(cli: Cli) -> Result<()> {
    info!("Creating project: {}", cli.project_name);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(
        "Configuration loaded ({} templates)",
        config.template_names().len()
    );
    let tool: Tool = cli.tool.parse()?;

    let mut options = GenerateOptions::new(&cli.project_name, &cli.output_dir)
        .template(&cli.template)
        .tool(tool)
        .force(cli.force)
        .dry_run(cli.dry_run);
    if let Some(author) = cli.author {
        options = options.author(author);
    }
    if let Some(email) = cli.email {
        options = options.email(email);
    }
    if let Some(description) = cli.description {
        options = options.description(description);
    }

    let generator = ProjectGenerator::new(config);
    // Dry runs are automation-friendly and never block on input.
    let prompt: Box<dyn Prompt> = if cli.dry_run {
        Box::new(SilentPrompt)
    } else {
        Box::new(StdinPrompt)
    };

    let report = tokio::task::spawn_blocking(move || generator.generate(&options, prompt.as_ref()))
        .await
        .context("Generation task failed")??;

    print_report(&report);
    Ok(())
}

fn print_report(report: &GenerationReport) {
    if report.dry_run {
        println!(
            "🔍 Dry run - would create project '{}' in '{}'",
            report.project_name,
            report.project_dir.display()
        );
        println!(
            "📋 Template: {} ({})",
            report.template, report.template_description
        );
        println!("🔧 Tool: {}", report.tool);
        println!("👤 Author: {} <{}>", report.author, report.email);
        println!();
        println!("📁 Files that would be created:");
        for dir in &report.planned_dirs {
            println!("   📁 {}/", dir.display());
        }
        for file in &report.planned_files {
            println!("   📄 {}", file.display());
        }
        return;
    }

    println!("✅ Project '{}' created successfully!", report.project_name);
    println!("📁 Location: {}", report.project_dir.display());
    println!();
    println!("🎯 Next steps:");
    println!("   cd {}", report.project_name);
    println!("   {}", report.tool.install_command());
    println!("   make test");
    if report.git_initialized {
        println!("   git add . && git commit -m 'Initial commit'");
    }
}
