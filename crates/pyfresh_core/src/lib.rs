//! # pyfresh_core
//!
//! Project generation pipeline for pyfresh.
//!
//! Orchestrates the flow: resolve naming and author info, consult the
//! configuration for the chosen template, render each file through
//! `pyfresh_templates`, write the results to the target directory (or
//! report the plan in dry-run mode), and initialize git best-effort.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pyfresh_config::Config;
//! use pyfresh_core::{GenerateOptions, ProjectGenerator, SilentPrompt};
//!
//! let config = Config::load(None).unwrap();
//! let generator = ProjectGenerator::new(config);
//!
//! let options = GenerateOptions::new("my-app", ".")
//!     .template("minimal")
//!     .author("Jane Doe")
//!     .email("jane@example.com");
//!
//! let report = generator.generate(&options, &SilentPrompt).unwrap();
//! assert!(report.project_dir.ends_with("my-app"));
//! ```

pub mod error;
pub mod generator;
pub mod git;
pub mod prompt;

pub use error::{CoreError, CoreResult};
pub use generator::{GenerateOptions, GenerationReport, ProjectGenerator};
pub use git::GitOps;
pub use prompt::{Prompt, SilentPrompt, StdinPrompt};
