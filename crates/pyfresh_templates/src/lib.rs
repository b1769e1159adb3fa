//! # pyfresh_templates
//!
//! Project file rendering for pyfresh.
//!
//! Given a file type and a render context, produces the literal text
//! content of one project file. Rendering is deterministic and pure: a
//! function of the context and the template definition only.
//!
//! ## Example
//!
//! ```rust
//! use pyfresh_config::TemplateDef;
//! use pyfresh_templates::{FileType, RenderContext, TemplateRenderer, Tool};
//!
//! let renderer = TemplateRenderer::new();
//! let context = RenderContext {
//!     project_name: "my-app".to_string(),
//!     package_name: "my_app".to_string(),
//!     author: "Jane Doe".to_string(),
//!     email: "jane@example.com".to_string(),
//!     description: "A demo".to_string(),
//!     tool: Tool::Poetry,
//!     python_version: ">=3.11".to_string(),
//! };
//! let readme = renderer
//!     .render(FileType::Readme, &context, &TemplateDef::default())
//!     .unwrap();
//! assert!(readme.contains("my-app"));
//! ```

pub mod context;
pub mod error;
pub mod file_type;
pub mod renderer;
pub mod tool;

pub use context::RenderContext;
pub use error::{TemplateError, TemplateResult};
pub use file_type::{FileType, PlannedFile};
pub use renderer::TemplateRenderer;
pub use tool::Tool;
