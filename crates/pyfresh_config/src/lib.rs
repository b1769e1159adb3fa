//! # pyfresh_config
//!
//! Configuration store for pyfresh.
//!
//! Holds the built-in template definitions and author defaults, deep-merges
//! an optional user override document over them, applies environment
//! overrides, and exposes typed accessors plus dotted-path lookup.
//!
//! ## Example
//!
//! ```rust
//! use pyfresh_config::Config;
//!
//! let config = Config::load(None).unwrap();
//! let template = config.template("standard").unwrap();
//! assert!(template.files_with_manifest().contains(&"pyproject".to_string()));
//! ```

pub mod defaults;
pub mod error;
pub mod merge;
pub mod model;
pub mod store;

pub use error::{ConfigError, ConfigResult};
pub use model::{
    AuthorConfig, ConfigData, DevDependencies, TemplateDef, DEFAULT_AUTHOR_EMAIL,
    DEFAULT_AUTHOR_NAME, MANIFEST_FILE_ID,
};
pub use store::{Config, EnvOverrides, ENV_AUTHOR_EMAIL, ENV_AUTHOR_NAME};
