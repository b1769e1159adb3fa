//! Git integration for generated projects.
//!
//! The generator initializes a repository in the generated tree on a
//! best-effort basis: a missing `git` binary or a failed `git init` is
//! reported but never fails the generation.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};

/// Git operations scoped to one repository path.
#[derive(Debug)]
pub struct GitOps {
    repo_path: PathBuf,
}

impl GitOps {
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Check if Git is available on the system.
    pub fn is_git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Check if the repository is initialized.
    pub fn is_initialized(&self) -> bool {
        self.repo_path.join(".git").exists()
    }

    /// Initialize a Git repository.
    pub fn init(&self) -> CoreResult<()> {
        if self.is_initialized() {
            debug!("Repository already initialized");
            return Ok(());
        }

        let output = Command::new("git")
            .args(["init"])
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| CoreError::Git(format!("Failed to run git init: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CoreError::Git(format!("git init failed: {stderr}")));
        }

        Ok(())
    }
}

/// Best-effort repository initialization for a generated project.
///
/// Returns whether a repository was initialized.
pub fn init_repository(project_dir: &Path) -> bool {
    if !GitOps::is_git_available() {
        warn!("Git not available - skipping repository initialization");
        return false;
    }

    let git = GitOps::new(project_dir);
    match git.init() {
        Ok(()) => {
            info!("Initialized git repository at {}", project_dir.display());
            true
        }
        Err(e) => {
            warn!("Failed to initialize git repository: {e}");
            false
        }
    }
}
