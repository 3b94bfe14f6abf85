//! Repository initialization operations

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Initialize a new git repository
///
/// # Arguments
/// * `path` - Directory to initialize as a git repository
///
/// # Errors
/// Returns error if:
/// - Directory doesn't exist
/// - Git is not installed
/// - `git init` exits unsuccessfully
pub async fn init_repository(path: &Utf8Path) -> Result<()> {
    info!("Initializing git repository at: {}", path);

    check_git_available().await?;

    if !path.exists() {
        return Err(Error::RepoNotFound {
            path: path.to_string(),
        });
    }

    if path.join(".git").is_dir() {
        debug!("Git repository already exists at: {}", path);
        return Ok(());
    }

    debug!("Running: git init in {}", path);
    let output = Command::new("git")
        .current_dir(path)
        .arg("init")
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!("git init failed: {}", stderr)));
    }

    info!("Repository initialized successfully");
    Ok(())
}

/// Check if git is available in PATH
pub async fn check_git_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|_| Error::GitNotFound)?;

    if !output.status.success() {
        return Err(Error::GitNotFound);
    }

    Ok(())
}
