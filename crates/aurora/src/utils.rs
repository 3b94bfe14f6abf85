//! Utility functions shared across CLI commands

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the extension templates root
pub const TEMPLATES_DIR_ENV: &str = "AURORA_TEMPLATES_DIR";

/// Working directory every command operates in
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to determine current directory")
}

/// Locate the extension templates root
///
/// Checked in order:
/// - `AURORA_TEMPLATES_DIR`
/// - `templates/` next to the executable (installed layout)
/// - `templates/` at the workspace root (running from a checkout)
pub fn get_templates_root() -> PathBuf {
    if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
        .filter(|dir| dir.is_dir())
    {
        return dir;
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("templates")
}
