//! Shared utility functions for Aurora crates

use anyhow::anyhow;
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable overriding the Aurora configuration directory
pub const CONFIG_DIR_ENV: &str = "AURORA_CONFIG_DIR";

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// callers (and tests) can redirect it.
pub fn get_home_dir() -> anyhow::Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))
}

/// Get the Aurora configuration directory (`$AURORA_CONFIG_DIR` or `~/.aurora`)
pub fn get_aurora_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    Ok(get_home_dir()?.join(".aurora"))
}

/// Directory the editor loads installed extensions from
pub fn get_install_root() -> anyhow::Result<PathBuf> {
    Ok(get_home_dir()?
        .join("Library")
        .join("Application Support")
        .join("com.auroraeditor")
        .join("Extensions"))
}

/// Loose `local@domain.tld` check used by the author prompt
pub fn is_valid_email(input: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"))
        .is_match(input)
}

/// Whether `name` is exactly one plain path component.
///
/// Rejects separators, `.`, `..` and absolute paths, so joining the name
/// onto a directory can never leave that directory.
pub fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
