//! Persisted author identity (`~/.aurora/author.json`)

use crate::error::{Error, Result};
use crate::schema::{SchemaValidator, AUTHOR_SCHEMA};
use crate::types::AuthorInfo;
use crate::utils::get_aurora_dir;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the author configuration inside the Aurora directory
pub const AUTHOR_FILE: &str = "author.json";

/// Load/save access to the author configuration file
#[derive(Debug, Clone)]
pub struct AuthorStore {
    path: PathBuf,
}

impl AuthorStore {
    /// Create a store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location (`$AURORA_CONFIG_DIR/author.json` or
    /// `~/.aurora/author.json`)
    pub fn default_location() -> Result<Self> {
        let dir = get_aurora_dir()
            .map_err(|e| Error::invalid_config(format!("Cannot locate config dir: {}", e)))?;
        Ok(Self::new(dir.join(AUTHOR_FILE)))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored record.
    ///
    /// Returns `Ok(None)` when the file does not exist; unreadable or
    /// malformed content is an error.
    pub fn load(&self) -> Result<Option<AuthorInfo>> {
        if !self.path.exists() {
            debug!("No author file at {:?}", self.path);
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;
        SchemaValidator::global()?.validate(&value, AUTHOR_SCHEMA)?;

        Ok(Some(serde_json::from_value(value)?))
    }

    /// Write the record, creating parent directories as needed
    pub fn save(&self, info: &AuthorInfo) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(info)?;
        fs::write(&self.path, json + "\n")?;
        debug!("Saved author information to {:?}", self.path);
        Ok(())
    }
}
