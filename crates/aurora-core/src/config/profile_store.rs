//! Profile file (`profile.json`) in the working directory

use crate::error::{Error, Result};
use crate::schema::{SchemaValidator, PROFILE_SCHEMA};
use crate::types::Profile;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the profile
pub const PROFILE_FILE: &str = "profile.json";

/// Load/save/remove access to a profile file
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Profile inside the given directory
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PROFILE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<Profile> {
        if !self.exists() {
            return Err(Error::not_found("Profile"));
        }
        let value = SchemaValidator::global()?.validate_file(&self.path, PROFILE_SCHEMA)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Write the profile, replacing any previous one
    pub fn save(&self, profile: &Profile) -> Result<()> {
        let value = serde_json::to_value(profile)?;
        SchemaValidator::global()?.validate(&value, PROFILE_SCHEMA)?;
        fs::write(&self.path, serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }

    pub fn remove(&self) -> Result<()> {
        if !self.exists() {
            return Err(Error::not_found("Profile"));
        }
        fs::remove_file(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_remove() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::in_dir(temp.path());
        let profile = Profile {
            author: "Ada".to_string(),
            company: String::new(),
            website: "https://ada.dev".to_string(),
        };

        store.save(&profile).unwrap();
        assert_eq!(store.load().unwrap(), profile);

        store.remove().unwrap();
        assert!(!store.exists());
        assert!(matches!(store.remove(), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_save_rejects_empty_author() {
        let temp = TempDir::new().unwrap();
        let store = ProfileStore::in_dir(temp.path());
        let result = store.save(&Profile::default());
        assert!(matches!(result, Err(Error::SchemaValidation { .. })));
        assert!(!store.exists());
    }
}
