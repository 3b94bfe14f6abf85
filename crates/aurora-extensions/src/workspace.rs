//! Extensions kept under `<cwd>/extensions`

use crate::install::load_manifest;
use aurora_core::types::{ExtensionManifest, MANIFEST_FILE};
use aurora_core::utils::is_single_component;
use aurora_core::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the directory holding local extensions
pub const EXTENSIONS_DIR: &str = "extensions";

/// Local extension directory and the management operations on it
#[derive(Debug, Clone)]
pub struct ExtensionWorkspace {
    root: PathBuf,
}

impl ExtensionWorkspace {
    /// Workspace rooted at `<base_dir>/extensions`
    pub fn new(base_dir: &Path) -> Self {
        Self {
            root: base_dir.join(EXTENSIONS_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entry names sorted alphabetically, or `None` when the directory
    /// does not exist
    pub fn list(&self) -> Result<Option<Vec<String>>> {
        if !self.root.is_dir() {
            debug!("No extensions directory at {}", self.root.display());
            return Ok(None);
        }

        let mut names = fs::read_dir(&self.root)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<std::io::Result<Vec<_>>>()?;
        names.sort();
        Ok(Some(names))
    }

    /// Delete an extension directory
    pub fn remove(&self, id: &str) -> Result<PathBuf> {
        let path = self.extension_path(id)?;
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        info!("Extension with ID {} has been removed", id);
        Ok(path)
    }

    /// Re-validate an extension's manifest
    pub fn update(&self, id: &str) -> Result<ExtensionManifest> {
        let path = self.extension_path(id)?;
        let manifest = load_manifest(&path)?;
        info!("Extension {} v{} is valid", manifest.name, manifest.version);
        Ok(manifest)
    }

    /// Mark an extension's manifest as deprecated and rewrite it.
    ///
    /// Unknown top-level fields survive the rewrite.
    pub fn deprecate(&self, id: &str) -> Result<ExtensionManifest> {
        let path = self.extension_path(id)?;
        let mut manifest = load_manifest(&path)?;

        if manifest.is_deprecated() {
            debug!("Extension {} is already deprecated", id);
            return Ok(manifest);
        }

        manifest.mark_deprecated();
        fs::write(path.join(MANIFEST_FILE), manifest.to_pretty_json()?)?;
        info!("Extension {} marked as deprecated", id);
        Ok(manifest)
    }

    /// Resolve `<root>/<id>`, rejecting ids that are not a single path
    /// component
    fn extension_path(&self, id: &str) -> Result<PathBuf> {
        let path = self.root.join(id);
        if !is_single_component(id) || !path.exists() {
            return Err(Error::not_found(format!("Extension with ID {}", id)));
        }
        Ok(path)
    }
}

/// Check that the extension in `dir` is ready to publish.
///
/// No registry exists yet, so this stops at validation.
pub fn prepare_upload(dir: &Path) -> Result<ExtensionManifest> {
    let manifest = load_manifest(dir)?;
    info!(
        "Extension {} v{} is ready for upload",
        manifest.name, manifest.version
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_missing_directory() {
        let temp = TempDir::new().unwrap();
        let workspace = ExtensionWorkspace::new(temp.path());

        assert_eq!(workspace.list().unwrap(), None);
        assert!(!workspace.root().exists());
    }

    #[test]
    fn test_list_sorted() {
        let temp = TempDir::new().unwrap();
        let workspace = ExtensionWorkspace::new(temp.path());
        for name in ["zeta", "alpha", "mid"] {
            fs::create_dir_all(workspace.root().join(name)).unwrap();
        }

        assert_eq!(
            workspace.list().unwrap(),
            Some(vec!["alpha".to_string(), "mid".to_string(), "zeta".to_string()])
        );
    }

    #[test]
    fn test_rejects_path_traversal() {
        let temp = TempDir::new().unwrap();
        let workspace = ExtensionWorkspace::new(temp.path());
        fs::create_dir_all(workspace.root()).unwrap();
        fs::create_dir_all(temp.path().join("keep")).unwrap();

        for id in ["../keep", "", ".", "a/b"] {
            let err = workspace.remove(id).unwrap_err();
            assert!(matches!(err, Error::NotFound { .. }), "id {:?}", id);
        }
        assert!(temp.path().join("keep").exists());
    }
}
