//! Extension materialization
//!
//! Turns a validated manifest into an extension directory: the manifest
//! file, the language template and optionally a git repository.

use crate::copy::copy_dir_contents;
use crate::manifest::ExtensionAnswers;
use aurora_core::types::{ExtensionManifest, MANIFEST_FILE};
use aurora_core::utils::is_single_component;
use aurora_core::{Error, Result, SchemaValidator};
use aurora_projects::git::init_repository;
use camino::Utf8Path;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Where a new extension is created and where templates come from
#[derive(Debug, Clone)]
pub struct MaterializeOptions {
    /// Directory the extension directory is created in
    pub base_dir: PathBuf,
    /// Directory holding one template subdirectory per language
    pub templates_root: PathBuf,
}

impl MaterializeOptions {
    pub fn new(base_dir: impl Into<PathBuf>, templates_root: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            templates_root: templates_root.into(),
        }
    }

    /// Template directory for a manifest's language
    pub fn template_dir(&self, manifest: &ExtensionManifest) -> PathBuf {
        self.templates_root
            .join(manifest.extension_type.template_key())
    }
}

/// Create `<base_dir>/<name>` from a manifest.
///
/// Validation, the name check and the existence check all happen before
/// anything is written, so a failure at any of them leaves the filesystem
/// untouched. The name must be a single directory name.
/// A missing template or a failed `git init` only produces a warning.
pub async fn materialize(
    manifest: &ExtensionManifest,
    answers: &ExtensionAnswers,
    options: &MaterializeOptions,
) -> Result<PathBuf> {
    SchemaValidator::global()?.validate_manifest(&manifest.to_value()?)?;
    info!("Extension manifest is valid");

    if !is_single_component(&manifest.name) {
        return Err(Error::invalid_name(&manifest.name));
    }

    let dest = options.base_dir.join(&manifest.name);
    if dest.exists() {
        return Err(Error::already_exists(dest.display().to_string()));
    }

    fs::create_dir_all(&dest)?;
    fs::write(dest.join(MANIFEST_FILE), manifest.to_pretty_json()?)?;
    info!("{} file created successfully", MANIFEST_FILE);

    let template = options.template_dir(manifest);
    if template.is_dir() {
        let copied = copy_dir_contents(&template, &dest)?;
        info!(
            "Template for {} copied successfully ({} files)",
            manifest.extension_type, copied
        );
    } else {
        warn!(
            "Template for {} not found at {}",
            manifest.extension_type,
            template.display()
        );
    }

    if answers.git_support {
        initialize_git(&dest).await;
    }

    Ok(dest)
}

async fn initialize_git(dest: &Path) {
    let Some(path) = Utf8Path::from_path(dest) else {
        warn!("Failed to initialize Git repository: non UTF-8 path {}", dest.display());
        return;
    };

    match init_repository(path).await {
        Ok(()) => debug!("Git repository initialized in {}", path),
        Err(e) => warn!("Failed to initialize Git repository: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_core::types::{ExtensionType, ManifestAuthor};
    use serde_json::Map;
    use tempfile::TempDir;

    fn manifest(name: &str) -> ExtensionManifest {
        ExtensionManifest {
            name: name.to_string(),
            description: "d".to_string(),
            icon: String::new(),
            categories: vec!["Themes".to_string()],
            version: "0.0.1".to_string(),
            extension_type: ExtensionType::Javascript,
            author: ManifestAuthor {
                name: "A".to_string(),
                email: String::new(),
                company: String::new(),
            },
            license: "MIT".to_string(),
            editor: vec!["1.0.0".to_string()],
            homepage: None,
            extra: Map::new(),
        }
    }

    fn answers() -> ExtensionAnswers {
        ExtensionAnswers {
            extension_type: ExtensionType::Javascript,
            name: "x".to_string(),
            description: "d".to_string(),
            categories: vec!["Themes".to_string()],
            license: "MIT".to_string(),
            editor_versions: vec!["1.0.0".to_string()],
            git_support: false,
            homepage: None,
        }
    }

    #[test]
    fn test_template_dir_uses_lowercase_key() {
        let options = MaterializeOptions::new("/work", "/templates");
        let mut m = manifest("x");
        m.extension_type = ExtensionType::Typescript;
        assert_eq!(
            options.template_dir(&m),
            PathBuf::from("/templates/typescript")
        );
    }

    #[tokio::test]
    async fn test_missing_template_still_writes_manifest() {
        let temp = TempDir::new().unwrap();
        let options = MaterializeOptions::new(temp.path(), temp.path().join("no-templates"));

        let dest = materialize(&manifest("x"), &answers(), &options)
            .await
            .unwrap();

        let entries: Vec<_> = fs::read_dir(&dest).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(dest.join(MANIFEST_FILE).is_file());
    }

    #[tokio::test]
    async fn test_invalid_manifest_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let options = MaterializeOptions::new(temp.path(), temp.path());
        let mut m = manifest("bad");
        m.version = "1.0".to_string();

        let err = materialize(&m, &answers(), &options).await.unwrap_err();

        assert!(matches!(err, Error::SchemaValidation { .. }));
        assert!(!temp.path().join("bad").exists());
    }

    #[tokio::test]
    async fn test_name_must_stay_inside_base_dir() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("cwd");
        fs::create_dir(&base).unwrap();
        let outside = temp.path().join("elsewhere").join("escaped");
        let options = MaterializeOptions::new(&base, temp.path().join("no-templates"));

        for name in [
            "../sibling".to_string(),
            "nested/ext".to_string(),
            ".".to_string(),
            outside.display().to_string(),
        ] {
            let err = materialize(&manifest(&name), &answers(), &options)
                .await
                .unwrap_err();
            assert!(matches!(err, Error::InvalidName { .. }), "{}: {:?}", name, err);
        }

        assert!(!temp.path().join("sibling").exists());
        assert!(!base.join("nested").exists());
        assert!(!outside.exists());
        assert_eq!(fs::read_dir(&base).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_failed_git_init_keeps_extension() {
        let temp = TempDir::new().unwrap();
        let templates = temp.path().join("templates");
        let template = templates.join("javascript");
        fs::create_dir_all(&template).unwrap();
        fs::write(template.join("index.js"), "// entry\n").unwrap();
        // A `.git` file that is not a valid gitfile makes `git init` fail;
        // without git installed the init fails earlier.
        fs::write(template.join(".git"), "not a gitfile\n").unwrap();

        let base = temp.path().join("cwd");
        fs::create_dir(&base).unwrap();
        let options = MaterializeOptions::new(&base, &templates);
        let mut with_git = answers();
        with_git.git_support = true;

        let dest = materialize(&manifest("x"), &with_git, &options)
            .await
            .unwrap();

        assert!(dest.join(MANIFEST_FILE).is_file());
        assert!(dest.join("index.js").is_file());
        assert!(dest.join(".git").is_file());
    }
}
