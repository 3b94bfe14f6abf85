//! Local installation into the editor's extension directory

use crate::copy::copy_dir_contents;
use aurora_core::schema::EXTENSION_SCHEMA;
use aurora_core::types::{ExtensionManifest, MANIFEST_FILE};
use aurora_core::utils::get_install_root;
use aurora_core::{Error, Platform, Result, SchemaValidator};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read and validate the manifest in `dir`
pub fn load_manifest(dir: &Path) -> Result<ExtensionManifest> {
    let path = dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Err(Error::not_found(format!(
            "{} in {}",
            MANIFEST_FILE,
            dir.display()
        )));
    }

    let value = SchemaValidator::global()?.validate_file(&path, EXTENSION_SCHEMA)?;
    Ok(serde_json::from_value(value)?)
}

/// Bundle path for a manifest below `install_root` (`<name>.AEext` or `<name>.JSext`)
pub fn install_path(install_root: &Path, manifest: &ExtensionManifest) -> PathBuf {
    install_root.join(format!(
        "{}.{}",
        manifest.name,
        manifest.extension_type.bundle_extension()
    ))
}

/// Install the extension in `source_dir` for the current user.
///
/// Only supported on macOS. The whole source tree is copied into the
/// bundle directory, replacing files that already exist there.
pub fn install_extension(source_dir: &Path) -> Result<PathBuf> {
    Platform::current().require_macos("install")?;

    let root = get_install_root()
        .map_err(|e| Error::invalid_config(format!("Cannot locate install directory: {}", e)))?;
    install_into(source_dir, &root)
}

/// Install into an explicit root, without the platform check
pub fn install_into(source_dir: &Path, install_root: &Path) -> Result<PathBuf> {
    let manifest = load_manifest(source_dir)?;
    let target = install_path(install_root, &manifest);
    debug!("Installing {} to {}", manifest.name, target.display());

    fs::create_dir_all(&target)?;
    let copied = copy_dir_contents(source_dir, &target)?;

    info!(
        "Extension \"{}\" installed to {} ({} files)",
        manifest.name,
        target.display(),
        copied
    );
    Ok(target)
}
