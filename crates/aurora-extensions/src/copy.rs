//! Recursive directory copy

use aurora_core::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::trace;
use walkdir::WalkDir;

/// Copy everything below `src` into `dst`, creating directories as needed.
///
/// Existing files in `dst` with the same relative path are overwritten.
/// Returns the number of files copied.
pub fn copy_dir_contents(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            trace!("Copied {} -> {}", entry.path().display(), target.display());
            copied += 1;
        }
    }

    Ok(copied)
}
