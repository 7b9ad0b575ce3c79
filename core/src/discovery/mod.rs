//! Series discovery: mapping a directory to per-series file lists
//!
//! Two mutually exclusive strategies are tried in order. A DICOMDIR
//! manifest at the root wins when it parses and references at least one
//! image; otherwise the tree is walked and files are grouped by their
//! parent directory.

mod dicomdir;
mod walk;

pub use dicomdir::{manifest_index, MANIFEST_NAME};
pub use walk::filesystem_index;

use crate::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mapping from series identifier to its file paths in discovery order
pub type SeriesIndex = HashMap<String, Vec<PathBuf>>;

/// Builds the series index for a directory
///
/// # Errors
///
/// Only filesystem traversal failures surface; manifest problems are
/// logged and resolved by falling back to the walk.
pub fn build_series_index(root: &Path) -> Result<SeriesIndex> {
    if let Some(index) = manifest_index(root) {
        log::info!("manifest discovery found {} series", index.len());
        return Ok(index);
    }

    log::info!("falling back to filesystem traversal of {}", root.display());
    let index = filesystem_index(root)?;
    log::info!("filesystem discovery found {} series", index.len());
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_without_manifest_uses_walk() {
        let temp_dir = TempDir::new().unwrap();
        let series_dir = temp_dir.path().join("SE000007");
        fs::create_dir_all(&series_dir).unwrap();
        File::create(series_dir.join("slice.dcm")).unwrap();

        let index = build_series_index(temp_dir.path()).unwrap();

        assert_eq!(index.len(), 1);
        assert!(index.contains_key("SE000007"));
    }

    #[test]
    fn test_corrupt_manifest_falls_back_to_walk() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join(MANIFEST_NAME))
            .unwrap()
            .write_all(b"not a manifest")
            .unwrap();
        let series_dir = temp_dir.path().join("SE000001");
        fs::create_dir_all(&series_dir).unwrap();
        File::create(series_dir.join("slice.dcm")).unwrap();

        let index = build_series_index(temp_dir.path()).unwrap();

        // The fallback walk decides, exactly as it would on its own
        assert_eq!(index, filesystem_index(temp_dir.path()).unwrap());
        assert!(index.contains_key("SE000001"));
    }
}
