use crate::error::Result;
use std::path::Path;
use walkdir::WalkDir;

use super::SeriesIndex;

/// Filename suffixes treated as DICOM containers (case-insensitive)
const DICOM_SUFFIXES: [&str; 3] = [".dcm", ".dicom", ".ima"];

/// Builds a series index by recursively walking the directory tree
///
/// Every regular file with a recognized container suffix, or with no
/// extension at all (a common layout for exported studies), is assigned
/// to a series keyed by the name of its immediate parent directory.
/// Other files are skipped silently.
///
/// # Errors
///
/// Any traversal error aborts the whole build.
pub fn filesystem_index(root: &Path) -> Result<SeriesIndex> {
    let mut index = SeriesIndex::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_lowercase();
        if !is_candidate_name(&name) {
            log::debug!("skipping non-DICOM file: {}", entry.path().display());
            continue;
        }

        let series_key = entry
            .path()
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());

        log::debug!(
            "found candidate DICOM file: {} (series {})",
            entry.path().display(),
            series_key
        );
        index.entry(series_key).or_default().push(entry.into_path());
    }

    Ok(index)
}

/// Candidate check on the lowercased file name
fn is_candidate_name(name: &str) -> bool {
    DICOM_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) || !name.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_candidate_names() {
        assert!(is_candidate_name("slice.dcm"));
        assert!(is_candidate_name("slice.dicom"));
        assert!(is_candidate_name("slice.ima"));
        assert!(is_candidate_name("im000001"));
        assert!(!is_candidate_name("notes.txt"));
        assert!(!is_candidate_name("archive.tar.gz"));
    }

    #[test]
    fn test_groups_by_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let se1 = temp_dir.path().join("SE000001");
        let se2 = temp_dir.path().join("SE000002");
        fs::create_dir_all(&se1).unwrap();
        fs::create_dir_all(&se2).unwrap();

        File::create(se1.join("a.dcm")).unwrap();
        File::create(se1.join("b.DCM")).unwrap(); // uppercase
        File::create(se1.join("IM000003")).unwrap(); // no extension
        File::create(se1.join("report.txt")).unwrap(); // skipped
        File::create(se2.join("c.ima")).unwrap();

        let index = filesystem_index(temp_dir.path()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index["SE000001"].len(), 3);
        assert_eq!(index["SE000002"].len(), 1);
    }

    #[test]
    fn test_root_level_files_keyed_by_root_name() {
        let temp_dir = TempDir::new().unwrap();
        File::create(temp_dir.path().join("solo.dicom")).unwrap();

        let index = filesystem_index(temp_dir.path()).unwrap();
        let root_name = temp_dir
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();

        assert_eq!(index.len(), 1);
        assert_eq!(index[&root_name].len(), 1);
    }

    #[test]
    fn test_empty_tree_yields_empty_index() {
        let temp_dir = TempDir::new().unwrap();
        let index = filesystem_index(temp_dir.path()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_missing_root_is_a_traversal_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does_not_exist");

        assert!(filesystem_index(&missing).is_err());
    }
}
