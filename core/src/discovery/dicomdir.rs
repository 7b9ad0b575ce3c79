use dicom_object::open_file;
use std::path::Path;

use crate::extraction::tags::{
    get_multi_string_value, get_string_value, DIRECTORY_RECORD_SEQUENCE, DIRECTORY_RECORD_TYPE,
    REFERENCED_FILE_ID, SERIES_INSTANCE_UID,
};

use super::SeriesIndex;

/// Name of the directory manifest file at the root of a structured export
pub const MANIFEST_NAME: &str = "DICOMDIR";

/// Directory record type marking an image record
const IMAGE_RECORD_TYPE: &str = "IMAGE";

/// Builds a series index from a DICOMDIR manifest at the root, if any
///
/// Walks the DirectoryRecordSequence; every IMAGE record contributes its
/// referenced file path (resolved against the root) under the record's
/// SeriesInstanceUID. Returns `None` when the manifest is absent,
/// unparseable, or yields no image record; all of these merely signal the
/// caller to fall back to filesystem traversal.
pub fn manifest_index(root: &Path) -> Option<SeriesIndex> {
    let manifest_path = root.join(MANIFEST_NAME);
    if !manifest_path.is_file() {
        log::debug!("no manifest at {}", manifest_path.display());
        return None;
    }

    log::info!("found manifest at {}", manifest_path.display());
    let manifest = match open_file(&manifest_path) {
        Ok(object) => object,
        Err(err) => {
            log::warn!(
                "failed to parse manifest {}: {}",
                manifest_path.display(),
                err
            );
            return None;
        }
    };

    let records = match manifest
        .element(DIRECTORY_RECORD_SEQUENCE)
        .ok()
        .and_then(|elem| elem.items())
    {
        Some(records) => records,
        None => {
            log::warn!("manifest holds no directory record sequence");
            return None;
        }
    };
    log::debug!("manifest holds {} directory record(s)", records.len());

    let mut index = SeriesIndex::new();
    for record in records {
        let record_type = get_string_value(record, DIRECTORY_RECORD_TYPE);
        if record_type.as_deref() != Some(IMAGE_RECORD_TYPE) {
            continue;
        }

        let path_parts = match get_multi_string_value(record, REFERENCED_FILE_ID) {
            Some(parts) => parts,
            None => {
                log::debug!("image record without a referenced file, skipping");
                continue;
            }
        };
        let series_uid = match get_string_value(record, SERIES_INSTANCE_UID) {
            Some(uid) => uid,
            None => {
                log::debug!("image record without a series identifier, skipping");
                continue;
            }
        };

        let mut file_path = root.to_path_buf();
        for part in &path_parts {
            file_path.push(part);
        }
        log::debug!("manifest image record: {}", file_path.display());
        index.entry(series_uid).or_default().push(file_path);
    }

    if index.is_empty() {
        log::info!("manifest yielded no image records");
        return None;
    }
    Some(index)
}
