use crate::types::SeriesMetadata;
use dicom_object::InMemDicomObject;

use super::orientation::extract_slice_plane;
use super::tags::{
    get_string_value, get_u16_value, COLUMNS, MODALITY, PATIENT_NAME, ROWS, SERIES_DESCRIPTION,
    STUDY_DATE,
};

/// Extracts the descriptive metadata of one file
///
/// Never fails: an absent element simply leaves its field unset. The two
/// special cases are the dimensions, which are only formatted when both
/// Rows and Columns are present, and the orientation, which is always
/// populated (falling back to `Unknown`).
pub fn extract_metadata(dcm: &InMemDicomObject) -> SeriesMetadata {
    SeriesMetadata {
        patient_name: get_string_value(dcm, PATIENT_NAME),
        study_date: get_string_value(dcm, STUDY_DATE),
        modality: get_string_value(dcm, MODALITY),
        dimensions: extract_dimensions(dcm),
        orientation: Some(extract_slice_plane(dcm)),
        series_description: get_string_value(dcm, SERIES_DESCRIPTION),
    }
}

/// Formats `"{rows} x {cols}"` when both elements are present
fn extract_dimensions(dcm: &InMemDicomObject) -> Option<String> {
    match (get_u16_value(dcm, ROWS), get_u16_value(dcm, COLUMNS)) {
        (Some(rows), Some(cols)) => Some(format!("{} x {}", rows, cols)),
        _ => None,
    }
}
