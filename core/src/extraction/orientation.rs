use crate::types::SlicePlane;
use dicom_object::InMemDicomObject;

use super::tags::{get_multi_string_value, IMAGE_ORIENTATION_PATIENT};

/// Classifies the slice plane from image orientation direction cosines
///
/// The first three values are the row axis of the image plane in patient
/// space, the next three the column axis. The cross product of the two
/// gives the slice normal; whichever of its components is strictly the
/// largest in magnitude decides the plane:
///
/// - X dominant -> Sagittal
/// - Y dominant -> Coronal
/// - Z dominant -> Axial
///
/// Fewer than six values, or a tie between the largest components
/// (including the degenerate all-zero normal), yields `Unknown`. Extra
/// values beyond the sixth are ignored.
pub fn classify_slice_plane(cosines: &[f64]) -> SlicePlane {
    if cosines.len() < 6 {
        return SlicePlane::Unknown;
    }

    // Slice normal = row axis x column axis
    let zx = cosines[1] * cosines[5] - cosines[2] * cosines[4];
    let zy = cosines[2] * cosines[3] - cosines[0] * cosines[5];
    let zz = cosines[0] * cosines[4] - cosines[1] * cosines[3];

    let abs_x = zx.abs();
    let abs_y = zy.abs();
    let abs_z = zz.abs();

    if abs_x > abs_y && abs_x > abs_z {
        SlicePlane::Sagittal
    } else if abs_y > abs_x && abs_y > abs_z {
        SlicePlane::Coronal
    } else if abs_z > abs_x && abs_z > abs_y {
        SlicePlane::Axial
    } else {
        SlicePlane::Unknown
    }
}

/// Extracts the slice plane from a DICOM dataset
///
/// Reads ImageOrientationPatient as a string list; components that fail
/// to parse as numbers are substituted with 0.0. An absent element or one
/// with fewer than six values yields `Unknown`.
pub fn extract_slice_plane(dcm: &InMemDicomObject) -> SlicePlane {
    let values = match get_multi_string_value(dcm, IMAGE_ORIENTATION_PATIENT) {
        Some(values) => values,
        None => {
            log::debug!("no image orientation information found");
            return SlicePlane::Unknown;
        }
    };

    if values.len() < 6 {
        log::debug!("image orientation holds {} of 6 values", values.len());
        return SlicePlane::Unknown;
    }

    let cosines: Vec<f64> = values
        .iter()
        .map(|v| v.trim().parse::<f64>().unwrap_or(0.0))
        .collect();

    classify_slice_plane(&cosines)
}
