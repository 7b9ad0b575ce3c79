use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Patient/Study Tags
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);

// Image Geometry Tags
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);

// Pixel Data
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

// DICOMDIR Directory Record Tags
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present, cannot be converted to
/// string, or trims to the empty string (absent and empty are treated
/// alike so that blank elements never surface as placeholder values)
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Helper to get multi-string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to Vec<String>
pub fn get_multi_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<String>> {
    dcm.element(tag).ok().and_then(|elem| {
        if let Ok(strs) = elem.to_multi_str() {
            Some(strs.iter().map(|s| s.trim().to_string()).collect())
        } else {
            // Fallback: single string split on the DICOM value separator
            elem.to_str()
                .ok()
                .map(|s| s.split('\\').map(|part| part.trim().to_string()).collect())
        }
    })
}

/// Helper to get u16 value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to u16
pub fn get_u16_value(dcm: &InMemDicomObject, tag: Tag) -> Option<u16> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<u16>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    #[test]
    fn test_tag_values() {
        // Just ensure tags are correctly defined
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(DIRECTORY_RECORD_SEQUENCE, Tag(0x0004, 0x1220));
    }

    #[test]
    fn test_get_string_value_trims() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            MODALITY,
            VR::CS,
            PrimitiveValue::from("CT "),
        ));

        assert_eq!(get_string_value(&dcm, MODALITY), Some("CT".to_string()));
    }

    #[test]
    fn test_get_string_value_empty_is_absent() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            SERIES_DESCRIPTION,
            VR::LO,
            PrimitiveValue::from("  "),
        ));

        assert_eq!(get_string_value(&dcm, SERIES_DESCRIPTION), None);
        assert_eq!(get_string_value(&dcm, PATIENT_NAME), None);
    }

    #[test]
    fn test_get_multi_string_value() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            REFERENCED_FILE_ID,
            VR::CS,
            PrimitiveValue::Strs(vec!["SE000001".to_string(), "IM000001".to_string()].into()),
        ));

        assert_eq!(
            get_multi_string_value(&dcm, REFERENCED_FILE_ID),
            Some(vec!["SE000001".to_string(), "IM000001".to_string()])
        );
    }

    #[test]
    fn test_get_u16_value() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(ROWS, VR::US, PrimitiveValue::from(512u16)));

        assert_eq!(get_u16_value(&dcm, ROWS), Some(512));
        assert_eq!(get_u16_value(&dcm, COLUMNS), None);
    }
}
