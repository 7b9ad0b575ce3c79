use crate::types::SlicePlane;

/// Descriptive metadata for one series
///
/// Populated from the first file of a series that yields frames; fields
/// whose source element is absent stay `None` and are omitted from any
/// rendering. The orientation is the exception: the extractor always sets
/// it, falling back to [`SlicePlane::Unknown`] when the orientation
/// element is absent or malformed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SeriesMetadata {
    /// Patient name (PatientName)
    pub patient_name: Option<String>,

    /// Study date (StudyDate)
    pub study_date: Option<String>,

    /// Imaging modality, e.g. "CT" or "MR" (Modality)
    pub modality: Option<String>,

    /// Pixel matrix size rendered as `"{rows} x {cols}"`; present only
    /// when both Rows and Columns are present
    pub dimensions: Option<String>,

    /// Slice plane classified from ImageOrientationPatient
    pub orientation: Option<SlicePlane>,

    /// Free-text series description (SeriesDescription)
    pub series_description: Option<String>,
}
