use std::fmt;

/// Anatomical plane of an image slice
///
/// Derived from the ImageOrientationPatient direction cosines: the cross
/// product of the row and column axes gives the slice normal, and the
/// dominant component of that normal picks the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum SlicePlane {
    #[default]
    Unknown,
    Sagittal,
    Coronal,
    Axial,
}

impl SlicePlane {
    /// Returns whether this plane is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, SlicePlane::Unknown)
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SlicePlane::Unknown => "Unknown",
            SlicePlane::Sagittal => "Sagittal",
            SlicePlane::Coronal => "Coronal",
            SlicePlane::Axial => "Axial",
        }
    }
}

impl fmt::Display for SlicePlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(SlicePlane::default(), SlicePlane::Unknown);
        assert!(SlicePlane::default().is_unknown());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SlicePlane::Sagittal.to_string(), "Sagittal");
        assert_eq!(SlicePlane::Coronal.to_string(), "Coronal");
        assert_eq!(SlicePlane::Axial.to_string(), "Axial");
        assert_eq!(SlicePlane::Unknown.to_string(), "Unknown");
    }
}
