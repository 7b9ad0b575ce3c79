use crate::types::{DicomSeries, SeriesMetadata};
use std::fmt;

/// Text rendering of a series' metadata
///
/// Renders the present fields in a fixed order, one labeled line each,
/// without a line terminator after the last one. Absent fields are left
/// out entirely.
pub struct MetadataReport<'a> {
    metadata: &'a SeriesMetadata,
}

impl<'a> MetadataReport<'a> {
    /// Creates a new metadata report
    pub fn new(metadata: &'a SeriesMetadata) -> Self {
        Self { metadata }
    }
}

impl<'a> fmt::Display for MetadataReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        if let Some(value) = &self.metadata.patient_name {
            lines.push(format!("Patient Name: {}", value));
        }
        if let Some(value) = &self.metadata.study_date {
            lines.push(format!("Study Date: {}", value));
        }
        if let Some(value) = &self.metadata.modality {
            lines.push(format!("Modality: {}", value));
        }
        if let Some(value) = &self.metadata.dimensions {
            lines.push(format!("Image Dimensions: {}", value));
        }
        if let Some(value) = &self.metadata.orientation {
            lines.push(format!("Orientation: {}", value));
        }
        if let Some(value) = &self.metadata.series_description {
            lines.push(format!("Series Description: {}", value));
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// Text report over a whole catalog
pub struct CatalogReport<'a> {
    catalog: &'a [DicomSeries],
}

impl<'a> CatalogReport<'a> {
    /// Creates a new catalog report
    pub fn new(catalog: &'a [DicomSeries]) -> Self {
        Self { catalog }
    }
}

impl<'a> fmt::Display for CatalogReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Series Catalog")?;
        writeln!(f, "==============")?;

        for series in self.catalog {
            writeln!(f)?;
            writeln!(
                f,
                "{} ({} frame{})",
                series.identifier(),
                series.frame_count(),
                if series.frame_count() == 1 { "" } else { "s" }
            )?;
            let rendered = MetadataReport::new(series.metadata()).to_string();
            for line in rendered.lines() {
                writeln!(f, "  {}", line)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlicePlane;

    #[test]
    fn test_partial_metadata_renders_exact_lines() {
        let metadata = SeriesMetadata {
            modality: Some("CT".to_string()),
            dimensions: Some("512 x 512".to_string()),
            ..Default::default()
        };

        let output = MetadataReport::new(&metadata).to_string();
        assert_eq!(output, "Modality: CT\nImage Dimensions: 512 x 512");
    }

    #[test]
    fn test_full_metadata_field_order() {
        let metadata = SeriesMetadata {
            patient_name: Some("Doe^Jane".to_string()),
            study_date: Some("20240131".to_string()),
            modality: Some("MR".to_string()),
            dimensions: Some("256 x 256".to_string()),
            orientation: Some(SlicePlane::Axial),
            series_description: Some("T2 FLAIR".to_string()),
        };

        let output = MetadataReport::new(&metadata).to_string();
        assert_eq!(
            output,
            "Patient Name: Doe^Jane\n\
             Study Date: 20240131\n\
             Modality: MR\n\
             Image Dimensions: 256 x 256\n\
             Orientation: Axial\n\
             Series Description: T2 FLAIR"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let metadata = SeriesMetadata {
            series_description: Some("LOCALIZER".to_string()),
            ..Default::default()
        };

        let output = MetadataReport::new(&metadata).to_string();
        assert!(!output.ends_with('\n'));
        assert_eq!(output, "Series Description: LOCALIZER");
    }

    #[test]
    fn test_empty_metadata_renders_empty() {
        let metadata = SeriesMetadata::default();
        assert_eq!(MetadataReport::new(&metadata).to_string(), "");
    }
}
