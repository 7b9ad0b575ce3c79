use crate::types::SeriesMetadata;
use dicom::pixeldata::image::DynamicImage;

/// One assembled image series
///
/// A series owns its decoded frames in display order (file discovery
/// order, then intra-file frame order) together with the metadata of the
/// first file that contributed frames. Instances are only created by the
/// series assembler and are read-only afterwards; a series always holds
/// at least one frame.
pub struct DicomSeries {
    identifier: String,
    frames: Vec<DynamicImage>,
    metadata: SeriesMetadata,
}

impl DicomSeries {
    pub(crate) fn new(
        identifier: String,
        frames: Vec<DynamicImage>,
        metadata: SeriesMetadata,
    ) -> Self {
        debug_assert!(!frames.is_empty(), "a series must hold at least one frame");
        Self {
            identifier,
            frames,
            metadata,
        }
    }

    /// Series identifier: a SeriesInstanceUID when discovered through a
    /// DICOMDIR manifest, otherwise the name of the containing directory
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Decoded frames in display order
    pub fn frames(&self) -> &[DynamicImage] {
        &self.frames
    }

    /// Number of decoded frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Metadata of the first successfully processed file
    pub fn metadata(&self) -> &SeriesMetadata {
        &self.metadata
    }
}
