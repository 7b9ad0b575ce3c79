use crate::error::{DicomViewError, Result};
use crate::types::SeriesMetadata;
use dicom::pixeldata::image::DynamicImage;
use dicom::pixeldata::PixelDecoder;
use dicom_object::open_file;
use std::path::Path;

use super::metadata::extract_metadata;
use super::tags::PIXEL_DATA;

/// Frames and metadata extracted from one file
#[derive(Debug)]
pub struct ExtractedFile {
    /// Decoded frames in their intra-file order; never empty
    pub frames: Vec<DynamicImage>,

    /// Descriptive metadata of the same file
    pub metadata: SeriesMetadata,
}

/// Extracts all decodable frames from one DICOM file
///
/// A file that cannot be parsed, has no PixelData element, or yields no
/// decodable frame at all fails as a whole and contributes nothing. A
/// decode failure of an individual frame is logged and only that frame
/// is dropped.
///
/// # Errors
///
/// - [`DicomViewError::FileParse`] when the container is unreadable
/// - [`DicomViewError::NoPixelData`] when the PixelData element is absent
/// - [`DicomViewError::NoValidFrames`] when no frame decodes successfully
pub fn extract_frames(path: &Path) -> Result<ExtractedFile> {
    log::debug!("parsing DICOM file: {}", path.display());
    let object = open_file(path)?;

    let metadata = extract_metadata(&object);

    if object.element(PIXEL_DATA).is_err() {
        return Err(DicomViewError::NoPixelData);
    }

    let decoded = match object.decode_pixel_data() {
        Ok(decoded) => decoded,
        Err(err) => {
            log::warn!(
                "failed to decode pixel data of {}: {}",
                path.display(),
                err
            );
            return Err(DicomViewError::NoValidFrames);
        }
    };

    let mut frames = Vec::new();
    for frame_idx in 0..decoded.number_of_frames() {
        match decoded.to_dynamic_image(frame_idx) {
            Ok(image) => frames.push(image),
            Err(err) => {
                log::warn!(
                    "dropping frame {} of {}: {}",
                    frame_idx,
                    path.display(),
                    err
                );
            }
        }
    }

    if frames.is_empty() {
        return Err(DicomViewError::NoValidFrames);
    }

    log::debug!(
        "extracted {} frame(s) from {}",
        frames.len(),
        path.display()
    );
    Ok(ExtractedFile { frames, metadata })
}
