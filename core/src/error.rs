use thiserror::Error;

/// Result type for dicomview operations
pub type Result<T> = std::result::Result<T, DicomViewError>;

/// Error types for dicomview operations
///
/// Only [`DicomViewError::Traversal`] is fatal to a catalog build; the
/// per-file variants are logged by the assembler and the offending file
/// is skipped.
#[derive(Error, Debug)]
pub enum DicomViewError {
    /// Directory traversal failed (permissions, I/O)
    #[error("directory traversal failed: {0}")]
    Traversal(#[from] walkdir::Error),

    /// A candidate file is not a valid DICOM container
    #[error("DICOM parse error: {0}")]
    FileParse(#[from] dicom_object::ReadError),

    /// File parsed but carries no PixelData element
    #[error("no pixel data element present")]
    NoPixelData,

    /// File parsed but none of its frames could be decoded
    #[error("no frames could be decoded from pixel data")]
    NoValidFrames,

    /// I/O error while writing exported files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error while writing exported frames
    #[error("image encoding error: {0}")]
    Encode(#[from] dicom::pixeldata::image::ImageError),
}
