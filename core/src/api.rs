use crate::discovery::build_series_index;
use crate::error::Result;
use crate::extraction::extract_frames;
use crate::types::{DicomSeries, SeriesMetadata};
use std::path::Path;

/// Series catalog builder
///
/// Discovers the series of a directory, extracts the frames of every
/// referenced file, and assembles the resulting catalog. The whole build
/// is a single synchronous pass; files are processed to completion one
/// after the other and per-file failures never abort a series.
///
/// # Example
///
/// ```no_run
/// use dicomview_core::SeriesLoader;
///
/// let catalog = SeriesLoader::load("/data/study")?;
/// for series in &catalog {
///     println!("{}: {} frame(s)", series.identifier(), series.frame_count());
/// }
/// # Ok::<(), dicomview_core::DicomViewError>(())
/// ```
pub struct SeriesLoader;

impl SeriesLoader {
    /// Builds the series catalog for a directory
    ///
    /// Every discovered series accumulates the frames of its files in
    /// discovery order and takes its metadata from the first file that
    /// yields frames. Series that end up with no frames are dropped, so
    /// an empty result means the directory held no usable image data --
    /// a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DicomViewError::Traversal`] when the directory cannot
    /// be walked. No partial catalog is returned in that case.
    ///
    /// [`DicomViewError::Traversal`]: crate::error::DicomViewError::Traversal
    pub fn load(root: impl AsRef<Path>) -> Result<Vec<DicomSeries>> {
        let root = root.as_ref();
        log::info!("loading DICOM series from {}", root.display());

        let index = build_series_index(root)?;

        let mut catalog = Vec::new();
        for (identifier, paths) in index {
            log::debug!(
                "assembling series {} from {} file(s)",
                identifier,
                paths.len()
            );
            let mut frames = Vec::new();
            let mut metadata: Option<SeriesMetadata> = None;

            for path in paths {
                match extract_frames(&path) {
                    Ok(extracted) => {
                        frames.extend(extracted.frames);
                        // Keep the metadata of the first readable file
                        if metadata.is_none() {
                            metadata = Some(extracted.metadata);
                        }
                    }
                    Err(err) => {
                        log::warn!("skipping {}: {}", path.display(), err);
                    }
                }
            }

            match metadata {
                Some(metadata) if !frames.is_empty() => {
                    log::info!("series {} assembled with {} frame(s)", identifier, frames.len());
                    catalog.push(DicomSeries::new(identifier, frames, metadata));
                }
                _ => {
                    log::info!("dropping series {} with no decodable frames", identifier);
                }
            }
        }

        log::info!("catalog holds {} series", catalog.len());
        Ok(catalog)
    }
}
