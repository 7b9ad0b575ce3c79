pub mod frames;
pub mod metadata;
pub mod orientation;
pub mod tags;

pub use frames::{extract_frames, ExtractedFile};
pub use metadata::extract_metadata;
pub use orientation::{classify_slice_plane, extract_slice_plane};
