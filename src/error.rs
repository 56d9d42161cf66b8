//! Error types for the UV editor
//!
//! Load and decode failures are recovered where they happen; the
//! compositing pipeline only ever sees validated state.

use thiserror::Error;

/// Result type alias using [`EditorError`].
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur while loading inputs, rendering, or publishing.
#[derive(Error, Debug)]
pub enum EditorError {
    /// The model's UV topology could not be loaded or parsed.
    #[error("failed to load UV topology from {source_name}: {message}")]
    TopologyLoad {
        /// Where the topology was being loaded from.
        source_name: String,
        /// Description of the failure.
        message: String,
    },

    /// A triangle references a coordinate that does not exist.
    #[error("triangle {triangle} references UV index {index}, but only {len} coordinates exist")]
    InvalidTriangle {
        /// The triangle position in the topology.
        triangle: usize,
        /// The out-of-range index.
        index: u32,
        /// Number of UV coordinates available.
        len: usize,
    },

    /// The uploaded file is not a decodable raster image.
    #[error("could not decode overlay image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The decoded image has no pixels.
    #[error("overlay image has zero width or height")]
    EmptyImage,

    /// PNG encoding of the baked texture failed.
    #[error("failed to encode texture: {0}")]
    Encode(#[from] png::EncodingError),

    /// A drawing surface with a zero dimension was requested.
    #[error("invalid surface size {width}x{height}")]
    Surface {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
