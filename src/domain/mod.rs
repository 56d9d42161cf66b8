//! Pure domain types with minimal dependencies
//!
//! Types here know nothing about rasterization or file formats.

pub mod geometry;
pub mod topology;
pub mod transform;

pub use geometry::*;
pub use topology::*;
pub use transform::*;
