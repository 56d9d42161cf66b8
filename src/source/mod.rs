//! Inputs supplied by external collaborators
//!
//! This module consolidates:
//! - UV topology extraction from mesh attributes (mesh.rs)
//! - Uploaded overlay image decoding (overlay.rs)

pub mod mesh;
pub mod overlay;

pub use mesh::{MeshAttributes, extract_topology};
pub use overlay::OverlayImage;
