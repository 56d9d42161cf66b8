//! Rendering module
//!
//! This module contains:
//! - Coordinate-space conversions shared by every render target
//! - UV wireframe rasterization (reference backdrop)
//! - Preview and bake compositing using tiny-skia

pub mod composite;
pub mod geometry;
pub mod wireframe;

pub use composite::{render_bake, render_preview};
pub use geometry::{BAKE_SIZE, placement_transform};
pub use wireframe::{WireframeStyle, rasterize_wireframe};
