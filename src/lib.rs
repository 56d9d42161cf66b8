//! UV texture projection editor
//!
//! Places a design image over a model's unwrapped UV layout and bakes the
//! result into a fixed-size PNG texture for a 3D renderer.
//!
//! - `source`: UV topology extraction and overlay decoding
//! - `render`: wireframe rasterization, preview and bake compositing
//! - `session`: the `Editor` context, drag handling and load tracking
//! - `publish`: PNG encoding and delivery of baked textures

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod publish;
pub mod render;
pub mod session;
pub mod source;

pub use config::EditorConfig;
pub use domain::{
    DragMode, ImageTransform, Point, UvCoord, UvTopology, UvTriangle, Viewport, WheelDirection,
};
pub use error::{EditorError, Result};
pub use publish::{BakedTexture, TexturePublisher};
pub use render::BAKE_SIZE;
pub use session::{Editor, EditorMsg, EditorStatus};
pub use source::{MeshAttributes, OverlayImage, extract_topology};
