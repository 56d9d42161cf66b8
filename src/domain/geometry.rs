//! Geometric types for pointer input and drawing surfaces

use std::num::NonZeroU32;

use crate::error::{EditorError, Result};

/// A position or offset in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`
    pub fn delta_from(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Non-zero pixel dimensions of the interactive drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Viewport {
    /// Create a viewport, rejecting zero-sized surfaces
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(EditorError::Surface { width, height }),
        }
    }

    /// Get the width as u32
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    /// Get the height as u32
    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Center of the surface in pixels
    pub fn center(&self) -> Point {
        Point {
            x: self.width() as f64 / 2.0,
            y: self.height() as f64 / 2.0,
        }
    }

    /// Map a native surface pointer position (top-left origin) into the
    /// vertical-flipped space the interaction controller works in.
    ///
    /// The flip is expressed as an offset by the surface height, so drag
    /// deltas keep their on-screen direction.
    pub fn invert_pointer(&self, x: f64, y: f64) -> Point {
        Point {
            x,
            y: self.height() as f64 + y,
        }
    }
}
