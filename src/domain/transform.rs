//! Overlay image placement and the drag modes that edit it

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a pointer drag does to the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    #[default]
    Move,
    Scale,
    Rotate,
}

impl DragMode {
    pub fn name(&self) -> &'static str {
        match self {
            DragMode::Move => "move",
            DragMode::Scale => "scale",
            DragMode::Rotate => "rotate",
        }
    }
}

impl std::str::FromStr for DragMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "move" => Ok(DragMode::Move),
            "scale" => Ok(DragMode::Scale),
            "rotate" => Ok(DragMode::Rotate),
            other => Err(format!("unknown drag mode '{other}' (expected move, scale or rotate)")),
        }
    }
}

/// Wheel scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scroll up / away from the user: zoom in
    Up,
    /// Scroll down / toward the user: zoom out
    Down,
}

impl WheelDirection {
    /// Classify a raw wheel delta; negative deltas scroll up
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 {
            WheelDirection::Up
        } else {
            WheelDirection::Down
        }
    }
}

/// Placement of the overlay image, expressed in viewport pixels relative
/// to the viewport center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub position_x: f64,
    pub position_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Unbounded; wraps visually every 360 degrees
    pub rotation_degrees: f64,
}

impl ImageTransform {
    pub const IDENTITY: ImageTransform = ImageTransform {
        position_x: 0.0,
        position_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotation_degrees: 0.0,
    };

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position_x += dx;
        self.position_y += dy;
    }

    /// Multiply both scale axes by `factor`, keeping each at or above
    /// `min_scale`. Non-finite results leave the scale unchanged.
    pub fn scale_by(&mut self, factor: f64, min_scale: f64) {
        let sx = self.scale_x * factor;
        let sy = self.scale_y * factor;
        if !sx.is_finite() || !sy.is_finite() {
            log::warn!("Ignoring non-finite scale factor {factor}");
            return;
        }
        self.scale_x = sx.max(min_scale);
        self.scale_y = sy.max(min_scale);
    }

    pub fn rotate_by(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.rotation_degrees += degrees;
        }
    }

    /// Human-readable read-out for display beside the controls
    pub fn summary(&self) -> TransformSummary {
        TransformSummary {
            position_x: self.position_x.round() as i64,
            position_y: self.position_y.round() as i64,
            scale_percent: (self.scale_x * 100.0).round() as i64,
            rotation_degrees: self.rotation_degrees.rem_euclid(360.0),
        }
    }
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rounded transform values for display. Rotation is reduced to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSummary {
    pub position_x: i64,
    pub position_y: i64,
    pub scale_percent: i64,
    pub rotation_degrees: f64,
}

impl fmt::Display for TransformSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position: X: {}, Y: {} | Scale: {}% | Rotation: {:.1}°",
            self.position_x, self.position_y, self.scale_percent, self.rotation_degrees
        )
    }
}
