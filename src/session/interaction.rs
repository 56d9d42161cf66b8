//! Pointer and wheel handling for the overlay transform
//!
//! A drag is incremental: each move applies the delta since the previous
//! pointer position and then re-anchors, so there is no accumulated drift.

use crate::config::EditorConfig;
use crate::domain::{DragMode, ImageTransform, Point, WheelDirection};

/// Per-pixel response of each drag mode and the wheel zoom steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTuning {
    pub move_sensitivity: f64,
    pub scale_sensitivity: f64,
    pub rotate_sensitivity: f64,
    pub wheel_zoom_in: f64,
    pub wheel_zoom_out: f64,
    pub min_scale: f64,
}

impl Default for DragTuning {
    fn default() -> Self {
        Self::from(&EditorConfig::default())
    }
}

impl From<&EditorConfig> for DragTuning {
    fn from(config: &EditorConfig) -> Self {
        Self {
            move_sensitivity: config.move_sensitivity,
            scale_sensitivity: config.scale_sensitivity,
            rotate_sensitivity: config.rotate_sensitivity,
            wheel_zoom_in: config.wheel_zoom_in,
            wheel_zoom_out: config.wheel_zoom_out,
            min_scale: config.min_scale,
        }
    }
}

/// An open pointer drag. Exists only between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Mode captured at pointer-down
    pub mode: DragMode,
    /// Last pointer position in controller space
    pub anchor: Point,
}

impl DragSession {
    pub fn begin(mode: DragMode, anchor: Point) -> Self {
        Self { mode, anchor }
    }

    /// Apply the movement from the anchor to `current`, then re-anchor
    pub fn advance(&mut self, current: Point, transform: &mut ImageTransform, tuning: &DragTuning) {
        let delta = current.delta_from(self.anchor);
        match self.mode {
            DragMode::Move => {
                transform.translate(
                    delta.x * tuning.move_sensitivity,
                    delta.y * tuning.move_sensitivity,
                );
            }
            DragMode::Scale => {
                // Vertical distance drives uniform scale
                let factor = 1.0 + delta.y * tuning.scale_sensitivity;
                transform.scale_by(factor, tuning.min_scale);
            }
            DragMode::Rotate => {
                transform.rotate_by(delta.x * tuning.rotate_sensitivity);
            }
        }
        self.anchor = current;
    }
}

/// Apply one wheel step to both scale axes
pub fn apply_wheel(transform: &mut ImageTransform, direction: WheelDirection, tuning: &DragTuning) {
    let factor = match direction {
        WheelDirection::Up => tuning.wheel_zoom_in,
        WheelDirection::Down => tuning.wheel_zoom_out,
    };
    transform.scale_by(factor, tuning.min_scale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_drag() {
        let tuning = DragTuning::default();
        let mut t = ImageTransform {
            position_x: 5.0,
            position_y: -5.0,
            ..ImageTransform::IDENTITY
        };
        let mut drag = DragSession::begin(DragMode::Move, Point::new(100.0, 100.0));
        drag.advance(Point::new(150.0, 120.0), &mut t, &tuning);
        assert_eq!((t.position_x, t.position_y), (55.0, 15.0));
        assert_eq!(drag.anchor, Point::new(150.0, 120.0));
    }

    #[test]
    fn test_move_is_incremental() {
        let tuning = DragTuning::default();
        let mut t = ImageTransform::IDENTITY;
        let mut drag = DragSession::begin(DragMode::Move, Point::new(0.0, 0.0));
        drag.advance(Point::new(10.0, 0.0), &mut t, &tuning);
        drag.advance(Point::new(10.0, 0.0), &mut t, &tuning);
        drag.advance(Point::new(4.0, 3.0), &mut t, &tuning);
        assert_eq!((t.position_x, t.position_y), (4.0, 3.0));
    }

    #[test]
    fn test_scale_drag_uses_vertical_delta() {
        let tuning = DragTuning::default();
        let mut t = ImageTransform::IDENTITY;
        let mut drag = DragSession::begin(DragMode::Scale, Point::new(0.0, 0.0));
        drag.advance(Point::new(500.0, 20.0), &mut t, &tuning);
        assert!((t.scale_x - 1.2).abs() < 1e-12);
        assert_eq!(t.scale_x, t.scale_y);
        assert_eq!((t.position_x, t.rotation_degrees), (0.0, 0.0));
    }

    #[test]
    fn test_scale_drag_clamps_large_shrink() {
        let tuning = DragTuning::default();
        let mut t = ImageTransform::IDENTITY;
        let mut drag = DragSession::begin(DragMode::Scale, Point::new(0.0, 300.0));
        drag.advance(Point::new(0.0, 0.0), &mut t, &tuning);
        assert_eq!((t.scale_x, t.scale_y), (tuning.min_scale, tuning.min_scale));
    }

    #[test]
    fn test_rotate_drag_uses_horizontal_delta() {
        let tuning = DragTuning::default();
        let mut t = ImageTransform::IDENTITY;
        let mut drag = DragSession::begin(DragMode::Rotate, Point::new(0.0, 0.0));
        drag.advance(Point::new(30.0, 400.0), &mut t, &tuning);
        assert_eq!(t.rotation_degrees, 15.0);
        assert_eq!((t.scale_x, t.position_y), (1.0, 0.0));
    }

    #[test]
    fn test_wheel_up_multiplies_by_step() {
        let tuning = DragTuning::default();
        let mut t = ImageTransform {
            scale_x: 2.0,
            scale_y: 3.0,
            ..ImageTransform::IDENTITY
        };
        apply_wheel(&mut t, WheelDirection::Up, &tuning);
        assert_eq!((t.scale_x, t.scale_y), (2.0 * 1.1, 3.0 * 1.1));
        apply_wheel(&mut t, WheelDirection::Down, &tuning);
        assert_eq!(t.scale_x, 2.0 * 1.1 * 0.9);
    }

    #[test]
    fn test_reciprocal_wheel_round_trip() {
        let tuning = DragTuning {
            wheel_zoom_out: 1.0 / 1.1,
            ..DragTuning::default()
        };
        let mut t = ImageTransform::IDENTITY;
        for _ in 0..10 {
            apply_wheel(&mut t, WheelDirection::Up, &tuning);
        }
        for _ in 0..10 {
            apply_wheel(&mut t, WheelDirection::Down, &tuning);
        }
        assert!((t.scale_x - 1.0).abs() < 1e-6);
    }
}
