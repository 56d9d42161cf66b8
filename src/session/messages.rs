//! Message types for an editor session
//!
//! Every user-facing control maps to one `EditorMsg`; `Editor::update`
//! is the single entry point that handles them.

use crate::domain::{DragMode, Point, WheelDirection};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorMsg {
    /// Select what subsequent drags do
    SetMode(DragMode),
    /// Pointer pressed, in controller space
    PointerDown(Point),
    /// Pointer moved, in controller space
    PointerMove(Point),
    /// Pointer released; bakes and publishes
    PointerUp,
    /// One wheel step; bakes and publishes
    Wheel(WheelDirection),
    /// Restore the identity transform
    Reset,
    /// Bake and publish the current state
    Apply,
}
