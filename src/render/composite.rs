//! Preview and bake compositing
//!
//! Both targets are rebuilt from scratch on every call. The preview is
//! viewport-sized and carries the wireframe; the bake is always
//! `BAKE_SIZE` square and carries overlay pixels only.

use tiny_skia::{BlendMode, Color, FilterQuality, Pixmap, PixmapPaint, Transform};

use super::geometry::{BAKE_SIZE, placement_transform};
use crate::domain::{ImageTransform, Viewport};
use crate::error::{EditorError, Result};
use crate::source::OverlayImage;

fn new_surface(width: u32, height: u32) -> Result<Pixmap> {
    Pixmap::new(width, height).ok_or(EditorError::Surface { width, height })
}

/// Draw the overlay onto `target`, treating `target` as the viewport scaled
/// to its own dimensions
fn draw_overlay(
    target: &mut Pixmap,
    viewport: Viewport,
    overlay: &OverlayImage,
    transform: &ImageTransform,
) {
    let ts = placement_transform(
        transform,
        viewport,
        target.width(),
        target.height(),
        (overlay.width(), overlay.height()),
    );
    let paint = PixmapPaint {
        opacity: 1.0,
        blend_mode: BlendMode::SourceOver,
        quality: FilterQuality::Bilinear,
    };
    target.draw_pixmap(0, 0, overlay.pixmap().as_ref(), &paint, ts, None);
}

/// Render the interactive preview: wireframe backdrop plus transformed overlay
pub fn render_preview(
    viewport: Viewport,
    wireframe: Option<&Pixmap>,
    overlay: Option<&OverlayImage>,
    transform: &ImageTransform,
) -> Result<Pixmap> {
    let mut pixmap = new_surface(viewport.width(), viewport.height())?;
    pixmap.fill(Color::TRANSPARENT);

    if let Some(wireframe) = wireframe {
        pixmap.draw_pixmap(
            0,
            0,
            wireframe.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    if let Some(overlay) = overlay {
        draw_overlay(&mut pixmap, viewport, overlay, transform);
    }

    Ok(pixmap)
}

/// Render the fixed-resolution bake: overlay only, transparent elsewhere
pub fn render_bake(
    viewport: Viewport,
    overlay: &OverlayImage,
    transform: &ImageTransform,
) -> Result<Pixmap> {
    let mut pixmap = new_surface(BAKE_SIZE, BAKE_SIZE)?;
    pixmap.fill(Color::TRANSPARENT);
    draw_overlay(&mut pixmap, viewport, overlay, transform);
    Ok(pixmap)
}
