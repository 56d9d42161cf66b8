//! Coordinate-space conversions shared by the preview and bake targets
//!
//! Model UV space maps onto the viewport; the viewport maps onto any output
//! surface by a plain axis scale. Both render targets go through
//! [`placement_transform`] so their composition cannot drift apart.

use tiny_skia::Transform;

use crate::domain::{ImageTransform, UvCoord, Viewport};

/// Edge length of the baked texture in pixels
pub const BAKE_SIZE: u32 = 1024;

/// Map a UV coordinate to viewport pixels. No vertical flip: `v = 0` lands
/// on pixel row 0.
#[inline]
pub fn uv_to_pixel(uv: UvCoord, viewport: Viewport) -> (f32, f32) {
    (uv.u * viewport.width() as f32, uv.v * viewport.height() as f32)
}

/// Scale taking viewport pixels to output pixels
#[inline]
pub fn output_scale(viewport: Viewport, output_width: u32, output_height: u32) -> (f32, f32) {
    (
        output_width as f32 / viewport.width() as f32,
        output_height as f32 / viewport.height() as f32,
    )
}

/// Transform that draws an image of `image_size` with its top-left at the
/// origin so that it lands where the overlay belongs on an output surface of
/// `output_width` x `output_height`.
///
/// Composition order: viewport-to-output scale, translate to viewport center
/// plus offset, rotate, scale, then shift by half the image so it is centered.
pub fn placement_transform(
    transform: &ImageTransform,
    viewport: Viewport,
    output_width: u32,
    output_height: u32,
    image_size: (u32, u32),
) -> Transform {
    let (sx, sy) = output_scale(viewport, output_width, output_height);
    let center = viewport.center();
    let (iw, ih) = image_size;

    Transform::from_scale(sx, sy)
        .pre_translate(
            (center.x + transform.position_x) as f32,
            (center.y + transform.position_y) as f32,
        )
        .pre_rotate(transform.rotation_degrees.rem_euclid(360.0) as f32)
        .pre_scale(transform.scale_x as f32, transform.scale_y as f32)
        .pre_translate(-(iw as f32) / 2.0, -(ih as f32) / 2.0)
}
