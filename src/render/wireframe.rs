//! UV wireframe rasterization using tiny-skia
//!
//! The wireframe is drawn once per topology onto a viewport-sized pixmap and
//! reused as the backdrop for every preview redraw.

use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::uv_to_pixel;
use crate::config::LineColor;
use crate::domain::{UvTopology, Viewport};
use crate::error::{EditorError, Result};

/// Stroke settings for the reference wireframe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireframeStyle {
    pub color: LineColor,
    pub width: f32,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            color: LineColor::default(),
            width: 1.0,
        }
    }
}

/// Build a closed triangle-outline path for the whole topology
fn build_wireframe_path(topology: &UvTopology, viewport: Viewport) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for &triangle in topology.triangles() {
        let Some([a, b, c]) = topology.corners(triangle) else {
            continue;
        };
        let (ax, ay) = uv_to_pixel(a, viewport);
        let (bx, by) = uv_to_pixel(b, viewport);
        let (cx, cy) = uv_to_pixel(c, viewport);

        pb.move_to(ax, ay);
        pb.line_to(bx, by);
        pb.line_to(cx, cy);
        pb.close();
    }
    // Empty topologies produce no path
    pb.finish()
}

/// Rasterize the topology's triangle edges onto a fresh viewport-sized pixmap
pub fn rasterize_wireframe(
    topology: &UvTopology,
    viewport: Viewport,
    style: WireframeStyle,
) -> Result<Pixmap> {
    let mut pixmap =
        Pixmap::new(viewport.width(), viewport.height()).ok_or(EditorError::Surface {
            width: viewport.width(),
            height: viewport.height(),
        })?;

    if let Some(path) = build_wireframe_path(topology, viewport) {
        let [r, g, b, a] = style.color.to_rgba_u8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    log::debug!(
        "Rasterized UV wireframe: {} triangles at {}x{}",
        topology.triangles().len(),
        viewport.width(),
        viewport.height()
    );
    Ok(pixmap)
}
