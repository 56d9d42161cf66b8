//! Overlay image type for uploaded designs

use image::RgbaImage;
use tiny_skia::{ColorU8, Pixmap};

use crate::error::{EditorError, Result};

/// A decoded design image, stored as a premultiplied pixmap ready for
/// compositing
#[derive(Clone, Debug)]
pub struct OverlayImage {
    pixmap: Pixmap,
}

impl OverlayImage {
    /// Decode an uploaded PNG or JPEG file
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_rgba(rgba)
    }

    /// Wrap already-decoded pixels
    pub fn from_rgba(rgba: RgbaImage) -> Result<Self> {
        let Some(mut pixmap) = Pixmap::new(rgba.width(), rgba.height()) else {
            return Err(EditorError::EmptyImage);
        };
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        log::debug!(
            "OverlayImage decoded: {}x{} pixels",
            rgba.width(),
            rgba.height()
        );
        Ok(Self { pixmap })
    }

    /// Get the width of the image
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Get the height of the image
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_png() {
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 128]));
        let overlay = OverlayImage::decode(&encode_png(&img)).unwrap();
        assert_eq!((overlay.width(), overlay.height()), (3, 2));

        // Pixmap stores premultiplied color
        let px = overlay.pixmap().pixel(2, 1).unwrap();
        assert_eq!(px.alpha(), 128);
        assert_eq!(px.red(), 128);
        assert_eq!(px.demultiply().red(), 255);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = OverlayImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, EditorError::ImageDecode(_)));
    }

    #[test]
    fn test_empty_image_rejected() {
        let err = OverlayImage::from_rgba(RgbaImage::new(0, 5)).unwrap_err();
        assert!(matches!(err, EditorError::EmptyImage));
    }
}
