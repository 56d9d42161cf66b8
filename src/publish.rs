//! Baked texture encoding and delivery

use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tiny_skia::Pixmap;

use crate::error::Result;

/// An encoded PNG texture, owned by whoever receives it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BakedTexture {
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl BakedTexture {
    /// Encode a rendered surface as PNG with straight alpha
    pub fn encode(pixmap: &Pixmap) -> Result<Self> {
        let image = pixmap_to_rgba(pixmap);
        let mut png = Vec::new();
        write_png(&mut png, &image)?;
        Ok(Self {
            width: image.width(),
            height: image.height(),
            png,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    /// Write the encoded PNG to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png)?;
        Ok(())
    }
}

/// Convert a premultiplied pixmap to a straight-alpha RGBA image
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> std::result::Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

/// Receiver of baked textures (typically the 3D renderer)
pub trait TexturePublisher {
    fn publish(&mut self, texture: &BakedTexture);
}

impl<F> TexturePublisher for F
where
    F: FnMut(&BakedTexture),
{
    fn publish(&mut self, texture: &BakedTexture) {
        self(texture)
    }
}

/// Publisher that drops every texture
#[derive(Debug, Default)]
pub struct NullPublisher;

impl TexturePublisher for NullPublisher {
    fn publish(&mut self, _texture: &BakedTexture) {}
}

/// Publisher that overwrites a file with each delivered texture
#[derive(Debug, Clone)]
pub struct FilePublisher {
    path: PathBuf,
    written: usize,
}

impl FilePublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of textures successfully written so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl TexturePublisher for FilePublisher {
    fn publish(&mut self, texture: &BakedTexture) {
        match texture.save(&self.path) {
            Ok(()) => {
                self.written += 1;
                log::info!("Wrote baked texture to {}", self.path.display());
            }
            Err(err) => log::error!("Failed to write {}: {}", self.path.display(), err),
        }
    }
}
