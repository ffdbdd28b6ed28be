//! Text rasterization (font glyphs → RGBA image).
//!
//! Text is laid out on a single line with `fontdue` and blended into a
//! transparent image sized to the glyph bounding box. The result is drawn
//! like any other image, see [`crate::Frame::draw_text`].

use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use image::RgbaImage;

use crate::error::{EngineError, Result};

/// A parsed font at a fixed pixel size.
pub struct Font {
    inner: fontdue::Font,
    size_px: f32,
}

impl Font {
    pub fn load(path: &Path, size_px: f32) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, size_px).map_err(|reason| EngineError::Font {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_bytes(bytes: &[u8], size_px: f32) -> Result<Self, String> {
        let inner = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(str::to_owned)?;
        Ok(Self { inner, size_px })
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Rasterizes `text` in `color`. Empty or all-whitespace text yields a 1x1 transparent image.
    pub fn rasterize(&self, text: &str, color: [u8; 4]) -> RgbaImage {
        if text.trim().is_empty() {
            return RgbaImage::new(1, 1);
        }

        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: 0.0,
            y: 0.0,
            ..LayoutSettings::default()
        });
        layout.append(&[&self.inner], &TextStyle::new(text, self.size_px, 0));

        let mut min_x = 0.0f32;
        let mut min_y = 0.0f32;
        let mut max_x = 0.0f32;
        let mut max_y = 0.0f32;
        for g in layout.glyphs() {
            min_x = min_x.min(g.x);
            min_y = min_y.min(g.y);
            max_x = max_x.max(g.x + g.width as f32);
            max_y = max_y.max(g.y + g.height as f32);
        }

        let width = (max_x - min_x).ceil().max(1.0) as u32;
        let height = (max_y - min_y).ceil().max(1.0) as u32;
        let origin_x = (-min_x).round() as i32;
        let origin_y = (-min_y).round() as i32;

        let mut image = RgbaImage::new(width, height);
        for g in layout.glyphs() {
            if g.width == 0 || g.height == 0 {
                continue;
            }

            let (metrics, bitmap) = self.inner.rasterize_config(g.key);
            let start_x = g.x.round() as i32 + origin_x;
            let start_y = g.y.round() as i32 + origin_y;

            for y in 0..metrics.height {
                for x in 0..metrics.width {
                    let coverage = bitmap[y * metrics.width + x];
                    if coverage == 0 {
                        continue;
                    }
                    let dst_x = start_x + x as i32;
                    let dst_y = start_y + y as i32;
                    if dst_x < 0 || dst_y < 0 || dst_x >= width as i32 || dst_y >= height as i32 {
                        continue;
                    }
                    blend(image.get_pixel_mut(dst_x as u32, dst_y as u32), color, coverage);
                }
            }
        }
        image
    }
}

/// Source-over blend of `color` scaled by glyph `coverage`.
fn blend(dst: &mut image::Rgba<u8>, color: [u8; 4], coverage: u8) {
    let sa = coverage as u32 * color[3] as u32 / 255;
    if sa == 0 {
        return;
    }
    let inv = 255 - sa;
    let [r, g, b, a] = dst.0;
    dst.0 = [
        ((color[0] as u32 * sa + r as u32 * inv) / 255) as u8,
        ((color[1] as u32 * sa + g as u32 * inv) / 255) as u8,
        ((color[2] as u32 * sa + b as u32 * inv) / 255) as u8,
        (sa + a as u32 * inv / 255) as u8,
    ];
}
