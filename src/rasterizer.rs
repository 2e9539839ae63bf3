//! Glyph rasterization behind a capability seam.
//!
//! The encoder and export paths only depend on the [`Rasterize`] trait, so
//! they can be driven by synthetic buffers in tests and by a color-capable
//! backend later. [`FontRasterizer`] is the built-in backend: a fontdue
//! fallback chain drawing monochrome coverage as opaque black.

use std::path::Path;

use fontdue::layout::{
    CoordinateSystem, HorizontalAlign, Layout, LayoutSettings, TextStyle, VerticalAlign,
};
use fontdue::{Font, FontSettings};
use log::{debug, warn};

use crate::error::{PickerError, Result};
use crate::frame::{BitmapFrame, BYTES_PER_PIXEL};

/// Fraction of the target size used for the font size
const GLYPH_SCALE: f32 = 0.85;

/// Downward shift, as a fraction of the target size, correcting for the
/// typical emoji glyph sitting slightly above the optical center
const VERTICAL_ADJUSTMENT: f32 = 0.05;

/// Font files tried by [`FontRasterizer::from_system_fonts`], mirroring the
/// multi-platform emoji font stack of the picker UI
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf",
    "/usr/share/fonts/noto/NotoColorEmoji.ttf",
    "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
    "/System/Library/Fonts/Apple Color Emoji.ttc",
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// Converts a text string into a square RGBA bitmap
pub trait Rasterize {
    /// Draw `text` centered into a `size` x `size` transparent frame
    fn rasterize(&self, text: &str, size: u32) -> Result<BitmapFrame>;
}

/// Font-backed rasterizer with a fallback chain.
///
/// Each character is shaped with the first loaded font that carries a glyph
/// for it. ZWJ sequences are drawn as their constituent glyphs; color font
/// tables (CBDT/COLR) are not consulted.
pub struct FontRasterizer {
    fonts: Vec<Font>,
}

impl FontRasterizer {
    /// Load a single font from raw file data
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| PickerError::Font(e.to_string()))?;
        Ok(Self { fonts: vec![font] })
    }

    /// Load a fallback chain from font files, in priority order.
    ///
    /// Files that cannot be read or parsed are skipped; at least one font
    /// must load.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut fonts = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let data = match std::fs::read(path) {
                Ok(data) => data,
                Err(e) => {
                    debug!("skipping font {}: {}", path.display(), e);
                    continue;
                }
            };
            match Font::from_bytes(data, FontSettings::default()) {
                Ok(font) => fonts.push(font),
                Err(e) => warn!("failed to parse font {}: {}", path.display(), e),
            }
        }
        if fonts.is_empty() {
            return Err(PickerError::Font(
                "no usable font in the fallback chain".to_string(),
            ));
        }
        Ok(Self { fonts })
    }

    /// Load whatever emoji-capable fonts the platform provides
    pub fn from_system_fonts() -> Result<Self> {
        Self::from_files(SYSTEM_FONT_CANDIDATES)
    }

    /// Index of the first font covering `c`, if any
    fn font_for(&self, c: char) -> Option<usize> {
        self.fonts
            .iter()
            .position(|font| font.lookup_glyph_index(c) != 0)
    }
}

impl Rasterize for FontRasterizer {
    fn rasterize(&self, text: &str, size: u32) -> Result<BitmapFrame> {
        let px = (size as f32 * GLYPH_SCALE).floor();
        let v_offset = (size as f32 * VERTICAL_ADJUSTMENT).round() as i32;

        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: 0.0,
            y: 0.0,
            max_width: Some(size as f32),
            max_height: Some(size as f32),
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Middle,
            ..LayoutSettings::default()
        });

        let mut covered = false;
        for c in text.chars() {
            let font_index = match self.font_for(c) {
                Some(index) => {
                    covered = true;
                    index
                }
                // Fall back to the primary font's notdef glyph
                None => 0,
            };
            let mut buf = [0u8; 4];
            layout.append(
                &self.fonts,
                &TextStyle::new(c.encode_utf8(&mut buf), px, font_index),
            );
        }
        if !covered {
            return Err(PickerError::GlyphNotFound(text.to_string()));
        }

        let mut frame = vec![0u8; size as usize * size as usize * BYTES_PER_PIXEL];
        for glyph in layout.glyphs() {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (_, coverage) = self.fonts[glyph.font_index].rasterize_config(glyph.key);
            let origin_x = glyph.x.round() as i32;
            let origin_y = glyph.y.round() as i32 + v_offset;
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    let x = origin_x + col as i32;
                    let y = origin_y + row as i32;
                    if x < 0 || y < 0 || x >= size as i32 || y >= size as i32 {
                        continue;
                    }
                    let alpha = coverage[row * glyph.width + col];
                    if alpha == 0 {
                        continue;
                    }
                    let idx = (y as usize * size as usize + x as usize) * BYTES_PER_PIXEL;
                    // Opaque black ink; overlapping glyphs keep the denser cover
                    frame[idx] = 0;
                    frame[idx + 1] = 0;
                    frame[idx + 2] = 0;
                    frame[idx + 3] = frame[idx + 3].max(alpha);
                }
            }
        }

        Ok(BitmapFrame::new(size, frame))
    }
}

/// Fixed-color rasterizer for exercising export paths without font files
#[cfg(test)]
pub(crate) struct SolidRasterizer {
    color: [u8; 4],
}

#[cfg(test)]
impl SolidRasterizer {
    pub(crate) fn new(color: [u8; 4]) -> Self {
        Self { color }
    }
}

#[cfg(test)]
impl Rasterize for SolidRasterizer {
    fn rasterize(&self, _text: &str, size: u32) -> Result<BitmapFrame> {
        let mut pixels = Vec::with_capacity(size as usize * size as usize * BYTES_PER_PIXEL);
        for _ in 0..(size * size) {
            pixels.extend_from_slice(&self.color);
        }
        Ok(BitmapFrame::new(size, pixels))
    }
}
