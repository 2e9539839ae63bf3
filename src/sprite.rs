//! Standalone PNG sprite export.

use crate::error::Result;
use crate::frame::BitmapFrame;
use crate::rasterizer::Rasterize;

/// A rendered PNG sprite ready to be offered as a download
#[derive(Debug, Clone)]
pub struct Sprite {
    /// PNG-encoded image data
    pub png: Vec<u8>,
    /// Width and height in pixels
    pub size: u32,
    /// Suggested filename, e.g. `crab_64x64.png`
    pub filename: String,
}

/// Compress a frame into a self-contained PNG payload
pub fn encode_png(frame: &BitmapFrame) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, frame.size(), frame.size());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(frame.pixels())?;
        writer.finish()?;
    }
    Ok(out)
}

/// Rasterize an emoji at `size` and encode it as a square PNG sprite.
///
/// `id` is the catalog identifier used to build the suggested filename.
pub fn render_sprite<R: Rasterize>(
    rasterizer: &R,
    emoji: &str,
    id: &str,
    size: u32,
) -> Result<Sprite> {
    let frame = rasterizer.rasterize(emoji, size)?;
    frame.validate(0)?;
    let png = encode_png(&frame)?;
    Ok(Sprite {
        png,
        size,
        filename: format!("{}_{}x{}.png", id, size, size),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::SolidRasterizer;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_produces_png_bytes() {
        let payload = encode_png(&BitmapFrame::blank(16)).unwrap();
        assert!(payload.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_render_sprite_filename_and_size() {
        let rasterizer = SolidRasterizer::new([255, 0, 0, 255]);
        let sprite = render_sprite(&rasterizer, "🦀", "crab", 64).unwrap();
        assert_eq!(sprite.size, 64);
        assert_eq!(sprite.filename, "crab_64x64.png");
        assert!(sprite.png.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_encode_png_is_deterministic() {
        let frame = BitmapFrame::blank(32);
        assert_eq!(encode_png(&frame).unwrap(), encode_png(&frame).unwrap());
    }
}
