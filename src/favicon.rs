//! Favicon export: a multi-resolution ICO, plus the legacy SVG snippet.

use crate::error::Result;
use crate::frame::BitmapFrame;
use crate::ico::{self, SkippedFrame};
use crate::rasterizer::Rasterize;

/// Resolutions rendered into the favicon, smallest first
pub const FAVICON_SIZES: [u32; 5] = [16, 24, 32, 48, 64];

/// Suggested filename for the exported container
pub const FAVICON_FILENAME: &str = "favicon.ico";

/// A rendered favicon ready to be offered as a download
#[derive(Debug)]
pub struct Favicon {
    /// ICO-encoded container data
    pub ico: Vec<u8>,
    /// Suggested filename
    pub filename: String,
    /// Frames that failed to encode and were left out
    pub skipped: Vec<SkippedFrame>,
}

/// Rasterize `emoji` at every size in [`FAVICON_SIZES`] and pack the frames
/// into an ICO container.
pub fn render_favicon<R: Rasterize>(rasterizer: &R, emoji: &str) -> Result<Favicon> {
    let frames = FAVICON_SIZES
        .iter()
        .map(|&size| rasterizer.rasterize(emoji, size))
        .collect::<Result<Vec<BitmapFrame>>>()?;
    let (ico, skipped) = ico::encode_with_report(&frames)?;
    Ok(Favicon {
        ico,
        filename: FAVICON_FILENAME.to_string(),
        skipped,
    })
}

/// Build the legacy `<link rel="icon">` snippet embedding the emoji as an
/// inline SVG data URI. Superseded by [`render_favicon`] but kept for pages
/// that want a markup-only favicon.
pub fn html_snippet(emoji: &str) -> String {
    format!(
        "<link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text x=%2250%22 y=%2275%22 font-size=%2280%22 text-anchor=%22middle%22>{}</text></svg>\">",
        encode_uri_component(emoji)
    )
}

/// Percent-encode a string the way JavaScript's `encodeURIComponent` does:
/// everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX` per
/// UTF-8 byte.
fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;
    use crate::ico::{DIR_ENTRY_SIZE, HEADER_SIZE};
    use crate::rasterizer::SolidRasterizer;

    #[test]
    fn test_favicon_contains_every_size() {
        let rasterizer = SolidRasterizer::new([0, 0, 0, 255]);
        let favicon = render_favicon(&rasterizer, "🦀").unwrap();
        assert_eq!(favicon.filename, "favicon.ico");
        assert!(favicon.skipped.is_empty());

        let count = u16::from_le_bytes([favicon.ico[4], favicon.ico[5]]);
        assert_eq!(count as usize, FAVICON_SIZES.len());
        for (i, &size) in FAVICON_SIZES.iter().enumerate() {
            let entry = HEADER_SIZE + i * DIR_ENTRY_SIZE;
            assert_eq!(favicon.ico[entry] as u32, size);
            assert_eq!(favicon.ico[entry + 1] as u32, size);
        }
    }

    #[test]
    fn test_rasterizer_failure_propagates() {
        struct FailingRasterizer;
        impl Rasterize for FailingRasterizer {
            fn rasterize(&self, text: &str, _size: u32) -> crate::error::Result<BitmapFrame> {
                Err(PickerError::GlyphNotFound(text.to_string()))
            }
        }
        assert!(matches!(
            render_favicon(&FailingRasterizer, "🦀"),
            Err(PickerError::GlyphNotFound(_))
        ));
    }

    #[test]
    fn test_encode_uri_component_matches_js() {
        assert_eq!(encode_uri_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(encode_uri_component("a b"), "a%20b");
        // U+1F980 CRAB, four UTF-8 bytes
        assert_eq!(encode_uri_component("🦀"), "%F0%9F%A6%80");
    }

    #[test]
    fn test_snippet_shape() {
        let snippet = html_snippet("🦀");
        assert!(snippet.starts_with("<link rel=\"icon\""));
        assert!(snippet.contains("data:image/svg+xml,"));
        assert!(snippet.contains("%F0%9F%A6%80"));
        assert!(snippet.ends_with("</text></svg>\">"));
    }
}
