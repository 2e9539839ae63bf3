//! Core library of an emoji picker widget: emoji dataset search, glyph
//! rasterization behind a capability seam, PNG sprite export, and
//! multi-resolution ICO favicon export.

pub mod catalog;
pub mod error;
pub mod favicon;
pub mod frame;
pub mod ico;
pub mod rasterizer;
pub mod sprite;

#[cfg(feature = "wasm-bindgen")]
pub mod wasm;

pub use catalog::{EmojiCatalog, EmojiEntry};
pub use error::{PickerError, Result};
pub use favicon::{Favicon, FAVICON_FILENAME, FAVICON_SIZES};
pub use frame::BitmapFrame;
pub use ico::SkippedFrame;
pub use rasterizer::{FontRasterizer, Rasterize};
pub use sprite::Sprite;

/// Export facade tying a rasterizer to the sprite and favicon paths.
///
/// The emoji to export is always an explicit argument; the facade carries no
/// selection state between calls.
pub struct EmojiExporter<R: Rasterize> {
    rasterizer: R,
}

impl<R: Rasterize> EmojiExporter<R> {
    /// Create an exporter around a rasterizer backend
    pub fn new(rasterizer: R) -> Self {
        Self { rasterizer }
    }

    /// Render a single-size PNG sprite for `emoji`
    pub fn sprite(&self, emoji: &str, id: &str, size: u32) -> Result<Sprite> {
        sprite::render_sprite(&self.rasterizer, emoji, id, size)
    }

    /// Render the multi-resolution ICO favicon for `emoji`
    pub fn favicon(&self, emoji: &str) -> Result<Favicon> {
        favicon::render_favicon(&self.rasterizer, emoji)
    }

    /// The legacy markup-only favicon variant
    pub fn favicon_snippet(&self, emoji: &str) -> String {
        favicon::html_snippet(emoji)
    }

    /// Access the underlying rasterizer
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::SolidRasterizer;

    #[test]
    fn test_exporter_end_to_end() {
        let exporter = EmojiExporter::new(SolidRasterizer::new([10, 20, 30, 255]));

        let sprite = exporter.sprite("🦀", "crab", 32).unwrap();
        assert_eq!(sprite.filename, "crab_32x32.png");

        let favicon = exporter.favicon("🦀").unwrap();
        assert_eq!(favicon.filename, FAVICON_FILENAME);
        assert!(!favicon.ico.is_empty());

        assert!(exporter.favicon_snippet("🦀").contains("%F0%9F%A6%80"));
    }
}
