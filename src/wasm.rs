use wasm_bindgen::prelude::*;

use crate::{favicon, sprite, EmojiCatalog, EmojiExporter, FontRasterizer};

#[wasm_bindgen]
pub fn init() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
}

/// Browser-facing picker core: a catalog plus an exporter around a font
/// supplied by the page (the browser's own font stack is not reachable from
/// wasm, so the font file travels in as bytes).
#[wasm_bindgen]
pub struct WasmEmojiPicker {
    catalog: EmojiCatalog,
    exporter: EmojiExporter<FontRasterizer>,
}

#[wasm_bindgen]
impl WasmEmojiPicker {
    #[wasm_bindgen(constructor)]
    pub fn new(font_data: &[u8]) -> Result<WasmEmojiPicker, JsValue> {
        init();
        let rasterizer = FontRasterizer::from_bytes(font_data)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmEmojiPicker {
            catalog: EmojiCatalog::default(),
            exporter: EmojiExporter::new(rasterizer),
        })
    }

    /// Load an emoji-mart JSON dataset fetched by the page
    #[wasm_bindgen]
    pub fn load_catalog(&mut self, json: &str) -> Result<(), JsValue> {
        self.catalog =
            EmojiCatalog::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Number of emojis in the loaded catalog
    #[wasm_bindgen]
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Search the catalog; returns an array of `{id, native, keywords}`
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let matches = self.catalog.search(query);
        serde_wasm_bindgen::to_value(&matches).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Render a PNG sprite for an emoji; returns the PNG bytes
    #[wasm_bindgen]
    pub fn sprite_png(&self, emoji: &str, id: &str, size: u32) -> Result<Vec<u8>, JsValue> {
        self.exporter
            .sprite(emoji, id, size)
            .map(|s| s.png)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Suggested filename for a sprite download
    #[wasm_bindgen]
    pub fn sprite_filename(&self, id: &str, size: u32) -> String {
        format!("{}_{}x{}.png", id, size, size)
    }

    /// Render the multi-resolution favicon; returns the ICO bytes
    #[wasm_bindgen]
    pub fn favicon_ico(&self, emoji: &str) -> Result<Vec<u8>, JsValue> {
        self.exporter
            .favicon(emoji)
            .map(|f| f.ico)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The legacy SVG `<link>` snippet for an emoji
    #[wasm_bindgen]
    pub fn favicon_snippet(&self, emoji: &str) -> String {
        favicon::html_snippet(emoji)
    }
}

/// Encode caller-supplied RGBA frames into an ICO without rasterizing,
/// for pages that draw onto a canvas themselves. `sizes` and `buffers`
/// must have the same length.
#[wasm_bindgen]
pub fn encode_ico(sizes: Vec<u32>, buffers: js_sys::Array) -> Result<Vec<u8>, JsValue> {
    if sizes.len() != buffers.length() as usize {
        return Err(JsValue::from_str("sizes and buffers must match in length"));
    }
    let frames: Vec<crate::BitmapFrame> = sizes
        .into_iter()
        .zip(buffers.iter())
        .map(|(size, buffer)| {
            let pixels = js_sys::Uint8Array::new(&buffer).to_vec();
            crate::BitmapFrame::new(size, pixels)
        })
        .collect();
    crate::ico::encode(&frames).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a single RGBA frame as a PNG, for canvas-less sprite export
#[wasm_bindgen]
pub fn encode_sprite_png(size: u32, pixels: &[u8]) -> Result<Vec<u8>, JsValue> {
    let frame = crate::BitmapFrame::new(size, pixels.to_vec());
    frame
        .validate(0)
        .and_then(|_| sprite::encode_png(&frame))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
