use emoji_picker::{favicon, EmojiCatalog, EmojiExporter, FontRasterizer, FAVICON_SIZES};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Emoji Picker Core Demo\n");

    // Search a small inline dataset the way the widget would
    let dataset = r#"{
        "emojis": {
            "crab": {"id": "crab", "keywords": ["animal", "pinch"], "skins": [{"native": "🦀"}]},
            "fire": {"id": "fire", "keywords": ["hot", "flame"], "skins": [{"native": "🔥"}]}
        }
    }"#;
    let catalog = EmojiCatalog::from_json(dataset)?;
    println!("🔍 Searching for \"flame\":");
    for entry in catalog.search("flame") {
        println!("├─ {}  {}", entry.native, entry.id);
    }
    println!();

    // Rasterize with whatever emoji-capable font the platform provides
    println!("🖼  Rendering exports...");
    let exporter = EmojiExporter::new(FontRasterizer::from_system_fonts()?);

    let sprite = exporter.sprite("🦀", "crab", 64)?;
    println!("├─ Sprite: {} ({} bytes)", sprite.filename, sprite.png.len());

    let favicon = exporter.favicon("🦀")?;
    println!(
        "├─ Favicon: {} ({} bytes, sizes {:?})",
        favicon.filename,
        favicon.ico.len(),
        FAVICON_SIZES
    );

    println!("└─ Snippet: {}\n", favicon::html_snippet("🦀"));

    std::fs::write(&sprite.filename, &sprite.png)?;
    std::fs::write(&favicon.filename, &favicon.ico)?;
    println!("✅ Wrote {} and {}", sprite.filename, favicon.filename);

    Ok(())
}
