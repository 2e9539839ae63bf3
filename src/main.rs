mod cli;

use clap::Parser;
use cli::{Args, Command};
use emoji_picker::{favicon, sprite, EmojiCatalog, FontRasterizer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match args.command {
        Command::Sprite {
            emoji,
            size,
            id,
            font,
            out_dir,
        } => match load_rasterizer(&font)
            .and_then(|r| sprite::render_sprite(&r, &emoji, &id, size))
        {
            Ok(sprite) => {
                let path = out_dir.join(&sprite.filename);
                match std::fs::write(&path, &sprite.png) {
                    Ok(()) => println!(
                        "Saved {}x{} sprite to {}",
                        sprite.size,
                        sprite.size,
                        path.display()
                    ),
                    Err(e) => eprintln!("Error writing sprite: {:#?}", e),
                }
            }
            Err(e) => eprintln!("Error rendering sprite: {:#?}", e),
        },
        Command::Favicon {
            emoji,
            font,
            output,
        } => match load_rasterizer(&font).and_then(|r| favicon::render_favicon(&r, &emoji)) {
            Ok(favicon) => {
                for skipped in &favicon.skipped {
                    eprintln!(
                        "Warning: frame {} ({}px) skipped: {}",
                        skipped.index, skipped.size, skipped.reason
                    );
                }
                match std::fs::write(&output, &favicon.ico) {
                    Ok(()) => println!("Saved favicon to {}", output.display()),
                    Err(e) => eprintln!("Error writing favicon: {:#?}", e),
                }
            }
            Err(e) => eprintln!("Error rendering favicon: {:#?}", e),
        },
        Command::Snippet { emoji } => {
            println!("{}", favicon::html_snippet(&emoji));
        }
        Command::Search { query, data } => {
            let result = std::fs::read_to_string(&data)
                .map_err(emoji_picker::PickerError::from)
                .and_then(|json| EmojiCatalog::from_json(&json));
            match result {
                Ok(catalog) => {
                    for entry in catalog.search(&query) {
                        println!("{}  {}  [{}]", entry.native, entry.id, entry.keywords.join(", "));
                    }
                }
                Err(e) => eprintln!("Error loading dataset: {:#?}", e),
            }
        }
    }
}

/// Build the rasterizer from explicit font paths, falling back to the
/// platform font candidates when none were given.
fn load_rasterizer(fonts: &[std::path::PathBuf]) -> emoji_picker::Result<FontRasterizer> {
    if fonts.is_empty() {
        FontRasterizer::from_system_fonts()
    } else {
        FontRasterizer::from_files(fonts)
    }
}
