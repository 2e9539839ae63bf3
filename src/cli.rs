use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Emoji sprite and favicon tools")]
pub struct Args {
    /// Command to execute
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Render an emoji to a square PNG sprite
    Sprite {
        /// The emoji text to render
        emoji: String,

        /// Sprite dimension in pixels
        #[clap(long, default_value_t = 64)]
        size: u32,

        /// Basename used for the output file (defaults to "emoji")
        #[clap(long, default_value = "emoji")]
        id: String,

        /// Font file(s) to rasterize with, in priority order
        #[clap(long)]
        font: Vec<PathBuf>,

        /// Directory to write the sprite into
        #[clap(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Render an emoji to a multi-resolution favicon.ico
    Favicon {
        /// The emoji text to render
        emoji: String,

        /// Font file(s) to rasterize with, in priority order
        #[clap(long)]
        font: Vec<PathBuf>,

        /// Output path for the ICO file
        #[clap(long, default_value = "favicon.ico")]
        output: PathBuf,
    },
    /// Print the legacy SVG favicon HTML snippet for an emoji
    Snippet {
        /// The emoji text to embed
        emoji: String,
    },
    /// Search an emoji-mart dataset file by id or keyword
    Search {
        /// Query string
        query: String,

        /// Path to the emoji-mart JSON dataset
        #[clap(long)]
        data: PathBuf,
    },
}
