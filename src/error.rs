use thiserror::Error;

/// Result type for emoji picker operations
pub type Result<T> = std::result::Result<T, PickerError>;

/// Error types for sprite and favicon rendering
#[derive(Error, Debug)]
pub enum PickerError {
    /// A frame's declared dimension disagrees with its pixel buffer
    #[error("frame {index}: declared {declared}x{declared} needs {expected} bytes, buffer holds {actual}")]
    FrameDimensionMismatch {
        index: usize,
        declared: u32,
        expected: usize,
        actual: usize,
    },

    /// PNG compression of a single frame failed
    #[error("PNG encoding failed: {0}")]
    FrameCompression(#[from] png::EncodingError),

    /// Input was empty, or every frame was skipped
    #[error("no frames available to encode")]
    NoFramesAvailable,

    /// Frame dimension outside the range the icon directory can represent
    #[error("frame dimension {size} outside the representable range 1..={max}", max = crate::ico::MAX_FRAME_DIMENSION)]
    DimensionOverflow { size: u32 },

    /// Font loading or parsing error
    #[error("font error: {0}")]
    Font(String),

    /// No loaded font covers the requested text
    #[error("no glyph found for {0:?} in any loaded font")]
    GlyphNotFound(String),

    /// Emoji dataset parsing error
    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
