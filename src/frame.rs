use crate::error::{PickerError, Result};
use crate::ico::MAX_FRAME_DIMENSION;

/// Number of bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// A square RGBA bitmap produced by a rasterizer, one frame of an icon.
///
/// Construction does not validate the buffer; the encoder checks each frame
/// so that one bad frame can be skipped without aborting its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapFrame {
    size: u32,
    pixels: Vec<u8>,
}

impl BitmapFrame {
    /// Create a frame from a declared dimension and a row-major RGBA buffer
    pub fn new(size: u32, pixels: Vec<u8>) -> Self {
        Self { size, pixels }
    }

    /// Create a fully transparent frame of the given dimension
    pub fn blank(size: u32) -> Self {
        let pixels = vec![0u8; size as usize * size as usize * BYTES_PER_PIXEL];
        Self { size, pixels }
    }

    /// The declared width and height in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The RGBA pixel buffer, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Expected buffer length for the declared dimension
    pub fn expected_len(&self) -> usize {
        self.size as usize * self.size as usize * BYTES_PER_PIXEL
    }

    /// Check the frame against the encoder's preconditions.
    ///
    /// `index` is the frame's position in the input sequence and is only used
    /// to label the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.size == 0 || self.size > MAX_FRAME_DIMENSION {
            return Err(PickerError::DimensionOverflow { size: self.size });
        }
        if self.pixels.len() != self.expected_len() {
            return Err(PickerError::FrameDimensionMismatch {
                index,
                declared: self.size,
                expected: self.expected_len(),
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_frame_is_valid() {
        let frame = BitmapFrame::blank(16);
        assert_eq!(frame.size(), 16);
        assert_eq!(frame.pixels().len(), 16 * 16 * 4);
        assert!(frame.validate(0).is_ok());
    }

    #[test]
    fn test_short_buffer_is_a_mismatch() {
        // Declared 32 but carrying a 16x16 buffer
        let frame = BitmapFrame::new(32, vec![0u8; 16 * 16 * 4]);
        match frame.validate(3) {
            Err(PickerError::FrameDimensionMismatch {
                index,
                declared,
                expected,
                actual,
            }) => {
                assert_eq!(index, 3);
                assert_eq!(declared, 32);
                assert_eq!(expected, 32 * 32 * 4);
                assert_eq!(actual, 16 * 16 * 4);
            }
            other => panic!("expected dimension mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_oversized_dimensions_overflow() {
        assert!(matches!(
            BitmapFrame::new(0, Vec::new()).validate(0),
            Err(PickerError::DimensionOverflow { size: 0 })
        ));
        assert!(matches!(
            BitmapFrame::blank(257).validate(0),
            Err(PickerError::DimensionOverflow { size: 257 })
        ));
    }

    #[test]
    fn test_max_dimension_is_accepted() {
        assert!(BitmapFrame::blank(256).validate(0).is_ok());
    }
}
