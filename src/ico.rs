//! ICO container encoding.
//!
//! Packs square RGBA frames into a single `.ico` blob: a 6-byte ICONDIR
//! header, one 16-byte ICONDIRENTRY per frame, then the concatenated
//! PNG-compressed payloads. Payload offsets are absolute byte positions
//! within the blob.

use log::warn;

use crate::error::{PickerError, Result};
use crate::frame::BitmapFrame;
use crate::sprite::encode_png;

/// Size in bytes of the ICONDIR header
pub const HEADER_SIZE: usize = 6;

/// Size in bytes of one ICONDIRENTRY
pub const DIR_ENTRY_SIZE: usize = 16;

/// Largest dimension an ICONDIRENTRY can describe.
/// A width/height byte of 0 means 256.
pub const MAX_FRAME_DIMENSION: u32 = 256;

/// Bits per pixel recorded in every directory entry (RGBA)
const BITS_PER_PIXEL: u16 = 32;

/// ICONDIR image type for icons (2 would be cursors)
const RESOURCE_TYPE_ICON: u16 = 1;

/// A frame that could not be encoded and was left out of the container
#[derive(Debug)]
pub struct SkippedFrame {
    /// Position of the frame in the input sequence
    pub index: usize,
    /// The frame's declared dimension
    pub size: u32,
    /// Why the frame was skipped
    pub reason: PickerError,
}

/// Encode frames into an ICO blob.
///
/// Frames that fail validation or PNG compression are skipped (and logged);
/// the remaining frames keep their input order. Fails with
/// [`PickerError::NoFramesAvailable`] if the input is empty or every frame
/// was skipped, and with [`PickerError::DimensionOverflow`] if any frame's
/// dimension cannot be represented in a directory entry.
pub fn encode(frames: &[BitmapFrame]) -> Result<Vec<u8>> {
    encode_with_report(frames).map(|(blob, _)| blob)
}

/// Like [`encode`], but also returns the frames that were skipped.
pub fn encode_with_report(frames: &[BitmapFrame]) -> Result<(Vec<u8>, Vec<SkippedFrame>)> {
    if frames.is_empty() {
        return Err(PickerError::NoFramesAvailable);
    }

    let mut payloads: Vec<(u32, Vec<u8>)> = Vec::with_capacity(frames.len());
    let mut skipped: Vec<SkippedFrame> = Vec::new();

    for (index, frame) in frames.iter().enumerate() {
        let result = frame.validate(index).and_then(|_| encode_png(frame));
        match result {
            Ok(payload) => payloads.push((frame.size(), payload)),
            // An unrepresentable dimension is a caller bug, not a bad frame
            Err(err @ PickerError::DimensionOverflow { .. }) => return Err(err),
            Err(reason) => {
                warn!("skipping frame {} ({}px): {}", index, frame.size(), reason);
                skipped.push(SkippedFrame {
                    index,
                    size: frame.size(),
                    reason,
                });
            }
        }
    }

    if payloads.is_empty() {
        return Err(PickerError::NoFramesAvailable);
    }

    let count = payloads.len();
    let body_len: usize = payloads.iter().map(|(_, data)| data.len()).sum();
    let mut blob = Vec::with_capacity(HEADER_SIZE + DIR_ENTRY_SIZE * count + body_len);

    // ICONDIR: reserved, type, count
    blob.extend_from_slice(&0u16.to_le_bytes());
    blob.extend_from_slice(&RESOURCE_TYPE_ICON.to_le_bytes());
    blob.extend_from_slice(&(count as u16).to_le_bytes());

    // First payload starts immediately after the directory
    let mut offset = (HEADER_SIZE + DIR_ENTRY_SIZE * count) as u32;
    for (size, payload) in &payloads {
        let dimension_byte = if *size == MAX_FRAME_DIMENSION {
            0u8
        } else {
            *size as u8
        };
        blob.push(dimension_byte); // width
        blob.push(dimension_byte); // height
        blob.push(0); // no color palette
        blob.push(0); // reserved
        blob.extend_from_slice(&1u16.to_le_bytes()); // color planes
        blob.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        blob.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        blob.extend_from_slice(&offset.to_le_bytes());
        offset += payload.len() as u32;
    }

    for (_, payload) in &payloads {
        blob.extend_from_slice(payload);
    }

    Ok((blob, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal ICO reader, field order per the ICONDIR/ICONDIRENTRY layout
    struct DecodedEntry {
        width: u32,
        height: u32,
        bits_per_pixel: u16,
        data: Vec<u8>,
    }

    fn decode(blob: &[u8]) -> Vec<DecodedEntry> {
        assert!(blob.len() >= HEADER_SIZE);
        assert_eq!(&blob[0..2], &[0, 0], "reserved field");
        assert_eq!(u16::from_le_bytes([blob[2], blob[3]]), 1, "resource type");
        let count = u16::from_le_bytes([blob[4], blob[5]]) as usize;

        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            let e = HEADER_SIZE + i * DIR_ENTRY_SIZE;
            let entry = &blob[e..e + DIR_ENTRY_SIZE];
            let width = if entry[0] == 0 { 256 } else { entry[0] as u32 };
            let height = if entry[1] == 0 { 256 } else { entry[1] as u32 };
            assert_eq!(entry[2], 0, "palette");
            assert_eq!(entry[3], 0, "reserved");
            assert_eq!(u16::from_le_bytes([entry[4], entry[5]]), 1, "planes");
            let bits_per_pixel = u16::from_le_bytes([entry[6], entry[7]]);
            let len = u32::from_le_bytes(entry[8..12].try_into().unwrap()) as usize;
            let offset = u32::from_le_bytes(entry[12..16].try_into().unwrap()) as usize;
            entries.push(DecodedEntry {
                width,
                height,
                bits_per_pixel,
                data: blob[offset..offset + len].to_vec(),
            });
        }
        entries
    }

    fn frames(sizes: &[u32]) -> Vec<BitmapFrame> {
        sizes.iter().map(|&s| BitmapFrame::blank(s)).collect()
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(encode(&[]), Err(PickerError::NoFramesAvailable)));
    }

    #[test]
    fn test_blob_length_accounting() {
        let input = frames(&[16, 32]);
        let blob = encode(&input).unwrap();
        let payload_len: usize = input.iter().map(|f| encode_png(f).unwrap().len()).sum();
        assert_eq!(blob.len(), HEADER_SIZE + 2 * DIR_ENTRY_SIZE + payload_len);
    }

    #[test]
    fn test_directory_order_and_dimensions() {
        let blob = encode(&frames(&[16, 24, 32, 48, 64])).unwrap();
        let entries = decode(&blob);
        assert_eq!(entries.len(), 5);
        for (entry, expected) in entries.iter().zip([16u32, 24, 32, 48, 64]) {
            assert_eq!(entry.width, expected);
            assert_eq!(entry.height, expected);
            assert_eq!(entry.bits_per_pixel, 32);
        }
    }

    #[test]
    fn test_offsets_are_increasing_and_contiguous() {
        let blob = encode(&frames(&[16, 24, 32])).unwrap();
        let count = 3;
        let mut expected_offset = (HEADER_SIZE + count * DIR_ENTRY_SIZE) as u32;
        for i in 0..count {
            let e = HEADER_SIZE + i * DIR_ENTRY_SIZE;
            let len = u32::from_le_bytes(blob[e + 8..e + 12].try_into().unwrap());
            let offset = u32::from_le_bytes(blob[e + 12..e + 16].try_into().unwrap());
            assert_eq!(offset, expected_offset);
            assert!((offset + len) as usize <= blob.len());
            expected_offset += len;
        }
        assert_eq!(expected_offset as usize, blob.len());
    }

    #[test]
    fn test_payload_round_trip() {
        let input = frames(&[16, 48]);
        let blob = encode(&input).unwrap();
        let entries = decode(&blob);
        for (entry, frame) in entries.iter().zip(&input) {
            assert_eq!(entry.data, encode_png(frame).unwrap());
        }
    }

    #[test]
    fn test_duplicate_sizes_are_preserved() {
        let blob = encode(&frames(&[32, 32])).unwrap();
        let entries = decode(&blob);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].width, 32);
        assert_eq!(entries[1].width, 32);
    }

    #[test]
    fn test_mismatched_frame_is_skipped_with_report() {
        let input = vec![
            BitmapFrame::blank(16),
            BitmapFrame::new(32, vec![0u8; 16 * 16 * 4]),
            BitmapFrame::blank(48),
        ];
        let (blob, skipped) = encode_with_report(&input).unwrap();
        let entries = decode(&blob);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].width, 16);
        assert_eq!(entries[1].width, 48);

        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].index, 1);
        assert_eq!(skipped[0].size, 32);
        assert!(matches!(
            skipped[0].reason,
            PickerError::FrameDimensionMismatch { .. }
        ));
    }

    #[test]
    fn test_sole_bad_frame_fails_whole_encode() {
        let input = vec![BitmapFrame::new(32, vec![0u8; 16 * 16 * 4])];
        assert!(matches!(
            encode(&input),
            Err(PickerError::NoFramesAvailable)
        ));
    }

    #[test]
    fn test_oversized_frame_is_fatal() {
        let input = vec![BitmapFrame::blank(16), BitmapFrame::blank(512)];
        assert!(matches!(
            encode(&input),
            Err(PickerError::DimensionOverflow { size: 512 })
        ));
    }

    #[test]
    fn test_256_encodes_as_zero_byte() {
        let blob = encode(&frames(&[256])).unwrap();
        assert_eq!(blob[HEADER_SIZE], 0);
        assert_eq!(blob[HEADER_SIZE + 1], 0);
        assert_eq!(decode(&blob)[0].width, 256);
    }
}
