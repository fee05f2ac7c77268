//! Packing and unpacking between ELI byte streams and pixel buffers.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{EliError, Result};
use crate::format::EliHeader;

/// Row-major buffer of packed RGB565 pixels, `width * height` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u16>,
}

impl ImageBuffer {
    #[must_use]
    pub fn new(width: usize, height: usize, pixels: Vec<u16>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Linear index of the pixel at (`x`, `y`).
    #[inline]
    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> usize {
        self.width * y + x
    }
}

/// Copies `width * height` little-endian u16 values starting at the
/// schema's data offset into a pixel buffer.
pub fn decode_pixels(bytes: &[u8], schema: &EliHeader) -> Result<ImageBuffer> {
    let offset = schema.data_offset as usize;
    let len = schema.data_len();

    let payload = bytes
        .get(offset..offset + len)
        .ok_or_else(|| EliError::other(format!("pixel data truncated: need {} bytes at offset {}, stream has {}", len, offset, bytes.len())))?;

    let mut pixels = vec![0u16; schema.pixel_count()];
    LittleEndian::read_u16_into(payload, &mut pixels);

    Ok(ImageBuffer::new(
        schema.width as usize,
        schema.height as usize,
        pixels,
    ))
}

/// Serializes every pixel as a 2-byte little-endian value, row-major.
#[must_use]
pub fn encode_pixels(buffer: &ImageBuffer) -> Vec<u8> {
    let mut bytes = vec![0u8; buffer.pixels.len() * 2];
    LittleEndian::write_u16_into(&buffer.pixels, &mut bytes);
    bytes
}

/// Serializes the header region: the 3-byte signature plus one zero
/// terminator, seven little-endian i32 fields, then zero fill up to the
/// data offset.
#[must_use]
pub fn encode_header(schema: &EliHeader) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(schema.data_offset as usize);

    let mut sig = [0u8; 4];
    let trimmed = schema.signature.as_bytes();
    sig[..trimmed.len().min(3)].copy_from_slice(&trimmed[..trimmed.len().min(3)]);
    bytes.extend_from_slice(&sig);

    for field in [
        schema.header_len,
        schema.data_offset,
        schema.reserved,
        schema.width,
        schema.height,
        schema.bit_count,
        schema.line_length,
    ] {
        let mut word = [0u8; 4];
        LittleEndian::write_i32(&mut word, field);
        bytes.extend_from_slice(&word);
    }

    bytes.resize(schema.data_offset as usize, 0);
    bytes
}
