//! Serialization of a combined image back into a complete ELI byte stream.

use byteorder::{ByteOrder, LittleEndian};
use tracing::debug;

use crate::codec::{self, ImageBuffer};
use crate::combine::LIGHT_PIXEL;
use crate::format::EliHeader;

/// Serializes `schema` plus `buffer` into one finished ELI file image.
///
/// Emits the header region up to the data offset, then every pixel as a
/// 2-byte little-endian value. If fewer pixels were produced than the
/// schema declares, the remainder up to `width * height * 2 + data_offset`
/// is filled with light pixels so the file always has its full extent.
#[must_use]
pub fn write(schema: &EliHeader, buffer: &ImageBuffer) -> Vec<u8> {
    let expected_len = schema.file_len();

    let mut bytes = codec::encode_header(schema);
    bytes.extend_from_slice(&codec::encode_pixels(buffer));

    while bytes.len() + 2 <= expected_len {
        let mut word = [0u8; 2];
        LittleEndian::write_u16(&mut word, LIGHT_PIXEL);
        bytes.extend_from_slice(&word);
    }

    debug!(len = bytes.len(), "serialized output image");
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::pack;

    #[test]
    fn test_output_has_declared_extent() {
        let schema = EliHeader::with_dimensions(4, 4);
        let buffer = ImageBuffer::new(4, 4, vec![pack(1, 2, 3); 16]);

        let bytes = write(&schema, &buffer);
        assert_eq!(bytes.len(), schema.file_len());
    }

    #[test]
    fn test_pixels_start_at_data_offset() {
        let schema = EliHeader::with_dimensions(2, 1);
        let buffer = ImageBuffer::new(2, 1, vec![0xBEEF, 0x1234]);

        let bytes = write(&schema, &buffer);
        let offset = schema.data_offset as usize;
        assert_eq!(LittleEndian::read_u16(&bytes[offset..offset + 2]), 0xBEEF);
        assert_eq!(
            LittleEndian::read_u16(&bytes[offset + 2..offset + 4]),
            0x1234
        );
    }

    #[test]
    fn test_short_buffer_padded_with_light_pixels() {
        let schema = EliHeader::with_dimensions(2, 2);
        let buffer = ImageBuffer {
            width: 2,
            height: 2,
            pixels: vec![pack(1, 1, 1)],
        };

        let bytes = write(&schema, &buffer);
        assert_eq!(bytes.len(), schema.file_len());

        let offset = schema.data_offset as usize;
        assert_eq!(LittleEndian::read_u16(&bytes[offset..offset + 2]), pack(1, 1, 1));
        for pos in (offset + 2..bytes.len()).step_by(2) {
            assert_eq!(LittleEndian::read_u16(&bytes[pos..pos + 2]), LIGHT_PIXEL);
        }
    }

    #[test]
    fn test_round_trip_through_decoder() {
        let schema = EliHeader::with_dimensions(3, 2);
        let buffer = ImageBuffer::new(3, 2, vec![1, 2, 3, 4, 5, 6]);

        let bytes = write(&schema, &buffer);
        let decoded = codec::decode_pixels(&bytes, &schema).unwrap();
        assert_eq!(decoded, buffer);
    }
}
