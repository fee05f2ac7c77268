//! The ELI header schema: fixed little-endian layout, 512-byte aligned data.

/// Expected 3-character signature at the start of every ELI file.
pub const ELI_SIGNATURE: &str = "ELI";

/// Number of documented header fields (signature plus seven integers).
pub const FIELD_COUNT: usize = 8;

/// Serialized size of the eight header fields in bytes.
pub const HEADER_LEN: i32 = 32;

/// Default offset from the start of the file to the pixel data.
pub const DATA_OFFSET: i32 = 512;

/// The data offset must stay a multiple of this.
pub const OFFSET_ALIGNMENT: i32 = 512;

/// The only supported pixel depth (packed RGB565).
pub const BITS_PER_PIXEL: i32 = 16;

/// Header field values of one concrete ELI format revision.
///
/// Immutable once constructed; the validator compares streams against it
/// and the writer serializes it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliHeader {
    pub signature: String,
    pub header_len: i32,
    pub data_offset: i32,
    pub reserved: i32,
    pub width: i32,
    pub height: i32,
    pub bit_count: i32,
    pub line_length: i32,
}

impl Default for EliHeader {
    fn default() -> Self {
        Self::with_dimensions(512, 512)
    }
}

impl EliHeader {
    /// Schema for a `width` x `height` image with the default layout.
    #[must_use]
    pub fn with_dimensions(width: i32, height: i32) -> Self {
        Self {
            signature: ELI_SIGNATURE.to_string(),
            header_len: HEADER_LEN,
            data_offset: DATA_OFFSET,
            reserved: 0,
            width,
            height,
            bit_count: BITS_PER_PIXEL,
            line_length: width * 2,
        }
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the pixel payload in bytes.
    #[must_use]
    pub fn data_len(&self) -> usize {
        self.pixel_count() * 2
    }

    /// Total size of a well-formed file: header region plus payload.
    #[must_use]
    pub fn file_len(&self) -> usize {
        self.data_offset as usize + self.data_len()
    }

    #[must_use]
    pub fn offset_is_aligned(&self) -> bool {
        self.data_offset > 0 && self.data_offset % OFFSET_ALIGNMENT == 0
    }
}

impl std::fmt::Display for EliHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}x{} {}bpp, data at {}",
            self.signature, self.width, self.height, self.bit_count, self.data_offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_values() {
        assert_eq!(FIELD_COUNT, 8);

        let schema = EliHeader::default();
        assert_eq!(schema.signature, "ELI");
        assert_eq!(schema.header_len, 32);
        assert_eq!(schema.data_offset, 512);
        assert_eq!(schema.reserved, 0);
        assert_eq!(schema.width, 512);
        assert_eq!(schema.height, 512);
        assert_eq!(schema.bit_count, 16);
        assert_eq!(schema.line_length, 1024);
    }

    #[test]
    fn test_derived_sizes() {
        let schema = EliHeader::with_dimensions(2, 2);
        assert_eq!(schema.pixel_count(), 4);
        assert_eq!(schema.data_len(), 8);
        assert_eq!(schema.file_len(), 520);
        assert_eq!(schema.line_length, 4);
    }

    #[test]
    fn test_offset_alignment() {
        assert!(EliHeader::default().offset_is_aligned());

        let mut schema = EliHeader::default();
        schema.data_offset = 500;
        assert!(!schema.offset_is_aligned());
    }

    #[test]
    fn test_display() {
        let schema = EliHeader::default();
        assert_eq!(format!("{}", schema), "ELI 512x512 16bpp, data at 512");
    }
}
