//! Header validation of ELI input streams against a schema.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::{debug, warn};

use crate::error::{EliError, Result};
use crate::format::EliHeader;

/// Length of the signature field including its pad byte.
const SIGNATURE_LEN: usize = 4;

/// Pre-check before any header field is read: both streams must be the
/// same length and long enough to hold the header region.
pub fn check_pair_lengths(a: &[u8], b: &[u8], schema: &EliHeader) -> Result<()> {
    if a.len() != b.len() {
        return Err(EliError::other(format!(
            "image sizes do not match: {} vs {} bytes",
            a.len(),
            b.len()
        )));
    }

    if a.len() < schema.data_offset as usize {
        return Err(EliError::other(format!(
            "stream of {} bytes is shorter than the {}-byte data offset",
            a.len(),
            schema.data_offset
        )));
    }

    Ok(())
}

/// Validates the first 32 bytes of `bytes` against `schema`.
///
/// Field order and error kinds follow the format definition: signature,
/// then header length and data offset (both `HeaderSizeMismatch`), then
/// width and height (`Other`), bits per pixel (`PixelFormatMismatch`) and
/// finally the line length, which is soft-checked only. The `reserved`
/// field is read but never compared. Returns the parsed header on success.
pub fn validate(bytes: &[u8], schema: &EliHeader) -> Result<EliHeader> {
    let mut cursor = Cursor::new(bytes);

    let mut sig_bytes = [0u8; SIGNATURE_LEN];
    std::io::Read::read_exact(&mut cursor, &mut sig_bytes)?;

    let signature = trim_signature(&sig_bytes);
    if signature != schema.signature {
        return Err(EliError::SignatureMismatch {
            expected: schema.signature.clone(),
            found: signature,
        });
    }

    let header_len = cursor.read_i32::<LittleEndian>()?;
    if header_len != schema.header_len {
        return Err(EliError::HeaderSizeMismatch {
            field: "header_len",
            expected: schema.header_len,
            found: header_len,
        });
    }

    let data_offset = cursor.read_i32::<LittleEndian>()?;
    if data_offset != schema.data_offset {
        return Err(EliError::HeaderSizeMismatch {
            field: "data_offset",
            expected: schema.data_offset,
            found: data_offset,
        });
    }

    let reserved = cursor.read_i32::<LittleEndian>()?;

    let width = cursor.read_i32::<LittleEndian>()?;
    if width != schema.width {
        return Err(EliError::other(format!(
            "image width is {} pixels, expected {}",
            width, schema.width
        )));
    }

    let height = cursor.read_i32::<LittleEndian>()?;
    if height != schema.height {
        return Err(EliError::other(format!(
            "image height is {} pixels, expected {}",
            height, schema.height
        )));
    }

    let bit_count = cursor.read_i32::<LittleEndian>()?;
    if bit_count != schema.bit_count {
        return Err(EliError::PixelFormatMismatch {
            expected: schema.bit_count,
            found: bit_count,
        });
    }

    let line_length = cursor.read_i32::<LittleEndian>()?;
    if line_length != schema.line_length {
        warn!(
            line_length,
            expected = schema.line_length,
            "line_length does not match the schema, continuing"
        );
    }

    debug!(%signature, width, height, bit_count, "header validated");

    Ok(EliHeader {
        signature,
        header_len,
        data_offset,
        reserved,
        width,
        height,
        bit_count,
        line_length,
    })
}

/// Takes up to 3 characters of the signature, stopping at the first blank
/// or NUL pad byte.
fn trim_signature(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(3)
        .take_while(|&&b| b != 0 && b != b' ')
        .map(|&b| b as char)
        .collect()
}
