pub mod codec;
pub mod combine;
pub mod error;
pub mod format;
pub mod sweep;
pub mod validate;
pub mod writer;

pub use codec::ImageBuffer;
pub use error::{EliError, Result};
pub use format::EliHeader;
pub use sweep::SweepOutput;

/// Divides image `a` by image `b` pixel-wise and returns the finished ELI
/// output stream.
///
/// Both streams are validated against `schema` before any pixel is touched;
/// a validation failure aborts the run with no partial output.
pub fn divide(a: &[u8], b: &[u8], schema: &EliHeader) -> Result<Vec<u8>> {
    if !schema.offset_is_aligned() {
        return Err(EliError::other(format!(
            "schema data offset {} is not a multiple of 512",
            schema.data_offset
        )));
    }

    validate::check_pair_lengths(a, b, schema)?;
    validate::validate(a, schema)?;
    validate::validate(b, schema)?;

    let first = codec::decode_pixels(a, schema)?;
    let second = codec::decode_pixels(b, schema)?;

    let out = sweep::run(
        &first,
        &second,
        schema.width as usize,
        schema.height as usize,
    );

    Ok(writer::write(schema, &out.buffer))
}
