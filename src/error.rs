use thiserror::Error;

/// Validation and decoding failures for ELI streams.
///
/// Width/height mismatches deliberately map to [`EliError::Other`] rather
/// than a dedicated kind; only the bit depth gets `PixelFormatMismatch`.
#[derive(Debug, Error)]
pub enum EliError {
    #[error("signature {found:?} does not match expected {expected:?}")]
    SignatureMismatch { expected: String, found: String },

    #[error("header field {field} is {found}, expected {expected}")]
    HeaderSizeMismatch {
        field: &'static str,
        expected: i32,
        found: i32,
    },

    #[error("pixel format is {found} bits per pixel, expected {expected}")]
    PixelFormatMismatch { expected: i32, found: i32 },

    #[error("{0}")]
    Other(String),
}

impl EliError {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Short stable name for log output and exit reporting.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SignatureMismatch { .. } => "signature_mismatch",
            Self::HeaderSizeMismatch { .. } => "header_size_mismatch",
            Self::PixelFormatMismatch { .. } => "pixel_format_mismatch",
            Self::Other(_) => "other",
        }
    }
}

/// Truncated or otherwise unreadable streams count as generic failures.
impl From<std::io::Error> for EliError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EliError>;
