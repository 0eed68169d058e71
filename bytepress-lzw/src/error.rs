//! LZW-specific error types.

use bytepress_core::BytepressError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LzwError {
    /// A packed code referencing neither an existing table entry nor the
    /// valid one-ahead special case.
    #[error("invalid LZW code {code} at byte offset {offset}")]
    InvalidCode {
        /// The offending code value.
        code: u32,
        /// Byte offset in the packed input at which the code starts.
        offset: usize,
    },

    /// Code width outside the supported range.
    #[error("invalid code width: {0} (must be 9-32)")]
    InvalidBitWidth(u32),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

impl From<LzwError> for BytepressError {
    fn from(err: LzwError) -> Self {
        match err {
            LzwError::InvalidCode { offset, .. } => {
                BytepressError::corrupted(offset as u64, err.to_string())
            }
            LzwError::InvalidBitWidth(_) => BytepressError::invalid_config(err.to_string()),
        }
    }
}
