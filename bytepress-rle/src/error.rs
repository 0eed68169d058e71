//! RLE-specific error types.

use bytepress_core::BytepressError;
use thiserror::Error;

/// RLE decode errors.
///
/// Offsets point at the first byte of the doubled-byte escape that could
/// not be decoded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RleError {
    /// A doubled-byte escape with no decimal length following it.
    #[error("run escape at byte offset {offset} has no decimal length")]
    MissingRunLength {
        /// Byte offset of the escape.
        offset: usize,
    },

    /// The decimal run length does not fit in `usize`.
    #[error("run length at byte offset {offset} overflows")]
    RunLengthOverflow {
        /// Byte offset of the escape.
        offset: usize,
    },
}

/// Result type for RLE operations.
pub type Result<T> = std::result::Result<T, RleError>;

impl RleError {
    /// Byte offset at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::MissingRunLength { offset } | Self::RunLengthOverflow { offset } => *offset,
        }
    }
}

impl From<RleError> for BytepressError {
    fn from(err: RleError) -> Self {
        BytepressError::corrupted(err.offset() as u64, err.to_string())
    }
}
