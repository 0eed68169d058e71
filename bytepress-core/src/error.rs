//! Error types for bytepress operations.

use std::io;
use thiserror::Error;

/// The main error type for bytepress operations.
#[derive(Debug, Error)]
pub enum BytepressError {
    /// I/O error from the file collaborators.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Corrupted or malformed compressed data.
    #[error("Corrupted data at offset {offset}: {message}")]
    CorruptedData {
        /// Byte offset at which the corruption was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Invalid codec configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },
}

/// Result type alias for bytepress operations.
pub type Result<T> = std::result::Result<T, BytepressError>;

impl BytepressError {
    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
