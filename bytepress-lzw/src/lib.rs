//! # bytepress-lzw: Pure Rust LZW compression
//!
//! Adaptive dictionary (Lempel-Ziv-Welch) compression with fixed-width
//! codes.
//!
//! ## Wire format
//!
//! - Codes `0..=255` are permanently reserved for the single-byte strings;
//!   `256..` are assigned to newly discovered substrings in strict
//!   increasing order, up to `2^(width-1)`.
//! - Every code occupies exactly `width` bits (9..=32, default 16), packed
//!   MSB-first across byte boundaries with the final byte zero-padded.
//! - There is no framing, length prefix, or control code; decoding consumes
//!   codes until fewer than `width` bits remain.
//!
//! Encoder and decoder never share a table. Each builds its own from the
//! code sequence, and the symmetric construction rule keeps them in sync,
//! including the classic case where a stream references a code one step
//! before its defining insertion.
//!
//! The width is agreed out of band: decoding with a width other than the
//! one the stream was encoded with produces garbage, not a detected error.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_lzw::{LzwConfig, compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//! let packed = compress(original, LzwConfig::default());
//! let restored = decompress(&packed, LzwConfig::default()).unwrap();
//! assert_eq!(restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream_msb;
mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;

use bytepress_core::Codec;

pub use config::LzwConfig;
pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};

/// Compress `data` with the given configuration.
///
/// # Example
///
/// ```rust
/// use bytepress_lzw::{LzwConfig, compress};
///
/// let packed = compress(b"AAAAAAAAAAAAAAAA", LzwConfig::default());
/// assert!(!packed.is_empty());
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Vec<u8> {
    LzwEncoder::new(config).encode(data)
}

/// Decompress `data` with the given configuration.
///
/// The configuration must match the one the stream was compressed with.
///
/// # Errors
///
/// [`LzwError::InvalidCode`] if the stream references a code that neither
/// exists nor matches the one-ahead special case.
///
/// # Example
///
/// ```rust
/// use bytepress_lzw::{LzwConfig, compress, decompress};
///
/// let config = LzwConfig::new(12).unwrap();
/// let packed = compress(b"Hello, World!", config);
/// let restored = decompress(&packed, config).unwrap();
/// assert_eq!(restored, b"Hello, World!");
/// ```
pub fn decompress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    LzwDecoder::new(config).decode(data)
}

/// [`Codec`] adapter carrying a width configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct LzwCodec {
    config: LzwConfig,
}

impl LzwCodec {
    /// Create a codec for the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }
}

impl Codec for LzwCodec {
    fn name(&self) -> &'static str {
        "lzw"
    }

    fn compress(&self, input: &[u8]) -> bytepress_core::Result<Vec<u8>> {
        Ok(compress(input, self.config))
    }

    fn decompress(&self, input: &[u8]) -> bytepress_core::Result<Vec<u8>> {
        Ok(decompress(input, self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_default_width() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let packed = compress(original, LzwConfig::default());
        let restored = decompress(&packed, LzwConfig::default()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_empty_input() {
        let packed = compress(b"", LzwConfig::default());
        assert_eq!(packed, b"");
        assert_eq!(decompress(b"", LzwConfig::default()).unwrap(), b"");
    }

    #[test]
    fn test_codec_adapter() {
        let codec: Box<dyn Codec> = Box::new(LzwCodec::default());
        assert_eq!(codec.name(), "lzw");

        let input = b"abcabcabcabc";
        let packed = codec.compress(input).unwrap();
        assert_eq!(codec.decompress(&packed).unwrap(), input);
    }

    #[test]
    fn test_codec_adapter_decode_error() {
        let err = LzwCodec::default().decompress(&[0xFF, 0xFF]).unwrap_err();
        assert!(matches!(
            err,
            bytepress_core::BytepressError::CorruptedData { offset: 0, .. }
        ));
    }
}
