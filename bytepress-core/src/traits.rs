//! Core traits for compression operations.

use crate::error::Result;

/// A whole-buffer compression codec.
///
/// Implementations transform one fully materialized byte buffer into a newly
/// owned output buffer. Calls are independent: any working state (such as a
/// dictionary table) is created fresh per call and discarded afterwards, so
/// a single codec value can be reused across files.
pub trait Codec {
    /// Short lowercase name for display ("rle", "lzw").
    fn name(&self) -> &'static str;

    /// Compress `input` into a new buffer.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decompress `input` into a new buffer.
    ///
    /// Fails on malformed input; the error reports the byte offset at which
    /// the condition was detected.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StoreCodec;

    impl Codec for StoreCodec {
        fn name(&self) -> &'static str {
            "store"
        }

        fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.to_vec())
        }

        fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
            Ok(input.to_vec())
        }
    }

    #[test]
    fn test_codec_object_safety() {
        let codec: Box<dyn Codec> = Box::new(StoreCodec);
        assert_eq!(codec.name(), "store");
        assert_eq!(codec.compress(b"abc").unwrap(), b"abc");
        assert_eq!(codec.decompress(b"abc").unwrap(), b"abc");
    }
}
