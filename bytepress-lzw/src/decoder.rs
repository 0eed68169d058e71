//! LZW decoder (decompression).

use crate::bitstream_msb::MsbBitReader;
use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};

/// LZW decoder for decompression.
///
/// A fresh dictionary is built for every [`decode`](Self::decode) call; no
/// state persists between calls.
#[derive(Debug, Clone, Copy)]
pub struct LzwDecoder {
    config: LzwConfig,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }

    /// Decode fixed-width codes packed MSB-first.
    ///
    /// Codes are read until fewer than `width` bits remain; the trailing
    /// partial code is the writer's zero padding and is discarded. The
    /// dictionary mirrors the encoder's insertions one code later, which is
    /// why a stream can reference a code in the same step that defines it:
    /// that code must equal `next_code` and resolves to `prev + prev[0]`.
    ///
    /// # Errors
    ///
    /// [`LzwError::InvalidCode`] for a code that neither exists in the
    /// table nor matches the one-ahead special case. The reported offset is
    /// the byte at which the offending code starts.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut dict = LzwDictionary::new(self.config);
        let width = self.config.width();
        let mut reader = MsbBitReader::new(input);

        let mut output = Vec::with_capacity(input.len().saturating_mul(2));
        // Previously decoded code and where its string starts in `output`.
        let mut prev: Option<u32> = None;
        let mut prev_start = 0usize;

        while let Some(code) = reader.read_bits(width) {
            let start = output.len();

            if let Some(string) = dict.string(code) {
                output.extend_from_slice(string);
            } else if prev.is_some() && code == dict.next_code() && !dict.is_full() {
                // One step ahead of its own definition: the encoder emitted
                // the code it was in the middle of learning. Both sides
                // construct it as prev + prev[0].
                output.extend_from_within(prev_start..start);
                let first = output[prev_start];
                output.push(first);
            } else {
                let offset = ((reader.bits_read() - u64::from(width)) / 8) as usize;
                return Err(LzwError::InvalidCode { code, offset });
            }

            // Mirror the encoder's insertion one code later.
            if let Some(p) = prev {
                dict.insert_extension(p, output[start]);
            }

            prev = Some(code);
            prev_start = start;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::LzwEncoder;

    fn config(width: u32) -> LzwConfig {
        LzwConfig::new(width).unwrap()
    }

    fn roundtrip(input: &[u8], width: u32) {
        let encoded = LzwEncoder::new(config(width)).encode(input);
        let decoded = LzwDecoder::new(config(width)).decode(&encoded).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_decode_empty() {
        let decoded = LzwDecoder::new(config(16)).decode(b"").unwrap();
        assert_eq!(decoded, b"");
    }

    #[test]
    fn test_decode_known_stream() {
        // Codes 65, 256, 65 = "AAAA" (256 is the one-ahead special case).
        let input = [0x00, 0x41, 0x01, 0x00, 0x00, 0x41];
        let decoded = LzwDecoder::new(config(16)).decode(&input).unwrap();
        assert_eq!(decoded, b"AAAA");
    }

    #[test]
    fn test_decode_special_case_alternating() {
        roundtrip(b"ABABABABABABABABAB", 16);
    }

    #[test]
    fn test_decode_rejects_unknown_code() {
        // 0xFFFF cannot exist in a fresh width-16 table (next code is 256).
        let err = LzwDecoder::new(config(16)).decode(&[0xFF, 0xFF]).unwrap_err();
        assert_eq!(
            err,
            LzwError::InvalidCode {
                code: 0xFFFF,
                offset: 0,
            }
        );
    }

    #[test]
    fn test_decode_rejects_one_ahead_without_prev() {
        // Code 256 as the very first code has no prev to build it from.
        let err = LzwDecoder::new(config(16)).decode(&[0x01, 0x00]).unwrap_err();
        assert_eq!(
            err,
            LzwError::InvalidCode {
                code: 256,
                offset: 0,
            }
        );
    }

    #[test]
    fn test_decode_error_offset_points_at_code_start() {
        // Valid code 65, then invalid 0xFFFF starting at byte 2.
        let err = LzwDecoder::new(config(16))
            .decode(&[0x00, 0x41, 0xFF, 0xFF])
            .unwrap_err();
        assert_eq!(
            err,
            LzwError::InvalidCode {
                code: 0xFFFF,
                offset: 2,
            }
        );
    }

    #[test]
    fn test_decode_discards_partial_trailing_code() {
        // One full width-16 code plus a lone byte of padding-sized tail.
        let decoded = LzwDecoder::new(config(16))
            .decode(&[0x00, 0x41, 0x00])
            .unwrap();
        assert_eq!(decoded, b"A");
    }

    #[test]
    fn test_roundtrip_text() {
        roundtrip(b"TOBEORNOTTOBEORTOBEORNOT", 16);
        roundtrip(b"TOBEORNOTTOBEORTOBEORNOT", 9);
    }
}
