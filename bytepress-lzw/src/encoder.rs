//! LZW encoder (compression).

use crate::bitstream_msb::MsbBitWriter;
use crate::config::LzwConfig;
use crate::dictionary::LzwDictionary;

/// LZW encoder for compression.
///
/// A fresh dictionary is built for every [`encode`](Self::encode) call; no
/// state persists between calls.
#[derive(Debug, Clone, Copy)]
pub struct LzwEncoder {
    config: LzwConfig,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self { config }
    }

    /// Encode `input` as fixed-width codes packed MSB-first.
    ///
    /// The greedy extend-then-backtrack loop: the current match is held as
    /// a code; each byte tries to extend it through the `(code, byte)`
    /// index. On a miss the extension is recorded (while the table has
    /// room), the code for the match so far is emitted, and the match
    /// restarts at the new byte. A pending match is flushed after the last
    /// byte, so empty input produces empty output.
    ///
    /// Longest-match needs no tie-breaking: lookup is exact-match on
    /// `(prefix, byte)` pairs, and every prefix of a stored string is
    /// stored, so the loop cannot overshoot.
    pub fn encode(&self, input: &[u8]) -> Vec<u8> {
        let mut dict = LzwDictionary::new(self.config);
        let width = self.config.width();
        let mut writer = MsbBitWriter::with_capacity(input.len());

        let mut current: Option<u32> = None;
        for &byte in input {
            current = match current {
                None => Some(u32::from(byte)),
                Some(code) => match dict.find_extension(code, byte) {
                    Some(extended) => Some(extended),
                    None => {
                        dict.insert_extension(code, byte);
                        writer.write_bits(code, width);
                        Some(u32::from(byte))
                    }
                },
            };
        }

        if let Some(code) = current {
            writer.write_bits(code, width);
        }

        writer.into_vec()
    }
}
