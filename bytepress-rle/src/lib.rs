//! # bytepress-rle: run-length encoding with a doubled-byte escape
//!
//! Only runs of two or more identical bytes are escaped: the byte is written
//! twice, followed by the run length in ASCII decimal. Lone bytes pass
//! through unchanged, so incompressible data stays the same size.
//!
//! ```text
//! WWWWWWWWWWWWBWWWWWWWWWWWWBBBWWWWWWWWWWWWWWWWWWWWWWWWBWWWWWWWWWWWWWW
//!   -> WW12BWW12BB3WW24BWW14
//! ```
//!
//! ## Precondition
//!
//! The grammar is self-describing but not self-delimiting: two identical
//! consecutive bytes followed by ASCII digit bytes always parse as a run
//! escape. Data in which a run of two or more identical bytes is immediately
//! followed by literal decimal digits therefore cannot survive a round trip,
//! and [`decode`] applied to bytes that no encoder produced may misread a
//! literal pair as an escape. The codec is safe for inputs where this
//! collision cannot occur, or where the encoder is the sole producer of all
//! decoded data.
//!
//! ## Example
//!
//! ```rust
//! use bytepress_rle::{decode, encode};
//!
//! let encoded = encode(b"AAAAB");
//! assert_eq!(encoded, b"AA4B");
//! assert_eq!(decode(&encoded).unwrap(), b"AAAAB");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod error;

use bytepress_core::Codec;

pub use error::{Result, RleError};

/// Encode `input`, escaping runs of two or more identical bytes.
///
/// Scans left to right counting the maximal run at each position; the count
/// never reads past the end of the buffer, so a run that touches the final
/// byte is simply the run that ends there. Runs of length one are emitted
/// unchanged; longer runs become the byte doubled plus the decimal length.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        let byte = input[pos];
        let mut run = 1;
        while pos + run < input.len() && input[pos + run] == byte {
            run += 1;
        }

        if run == 1 {
            output.push(byte);
        } else {
            output.push(byte);
            output.push(byte);
            output.extend_from_slice(run.to_string().as_bytes());
        }
        pos += run;
    }

    output
}

/// Decode a buffer produced by [`encode`].
///
/// A byte equal to its successor is the doubled-byte marker: both copies are
/// consumed, the following ASCII decimal digits accumulate into a run
/// length, and that many copies of the marker byte are emitted. Any other
/// byte is emitted literally.
///
/// # Errors
///
/// - [`RleError::MissingRunLength`] if a doubled byte has no digit after it
///   (including a marker pair at the very end of the input).
/// - [`RleError::RunLengthOverflow`] if the decimal length does not fit in
///   `usize`.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < input.len() {
        let byte = input[pos];
        if pos + 1 < input.len() && input[pos + 1] == byte {
            let escape = pos;
            pos += 2;

            let digits = pos;
            let mut run: usize = 0;
            while pos < input.len() && input[pos].is_ascii_digit() {
                run = run
                    .checked_mul(10)
                    .and_then(|r| r.checked_add(usize::from(input[pos] - b'0')))
                    .ok_or(RleError::RunLengthOverflow { offset: escape })?;
                pos += 1;
            }
            if pos == digits {
                return Err(RleError::MissingRunLength { offset: escape });
            }

            output.resize(output.len() + run, byte);
        } else {
            output.push(byte);
            pos += 1;
        }
    }

    Ok(output)
}

/// [`Codec`] adapter for the run-length grammar.
#[derive(Debug, Default, Clone, Copy)]
pub struct RleCodec;

impl Codec for RleCodec {
    fn name(&self) -> &'static str {
        "rle"
    }

    fn compress(&self, input: &[u8]) -> bytepress_core::Result<Vec<u8>> {
        Ok(encode(input))
    }

    fn decompress(&self, input: &[u8]) -> bytepress_core::Result<Vec<u8>> {
        Ok(decode(input)?)
    }
}
