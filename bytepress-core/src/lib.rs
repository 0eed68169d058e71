//! # Bytepress Core
//!
//! Core components for the bytepress compression tools.
//!
//! This crate provides the pieces shared by every codec and by the batch
//! driver:
//!
//! - [`traits`]: the whole-buffer [`Codec`] seam the driver dispatches through
//! - [`error`]: the workspace error type
//! - [`io`]: the whole-file read/write collaborators
//!
//! ## Architecture
//!
//! Codecs are pure transformations: one fully materialized input buffer in,
//! one newly owned output buffer out. There is no streaming or chunked mode;
//! batch tools read a file through [`io::read_all`], run a codec, and write
//! the result back through [`io::write_all`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod io;
pub mod traits;

// Re-exports for convenience
pub use error::{BytepressError, Result};
pub use traits::Codec;
