//! Whole-file I/O collaborators.
//!
//! The codec crates never open files. Batch tools acquire a buffer through
//! [`read_all`], run a codec over it, and persist the result through
//! [`write_all`]. A failed read surfaces before any codec work begins, so a
//! codec never sees a partially-read buffer.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Read an entire file into a byte buffer.
pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

/// Write a byte buffer to a file, replacing any existing contents.
pub fn write_all(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    Ok(fs::write(path, data)?)
}
