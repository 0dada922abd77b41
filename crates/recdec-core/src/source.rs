//! Input loading. The only I/O in the library lives here; decoding itself
//! runs over an already materialized byte buffer.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads the whole input file into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>, SourceError> {
    Ok(fs::read(path)?)
}
