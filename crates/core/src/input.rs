//! Content loading from files and stdin.
//!
//! This module provides functions for retrieving markdown content from
//! local files and standard input.

use std::fs;
use std::path::PathBuf;

use crate::{ClaritasError, Result};

/// Reads markdown content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn read_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(ClaritasError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(ClaritasError::from)
    }
}

/// Reads markdown content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping content from other commands.
pub fn read_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(ClaritasError::from)?;

    Ok(buffer)
}
