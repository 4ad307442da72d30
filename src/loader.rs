//! # Program Loader
//!
//! Parses LS-8 program images into memory.
//!
//! A program image is a text file with one byte per line, written as base-2
//! digits. Anything after `#` is a comment. Blank and comment-only lines are
//! skipped. Bytes are placed at consecutive addresses starting at 0.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::memory::{Ram, RAM_SIZE};

/// Errors that can occur while loading a program image.
#[derive(Debug)]
pub enum LoadError {
    /// A line is not an 8-bit binary literal.
    InvalidByte {
        /// 1-based line number in the source
        line: usize,
        /// The offending text, comment and whitespace removed
        text: String,
    },

    /// The program does not fit in memory.
    ProgramTooLarge {
        /// Number of bytes in the image
        len: usize,
    },

    /// The program file could not be read.
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::InvalidByte { line, text } => {
                write!(f, "line {}: \"{}\" is not an 8-bit binary value", line, text)
            }
            LoadError::ProgramTooLarge { len } => {
                write!(
                    f,
                    "program is {} bytes, memory holds only {}",
                    len, RAM_SIZE
                )
            }
            LoadError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses program text into the bytes it describes.
///
/// # Examples
///
/// ```
/// use ls8::parse_program;
///
/// let bytes = parse_program("10000010 # LDI\n\n# comment only\n00000001\n").unwrap();
/// assert_eq!(bytes, vec![0b1000_0010, 0b0000_0001]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let text = line.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let value = u8::from_str_radix(text, 2).map_err(|_| LoadError::InvalidByte {
            line: index + 1,
            text: text.to_string(),
        })?;
        bytes.push(value);
    }

    Ok(bytes)
}

/// Parses program text and places it in a fresh RAM at address 0.
pub fn load_program(source: &str) -> Result<Ram, LoadError> {
    let bytes = parse_program(source)?;
    debug!("loaded {} program bytes", bytes.len());
    Ram::from_image(&bytes)
}

/// Reads a program file and returns the bytes it describes.
pub fn read_program<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("reading program from {}", path.display());
    parse_program(&source)
}

/// Reads a program file and places it in a fresh RAM at address 0.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Ram, LoadError> {
    let bytes = read_program(path)?;
    debug!("loaded {} program bytes", bytes.len());
    Ram::from_image(&bytes)
}
