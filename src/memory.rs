//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from the
//! memory implementation, and `Ram`, the flat 256-byte memory the LS-8 ships with.
//!
//! ## Design Principles
//!
//! - No bus errors: an 8-bit address always lands inside a 256-byte space
//! - Code and stack share the same array; code grows up from 0x00, the stack
//!   grows down from the initial stack pointer

use crate::loader::LoadError;

/// Number of addressable bytes.
pub const RAM_SIZE: usize = 256;

/// Memory bus trait for the CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram};
///
/// let mut mem = Ram::new();
/// mem.write(0x42, 0x99);
/// assert_eq!(mem.read(0x42), 0x99);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use ls8::MemoryBus;
///
/// /// Memory that ignores writes into the low code region.
/// struct ProtectedCode {
///     bytes: [u8; 256],
///     code_end: u8,
/// }
///
/// impl MemoryBus for ProtectedCode {
///     fn read(&self, addr: u8) -> u8 {
///         self.bytes[addr as usize]
///     }
///
///     fn write(&mut self, addr: u8, value: u8) {
///         if addr >= self.code_end {
///             self.bytes[addr as usize] = value;
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads the byte at `addr`. Must never panic.
    fn read(&self, addr: u8) -> u8;

    /// Writes `value` to `addr`. Implementations may ignore the write but must
    /// never panic.
    fn write(&mut self, addr: u8, value: u8);
}

/// Flat 256-byte RAM, zero-initialised.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram};
///
/// let mem = Ram::from_image(&[0b1000_0010, 0, 8, 0b0000_0001]).unwrap();
/// assert_eq!(mem.read(0), 0b1000_0010);
/// assert_eq!(mem.read(3), 0b0000_0001);
/// assert_eq!(mem.read(4), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    data: [u8; RAM_SIZE],
}

impl Ram {
    /// Creates a new RAM with all bytes set to zero.
    pub fn new() -> Self {
        Self {
            data: [0; RAM_SIZE],
        }
    }

    /// Creates a RAM holding `image` at address 0 onwards.
    ///
    /// Returns `LoadError::ProgramTooLarge` if the image does not fit.
    pub fn from_image(image: &[u8]) -> Result<Self, LoadError> {
        if image.len() > RAM_SIZE {
            return Err(LoadError::ProgramTooLarge { len: image.len() });
        }

        let mut ram = Self::new();
        ram.data[..image.len()].copy_from_slice(image);
        Ok(ram)
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Ram {
    fn read(&self, addr: u8) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u8, value: u8) {
        self.data[addr as usize] = value;
    }
}
