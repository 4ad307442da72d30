//! # LS-8 CPU Emulator Core
//!
//! An emulator for the LS-8, a tiny 8-bit stored-program computer with eight
//! one-byte registers and 256 bytes of RAM shared between code and stack.
//!
//! This crate provides the CPU state, the table-driven instruction decoder, the
//! ALU, the stack and control-flow instructions, a loader for text program
//! images, and a disassembler.
//!
//! ## Quick Start
//!
//! ```rust
//! use ls8::{load_program, CPU};
//!
//! let source = "\
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 00000001 # HLT
//! ";
//!
//! let memory = load_program(source).unwrap();
//! let mut cpu = CPU::new(memory);
//!
//! cpu.run().unwrap();
//! assert_eq!(cpu.reg(0), 8);
//! assert!(cpu.is_halted());
//! ```
//!
//! ## Instruction Encoding
//!
//! Every instruction is an opcode byte followed by up to two operand bytes.
//! The opcode carries its own decoding hints:
//!
//! ```text
//! AABCDDDD
//! ││││└┴┴┴── instruction identifier
//! │││└────── sets PC itself (handler controls the next PC)
//! ││└─────── ALU operation
//! └┴──────── number of operand bytes
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and the 256-byte RAM
//! - `opcodes` - Opcode metadata table and instruction enumeration
//! - `operands` - Operand layout enumeration
//! - `loader` - Parser for binary-literal program images
//! - `disassembler` - Memory image listings

pub mod cpu;
pub mod disassembler;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod operands;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use cpu::{AluOp, CPU, FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, FL, SP, SP_INIT};
pub use disassembler::{disassemble, DecodedInstruction, DisassemblyOptions};
pub use loader::{load_file, load_program, parse_program, read_program, LoadError};
pub use memory::{MemoryBus, Ram, RAM_SIZE};
pub use opcodes::{Instruction, OpcodeMetadata, OPCODE_TABLE};
pub use operands::OperandLayout;

/// Errors that can occur during CPU execution.
///
/// All of them are fatal: the program cannot continue past the faulting
/// instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode has no handler.
    InvalidInstruction {
        /// The offending opcode byte
        opcode: u8,
        /// Address the opcode was fetched from
        address: u8,
    },

    /// The ALU was asked to perform an operation it does not know.
    UnsupportedOperation {
        /// Name of the requested operation
        operation: String,
        /// Program counter at the time of the request
        address: u8,
    },

    /// A register operand is outside R0-R7.
    InvalidRegister {
        /// The operand byte naming the register
        register: u8,
        /// Address of the instruction that used it
        address: u8,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::InvalidInstruction { opcode, address } => {
                write!(
                    f,
                    "unknown instruction {:#010b} ({}) at address {}",
                    opcode, opcode, address
                )
            }
            ExecutionError::UnsupportedOperation { operation, address } => {
                write!(
                    f,
                    "unsupported ALU operation \"{}\" at address {}",
                    operation, address
                )
            }
            ExecutionError::InvalidRegister { register, address } => {
                write!(
                    f,
                    "invalid register R{} at address {}",
                    register, address
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
