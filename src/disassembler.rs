//! LS-8 Disassembler Module
//!
//! Converts a memory image back into human-readable assembly listings.

pub mod decoder;
pub mod formatter;

pub use formatter::format_instruction;

use crate::operands::OperandLayout;

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedInstruction {
    /// Memory address where this instruction starts
    pub address: u8,

    /// The opcode byte value
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDI", "PRN", ".byte")
    pub mnemonic: &'static str,

    /// How the operand bytes are interpreted
    pub operand_layout: OperandLayout,

    /// Operand bytes (0-2)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (opcode + operands)
    pub size_bytes: u8,
}

/// Options controlling disassembly
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Address of the first byte in the input slice
    pub start_address: u8,

    /// Stop after the first HLT instead of decoding the rest of the image
    pub stop_at_halt: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x00,
            stop_at_halt: false,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// Unassigned opcodes and truncated trailing instructions are emitted as
/// one-byte `.byte` entries.
///
/// # Examples
///
/// ```
/// use ls8::disassembler::{disassemble, format_instruction, DisassemblyOptions};
///
/// let bytes = [0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001];
/// let listing: Vec<String> = disassemble(&bytes, DisassemblyOptions::default())
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(listing, vec!["LDI R0,8", "PRN R0", "HLT"]);
/// ```
pub fn disassemble(bytes: &[u8], options: DisassemblyOptions) -> Vec<DecodedInstruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = options.start_address;

    while offset < bytes.len() {
        let instr = match decoder::decode_instruction(&bytes[offset..], address) {
            Some(instr) => instr,
            None => DecodedInstruction {
                address,
                opcode: bytes[offset],
                mnemonic: ".byte",
                operand_layout: OperandLayout::None,
                operand_bytes: Vec::new(),
                size_bytes: 1,
            },
        };

        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes);

        let halt = instr.mnemonic == "HLT";
        instructions.push(instr);

        if halt && options.stop_at_halt {
            break;
        }
    }

    instructions
}
