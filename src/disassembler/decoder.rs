//! Instruction decoder for the LS-8 disassembler

use crate::disassembler::DecodedInstruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// Some(DecodedInstruction) if the opcode is assigned and all of its operand
/// bytes are present, None otherwise
pub fn decode_instruction(bytes: &[u8], address: u8) -> Option<DecodedInstruction> {
    let opcode = *bytes.first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];

    if !metadata.implemented {
        return None;
    }

    if bytes.len() < metadata.size_bytes as usize {
        return None;
    }

    let operand_bytes = bytes[1..metadata.size_bytes as usize].to_vec();

    Some(DecodedInstruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        operand_layout: metadata.operand_layout,
        operand_bytes,
        size_bytes: metadata.size_bytes,
    })
}
