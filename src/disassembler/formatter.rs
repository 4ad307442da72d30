//! Formatting functions for disassembled instructions

use crate::disassembler::DecodedInstruction;
use crate::operands::OperandLayout;

/// Format a single instruction as assembly text
///
/// Registers print as `R<n>`, immediates in decimal, and `.byte` entries as
/// an 8-digit binary literal.
pub fn format_instruction(instr: &DecodedInstruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format the operand based on operand layout
fn format_operand(instr: &DecodedInstruction) -> String {
    if instr.mnemonic == ".byte" {
        return format!("%{:08b}", instr.opcode);
    }

    let bytes = &instr.operand_bytes;
    match instr.operand_layout {
        OperandLayout::None => String::new(),
        OperandLayout::Register => format!("R{}", bytes[0]),
        OperandLayout::RegisterRegister => format!("R{},R{}", bytes[0], bytes[1]),
        OperandLayout::RegisterImmediate => format!("R{},{}", bytes[0], bytes[1]),
    }
}

/// Format an instruction as a listing line: address, raw bytes, assembly
///
/// ```
/// use ls8::disassembler::decoder::decode_instruction;
/// use ls8::disassembler::formatter::format_listing_line;
///
/// let instr = decode_instruction(&[0b0100_0111, 0x00], 0x0A).unwrap();
/// assert_eq!(format_listing_line(&instr), "0A: 47 00     PRN R0");
/// ```
pub fn format_listing_line(instr: &DecodedInstruction) -> String {
    let mut hex = format!("{:02X}", instr.opcode);
    if instr.mnemonic != ".byte" {
        for byte in &instr.operand_bytes {
            hex.push_str(&format!(" {:02X}", byte));
        }
    }

    format!("{:02X}: {:<8}  {}", instr.address, hex, format_instruction(instr))
}
