//! # Operand Layouts
//!
//! This module defines how the LS-8 interprets the operand bytes that follow an
//! opcode. Operands are either register indices (0-7) or immediate literals.

/// Operand layout enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: None
/// - **1 byte**: Register
/// - **2 bytes**: RegisterRegister, RegisterImmediate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandLayout {
    /// No operand.
    ///
    /// Examples: HLT, RET
    None,

    /// One register index.
    ///
    /// Examples: PRN R0, PUSH R1, JMP R2
    Register,

    /// Two register indices; the first one is the destination.
    ///
    /// Examples: ADD R0,R1, CMP R2,R3
    RegisterRegister,

    /// A register index followed by an 8-bit literal.
    ///
    /// Example: LDI R0,8
    RegisterImmediate,
}

impl OperandLayout {
    /// Number of operand bytes following the opcode.
    pub const fn operand_count(self) -> u8 {
        match self {
            OperandLayout::None => 0,
            OperandLayout::Register => 1,
            OperandLayout::RegisterRegister | OperandLayout::RegisterImmediate => 2,
        }
    }
}
