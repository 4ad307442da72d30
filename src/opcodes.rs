//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode metadata table that serves as the
//! single source of truth for LS-8 instruction decoding.
//!
//! The LS-8 opcode byte describes itself:
//!
//! - bits 7-6: number of operand bytes (0, 1 or 2)
//! - bit 5: the instruction is carried out by the ALU
//! - bit 4: the handler sets the PC itself
//! - bits 3-0: instruction identifier
//!
//! Thirteen opcodes are assigned. The remaining 243 entries are marked with the
//! "???" mnemonic; fetching one of them is an `InvalidInstruction` error.

use crate::operands::OperandLayout;

/// Mask for the operand count bits.
const OPERAND_COUNT_MASK: u8 = 0b1100_0000;

/// ALU operation bit.
const ALU_BIT: u8 = 0b0010_0000;

/// Sets-PC-itself bit.
const SETS_PC_BIT: u8 = 0b0001_0000;

/// Number of operand bytes that follow `opcode`, taken from bits 7-6.
pub const fn operand_count(opcode: u8) -> u8 {
    (opcode & OPERAND_COUNT_MASK) >> 6
}

/// Whether the handler for `opcode` is responsible for the next PC value.
pub const fn sets_pc(opcode: u8) -> bool {
    opcode & SETS_PC_BIT != 0
}

/// Whether `opcode` is an ALU operation.
pub const fn uses_alu(opcode: u8) -> bool {
    opcode & ALU_BIT != 0
}

/// Total instruction size in bytes (opcode + operands).
pub const fn size_bytes(opcode: u8) -> u8 {
    operand_count(opcode) + 1
}

/// The closed set of LS-8 instructions.
///
/// Discriminants are the opcode bytes.
///
/// # Examples
///
/// ```
/// use ls8::Instruction;
///
/// assert_eq!(Instruction::decode(0b1000_0010), Some(Instruction::Ldi));
/// assert_eq!(Instruction::Ldi.opcode(), 0b1000_0010);
/// assert_eq!(Instruction::decode(0xFF), None);
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Halt the CPU
    Hlt = 0b0000_0001,
    /// Return from subroutine
    Ret = 0b0001_0001,
    /// Push register onto the stack
    Push = 0b0100_0101,
    /// Pop top of stack into register
    Pop = 0b0100_0110,
    /// Print register as decimal
    Prn = 0b0100_0111,
    /// Call subroutine at address in register
    Call = 0b0101_0000,
    /// Jump to address in register
    Jmp = 0b0101_0100,
    /// Jump if equal flag is set
    Jeq = 0b0101_0101,
    /// Jump if equal flag is clear
    Jne = 0b0101_0110,
    /// Load immediate into register
    Ldi = 0b1000_0010,
    /// Add two registers
    Add = 0b1010_0000,
    /// Multiply two registers
    Mul = 0b1010_0010,
    /// Compare two registers
    Cmp = 0b1010_0111,
}

impl Instruction {
    /// Every assigned instruction, in opcode order.
    pub const ALL: [Instruction; 13] = [
        Instruction::Hlt,
        Instruction::Ret,
        Instruction::Push,
        Instruction::Pop,
        Instruction::Prn,
        Instruction::Call,
        Instruction::Jmp,
        Instruction::Jeq,
        Instruction::Jne,
        Instruction::Ldi,
        Instruction::Add,
        Instruction::Mul,
        Instruction::Cmp,
    ];

    /// Maps an opcode byte to its instruction, or `None` for unassigned bytes.
    pub const fn decode(opcode: u8) -> Option<Instruction> {
        match opcode {
            0b0000_0001 => Some(Instruction::Hlt),
            0b0001_0001 => Some(Instruction::Ret),
            0b0100_0101 => Some(Instruction::Push),
            0b0100_0110 => Some(Instruction::Pop),
            0b0100_0111 => Some(Instruction::Prn),
            0b0101_0000 => Some(Instruction::Call),
            0b0101_0100 => Some(Instruction::Jmp),
            0b0101_0101 => Some(Instruction::Jeq),
            0b0101_0110 => Some(Instruction::Jne),
            0b1000_0010 => Some(Instruction::Ldi),
            0b1010_0000 => Some(Instruction::Add),
            0b1010_0010 => Some(Instruction::Mul),
            0b1010_0111 => Some(Instruction::Cmp),
            _ => None,
        }
    }

    /// The opcode byte for this instruction.
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Hlt => "HLT",
            Instruction::Ret => "RET",
            Instruction::Push => "PUSH",
            Instruction::Pop => "POP",
            Instruction::Prn => "PRN",
            Instruction::Call => "CALL",
            Instruction::Jmp => "JMP",
            Instruction::Jeq => "JEQ",
            Instruction::Jne => "JNE",
            Instruction::Ldi => "LDI",
            Instruction::Add => "ADD",
            Instruction::Mul => "MUL",
            Instruction::Cmp => "CMP",
        }
    }

    /// What the operand bytes mean.
    pub const fn operand_layout(self) -> OperandLayout {
        match self {
            Instruction::Hlt | Instruction::Ret => OperandLayout::None,
            Instruction::Push
            | Instruction::Pop
            | Instruction::Prn
            | Instruction::Call
            | Instruction::Jmp
            | Instruction::Jeq
            | Instruction::Jne => OperandLayout::Register,
            Instruction::Ldi => OperandLayout::RegisterImmediate,
            Instruction::Add | Instruction::Mul | Instruction::Cmp => {
                OperandLayout::RegisterRegister
            }
        }
    }
}

/// Metadata for a single LS-8 opcode.
///
/// # Fields
///
/// - `mnemonic`: Instruction name (e.g., "LDI", "PRN", "???")
/// - `operand_layout`: How the operand bytes are interpreted
/// - `operand_count`: Operand bytes following the opcode (bits 7-6)
/// - `size_bytes`: Total instruction size including the opcode (1-3 bytes)
/// - `sets_pc`: Whether the handler sets the PC itself (bit 4)
/// - `implemented`: Whether the opcode has a handler
///
/// # Examples
///
/// ```
/// use ls8::{OPCODE_TABLE, OperandLayout};
///
/// let ldi = &OPCODE_TABLE[0b1000_0010];
/// assert_eq!(ldi.mnemonic, "LDI");
/// assert_eq!(ldi.operand_layout, OperandLayout::RegisterImmediate);
/// assert_eq!(ldi.size_bytes, 3);
/// assert!(!ldi.sets_pc);
/// assert!(ldi.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("???" for unassigned opcodes).
    pub mnemonic: &'static str,

    /// Operand layout for this instruction.
    ///
    /// Unassigned opcodes use `OperandLayout::None`.
    pub operand_layout: OperandLayout,

    /// Operand bytes following the opcode, decoded from bits 7-6.
    pub operand_count: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether the handler is responsible for the next PC value.
    pub sets_pc: bool,

    /// Whether this opcode has a handler.
    pub implemented: bool,
}

const fn unassigned(opcode: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: "???",
        operand_layout: OperandLayout::None,
        operand_count: operand_count(opcode),
        size_bytes: size_bytes(opcode),
        sets_pc: sets_pc(opcode),
        implemented: false,
    }
}

const fn build_table() -> [OpcodeMetadata; 256] {
    let mut table = [unassigned(0); 256];

    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = unassigned(opcode as u8);
        opcode += 1;
    }

    let mut i = 0;
    while i < Instruction::ALL.len() {
        let instruction = Instruction::ALL[i];
        let opcode = instruction.opcode();
        table[opcode as usize] = OpcodeMetadata {
            mnemonic: instruction.mnemonic(),
            operand_layout: instruction.operand_layout(),
            operand_count: operand_count(opcode),
            size_bytes: size_bytes(opcode),
            sets_pc: sets_pc(opcode),
            implemented: true,
        };
        i += 1;
    }

    table
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use ls8::OPCODE_TABLE;
///
/// let hlt = &OPCODE_TABLE[0b0000_0001];
/// assert_eq!(hlt.mnemonic, "HLT");
/// assert_eq!(hlt.size_bytes, 1);
///
/// let illegal = &OPCODE_TABLE[0xFF];
/// assert_eq!(illegal.mnemonic, "???");
/// assert!(!illegal.implemented);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();
