//! Opcode table validation tests
//!
//! Verifies that the opcode metadata table agrees with the bit-level encoding.

use ls8::opcodes::{operand_count, sets_pc, size_bytes};
use ls8::{Instruction, OperandLayout, OPCODE_TABLE};

#[test]
fn test_opcode_table_completeness() {
    assert_eq!(
        OPCODE_TABLE.len(),
        256,
        "Opcode table must have exactly 256 entries"
    );

    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        assert!(
            !metadata.mnemonic.is_empty(),
            "Opcode {:#010b} has empty mnemonic",
            opcode
        );
    }
}

#[test]
fn test_size_matches_operand_bits() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        let opcode = opcode as u8;
        assert_eq!(metadata.operand_count, operand_count(opcode));
        assert_eq!(metadata.size_bytes, size_bytes(opcode));
        assert_eq!(metadata.sets_pc, sets_pc(opcode));
    }
}

#[test]
fn test_implemented_entries_match_instruction_enum() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        match Instruction::decode(opcode as u8) {
            Some(instruction) => {
                assert!(metadata.implemented);
                assert_eq!(metadata.mnemonic, instruction.mnemonic());
                assert_eq!(metadata.operand_layout, instruction.operand_layout());
            }
            None => {
                assert!(!metadata.implemented);
                assert_eq!(metadata.mnemonic, "???");
                assert_eq!(metadata.operand_layout, OperandLayout::None);
            }
        }
    }
}

#[test]
fn test_known_opcode_values() {
    let expected = [
        ("HLT", 0b0000_0001),
        ("RET", 0b0001_0001),
        ("PUSH", 0b0100_0101),
        ("POP", 0b0100_0110),
        ("PRN", 0b0100_0111),
        ("CALL", 0b0101_0000),
        ("JMP", 0b0101_0100),
        ("JEQ", 0b0101_0101),
        ("JNE", 0b0101_0110),
        ("LDI", 0b1000_0010),
        ("ADD", 0b1010_0000),
        ("MUL", 0b1010_0010),
        ("CMP", 0b1010_0111),
    ];

    for (mnemonic, opcode) in expected {
        assert_eq!(OPCODE_TABLE[opcode as usize].mnemonic, mnemonic);
    }
}

#[test]
fn test_sets_pc_instructions() {
    let sets_pc: Vec<&str> = Instruction::ALL
        .iter()
        .filter(|instruction| OPCODE_TABLE[instruction.opcode() as usize].sets_pc)
        .map(|instruction| instruction.mnemonic())
        .collect();

    assert_eq!(sets_pc, vec!["RET", "CALL", "JMP", "JEQ", "JNE"]);
}
