//! Integration tests for the LS-8 disassembler

use ls8::disassembler::formatter::{format_instruction, format_listing_line};
use ls8::disassembler::{disassemble, DisassemblyOptions};
use ls8::{read_program, OperandLayout};

#[test]
fn test_single_instruction_disassembly() {
    let bytes = &[0b1000_0010, 0x00, 0x08]; // LDI R0,8

    let instructions = disassemble(bytes, DisassemblyOptions::default());

    assert_eq!(instructions.len(), 1);

    let instr = &instructions[0];
    assert_eq!(instr.address, 0x00);
    assert_eq!(instr.opcode, 0b1000_0010);
    assert_eq!(instr.mnemonic, "LDI");
    assert_eq!(instr.operand_layout, OperandLayout::RegisterImmediate);
    assert_eq!(instr.operand_bytes, vec![0x00, 0x08]);
    assert_eq!(instr.size_bytes, 3);

    assert_eq!(format_instruction(instr), "LDI R0,8");
}

#[test]
fn test_mult_program_listing() {
    let bytes = &[
        0b1000_0010, 0, 8, // LDI R0,8
        0b1000_0010, 1, 9, // LDI R1,9
        0b1010_0010, 0, 1, // MUL R0,R1
        0b0100_0111, 0,    // PRN R0
        0b0000_0001,       // HLT
    ];

    let listing: Vec<String> = disassemble(bytes, DisassemblyOptions::default())
        .iter()
        .map(format_instruction)
        .collect();

    assert_eq!(
        listing,
        vec!["LDI R0,8", "LDI R1,9", "MUL R0,R1", "PRN R0", "HLT"]
    );
}

#[test]
fn test_addresses_follow_instruction_sizes() {
    let bytes = &[0b0100_0101, 1, 0b0001_0001, 0b1010_0111, 0, 1];

    let addresses: Vec<u8> = disassemble(bytes, DisassemblyOptions::default())
        .iter()
        .map(|instr| instr.address)
        .collect();

    assert_eq!(addresses, vec![0, 2, 3]);
}

#[test]
fn test_start_address_offsets_listing() {
    let options = DisassemblyOptions {
        start_address: 0x18,
        stop_at_halt: false,
    };

    let instructions = disassemble(&[0b1010_0000, 0, 0, 0b0001_0001], options);

    assert_eq!(instructions[0].address, 0x18);
    assert_eq!(instructions[1].address, 0x1B);
    assert_eq!(format_instruction(&instructions[0]), "ADD R0,R0");
    assert_eq!(format_instruction(&instructions[1]), "RET");
}

#[test]
fn test_unknown_bytes_become_byte_directives() {
    let instructions = disassemble(&[0xFF, 0b0000_0001], DisassemblyOptions::default());

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].mnemonic, ".byte");
    assert_eq!(instructions[0].size_bytes, 1);
    assert_eq!(format_instruction(&instructions[0]), ".byte %11111111");
    assert_eq!(format_instruction(&instructions[1]), "HLT");
}

#[test]
fn test_truncated_instruction_becomes_byte_directives() {
    // LDI missing its immediate
    let instructions = disassemble(&[0b1000_0010, 0x00], DisassemblyOptions::default());

    assert_eq!(instructions.len(), 2);
    assert!(instructions.iter().all(|instr| instr.mnemonic == ".byte"));
}

#[test]
fn test_call_program_listing() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("programs/call.ls8");
    let image = read_program(path).unwrap();

    let lines: Vec<String> = disassemble(&image, DisassemblyOptions::default())
        .iter()
        .map(format_listing_line)
        .collect();

    assert_eq!(lines[0], "00: 82 01 18  LDI R1,24");
    assert_eq!(lines[2], "06: 50 01     CALL R1");
    assert_eq!(lines.last().unwrap(), "1D: 11        RET");
}
