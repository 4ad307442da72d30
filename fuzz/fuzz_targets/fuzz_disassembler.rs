//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use ls8::disassembler::formatter::format_listing_line;
use ls8::{disassemble, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u8,
    stop_at_halt: bool,
}

fuzz_target!(|input: FuzzInput| {
    if input.bytes.len() > 256 {
        return;
    }

    let options = DisassemblyOptions {
        start_address: input.start_address,
        stop_at_halt: input.stop_at_halt,
    };

    let instructions = disassemble(&input.bytes, options);

    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!(instr.size_bytes >= 1 && instr.size_bytes <= 3);
        assert_eq!(
            instr.operand_bytes.len() + 1,
            instr.size_bytes as usize
        );

        // Formatting must not panic either
        let _ = format_listing_line(instr);

        total_size += instr.size_bytes as usize;
        expected_address = expected_address.wrapping_add(instr.size_bytes);
    }

    if !input.stop_at_halt {
        assert_eq!(total_size, input.bytes.len());
    }
});
