//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary memory image and register file, then runs a bounded
//! number of instructions. Errors are fine; panics are bugs.

#![no_main]

use arbitrary::Arbitrary;
use ls8::{MemoryBus, Ram, CPU};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Full 256-byte memory image
    memory: [u8; 256],
    /// Initial register file, SP included
    registers: [u8; 8],
    /// Starting program counter
    pc: u8,
    /// Instruction budget
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Ram::new();
    for (addr, &byte) in input.memory.iter().enumerate() {
        memory.write(addr as u8, byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.set_print_callback(|_| {});
    cpu.set_pc(input.pc);
    for (index, &value) in input.registers.iter().enumerate() {
        cpu.set_reg(index, value);
    }

    match cpu.run_for_steps(input.steps as u64) {
        Ok(executed) => assert!(executed <= input.steps as u64),
        // A faulting instruction is not counted
        Err(_) => assert!(cpu.steps() < input.steps as u64),
    }

    // Stepping after halt is a no-op
    if cpu.is_halted() {
        let halted_pc = cpu.pc();
        let halted_steps = cpu.steps();
        assert_eq!(cpu.step(), Ok(()));
        assert_eq!(cpu.pc(), halted_pc);
        assert_eq!(cpu.steps(), halted_steps);
    }
});
