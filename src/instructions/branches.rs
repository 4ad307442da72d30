//! # Branch Instructions
//!
//! This module implements the conditional jumps:
//! - JEQ: Jump if Equal
//! - JNE: Jump if Not Equal
//!
//! Both test FL (R5) against the exact `FLAG_EQUAL` pattern left by CMP. They
//! carry the sets-PC bit even though they only sometimes jump, so when the
//! jump is not taken the handler itself skips past the instruction.
//!
//! FL = 0 (no CMP executed yet) counts as "not equal".

use crate::cpu::{FL, FLAG_EQUAL};
use crate::{ExecutionError, MemoryBus, CPU, OPCODE_TABLE};

fn branch<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, taken: bool) -> Result<(), ExecutionError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let register = cpu.register_operand(1)?;

    if taken {
        cpu.pc = cpu.reg[register];
    } else {
        cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes);
    }

    Ok(())
}

/// Executes the JEQ instruction.
///
/// Jumps to the address in the register when FL equals `FLAG_EQUAL`,
/// otherwise moves to the next instruction.
///
/// Bytes: 2
pub(crate) fn execute_jeq<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let taken = cpu.reg[FL] == FLAG_EQUAL;
    branch(cpu, opcode, taken)
}

/// Executes the JNE instruction.
///
/// The complement of JEQ: jumps when FL is anything other than `FLAG_EQUAL`.
///
/// Bytes: 2
pub(crate) fn execute_jne<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), ExecutionError> {
    let taken = cpu.reg[FL] != FLAG_EQUAL;
    branch(cpu, opcode, taken)
}
