//! # Control Flow Instructions
//!
//! This module implements unconditional control flow:
//! - HLT: Halt
//! - CALL: Call Subroutine
//! - RET: Return from Subroutine
//! - JMP: Jump
//!
//! CALL, RET and JMP carry the sets-PC bit, so each handler writes the next PC
//! itself. HLT does not advance the PC at all.

use log::debug;

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the HLT instruction.
///
/// Sets the halted flag. The PC stays on the HLT.
pub(crate) fn execute_hlt<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    debug!("HLT at {:#04X}", cpu.pc);
    cpu.halted = true;

    Ok(())
}

/// Executes the CALL instruction.
///
/// `CALL reg`:
/// 1. Push the return address PC+2 (the instruction after the CALL)
/// 2. Set PC to the value held in the register
///
/// Bytes: 2
pub(crate) fn execute_call<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let register = cpu.register_operand(1)?;

    let return_address = cpu.pc.wrapping_add(2);
    cpu.push(return_address);

    cpu.pc = cpu.reg[register];

    Ok(())
}

/// Executes the RET instruction.
///
/// Pops the return address from the stack into PC.
///
/// Bytes: 1
pub(crate) fn execute_ret<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    cpu.pc = cpu.pop();

    Ok(())
}

/// Executes the JMP instruction.
///
/// `JMP reg` sets PC to the value held in the register. No flags or stack
/// effects.
///
/// Bytes: 2
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let register = cpu.register_operand(1)?;

    cpu.pc = cpu.reg[register];

    Ok(())
}
