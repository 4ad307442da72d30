//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PUSH: Push Register
//! - POP: Pop into Register
//!
//! The stack lives in the same 256 bytes as the program and grows downward
//! from the initial stack pointer (R7 = 0xF4). SP always addresses the current
//! top of stack; an empty stack has SP = 0xF4.

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the PUSH instruction.
///
/// Stack operation:
/// 1. Decrement SP
/// 2. Write the register value to memory at SP
///
/// Bytes: 2
pub(crate) fn execute_push<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let register = cpu.register_operand(1)?;
    let value = cpu.reg[register];

    cpu.push(value);

    Ok(())
}

/// Executes the POP instruction.
///
/// Stack operation:
/// 1. Read memory at SP into the register
/// 2. Increment SP
///
/// `POP R7` leaves SP equal to the popped value.
///
/// Bytes: 2
pub(crate) fn execute_pop<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let register = cpu.register_operand(1)?;

    let value = cpu.pop();
    cpu.reg[register] = value;

    Ok(())
}
