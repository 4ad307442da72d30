//! # Load and Output Instructions
//!
//! This module implements the data movement operations:
//! - LDI: Load Immediate
//! - PRN: Print Register

use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the LDI (Load Immediate) instruction.
///
/// `LDI reg, value` copies the literal byte into the register. No flags are
/// affected.
///
/// Bytes: 3
pub(crate) fn execute_ldi<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let register = cpu.register_operand(1)?;
    let value = cpu.operand(2);

    cpu.reg[register] = value;

    Ok(())
}

/// Executes the PRN (Print Register) instruction.
///
/// `PRN reg` emits the register's value as a decimal number, one per line.
///
/// Bytes: 2
pub(crate) fn execute_prn<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    let register = cpu.register_operand(1)?;
    let value = cpu.reg[register];

    cpu.print(value);

    Ok(())
}
