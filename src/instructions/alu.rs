//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements the register-to-register ALU instructions:
//! - ADD: Add
//! - MUL: Multiply
//! - CMP: Compare
//!
//! All three take two register operands and delegate to `CPU::alu`, which also
//! provides SUB and AND for embedders.

use crate::cpu::{AluOp, FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};
use crate::{ExecutionError, MemoryBus, CPU};

/// Flags pattern for comparing `a` against `b`.
pub(crate) fn compare(a: u8, b: u8) -> u8 {
    if a == b {
        FLAG_EQUAL
    } else if a > b {
        FLAG_GREATER
    } else {
        FLAG_LESS
    }
}

fn execute_binary<M: MemoryBus>(cpu: &mut CPU<M>, op: AluOp) -> Result<(), ExecutionError> {
    let reg_a = cpu.operand(1);
    let reg_b = cpu.operand(2);
    cpu.alu(op, reg_a, reg_b)
}

/// Executes the ADD instruction: `reg_a = reg_a + reg_b`, wrapping.
///
/// Bytes: 3
pub(crate) fn execute_add<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    execute_binary(cpu, AluOp::Add)
}

/// Executes the MUL instruction: `reg_a = reg_a * reg_b`, wrapping.
///
/// Bytes: 3
pub(crate) fn execute_mul<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    execute_binary(cpu, AluOp::Mul)
}

/// Executes the CMP instruction.
///
/// Sets FL (R5) to `FLAG_EQUAL`, `FLAG_GREATER` or `FLAG_LESS` according to
/// how `reg_a` orders against `reg_b`. Neither operand register changes.
///
/// Bytes: 3
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>) -> Result<(), ExecutionError> {
    execute_binary(cpu, AluOp::Cmp)
}
