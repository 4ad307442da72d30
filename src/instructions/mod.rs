//! # LS-8 Instruction Implementations
//!
//! This module contains the implementations of all LS-8 instructions, organized by category.
//! Each instruction is a standalone function taking a mutable reference to the CPU.
//!
//! Handlers for instructions without the sets-PC bit leave the PC alone; the
//! dispatcher in `CPU::step` advances it afterwards. Handlers for CALL, RET,
//! JMP, JEQ and JNE always write the next PC themselves.
//!
//! ## Categories
//!
//! - **load_store**: Register loads and output (LDI, PRN)
//! - **alu**: Arithmetic, logic and comparison (ADD, MUL, CMP)
//! - **stack**: Stack operations (PUSH, POP)
//! - **control**: Unconditional control flow (HLT, CALL, RET, JMP)
//! - **branches**: Conditional jumps on the flags register (JEQ, JNE)

pub mod alu;
pub mod branches;
pub mod control;
pub mod load_store;
pub mod stack;
