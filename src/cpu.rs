//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the LS-8 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: eight 8-bit registers R0-R7
//! - **Program counter** (PC): 8-bit address of the next instruction
//! - **Halted flag**: set by HLT, stops the execution loop
//! - **Step counter**: number of instructions executed
//!
//! Two registers have a fixed role:
//! - **R7** is the stack pointer (`SP`), initialised to 0xF4
//! - **R5** holds the flags (`FL`) written by CMP
//!
//! Both remain ordinary registers: any instruction naming R5 or R7 reads and
//! writes them like any other register.
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction
//! - `run()`: Execute until HLT
//! - `run_for_steps()`: Execute until HLT or an instruction budget is exhausted
//!
//! After each handler returns, the PC advances by the instruction size unless
//! the opcode has the sets-PC bit (bit 4), in which case the handler already
//! chose the next PC.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use log::{debug, log_enabled, trace, warn, Level};

use crate::instructions::{alu, branches, control, load_store, stack};
use crate::{ExecutionError, Instruction, MemoryBus, OPCODE_TABLE};

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Index of the stack pointer register.
pub const SP: usize = 7;

/// Index of the flags register.
pub const FL: usize = 5;

/// Stack pointer value at power-on.
pub const SP_INIT: u8 = 0xF4;

/// Flags pattern after CMP of equal values.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Flags pattern after CMP where the first register is greater.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Flags pattern after CMP where the first register is less.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Operations the ALU can perform on two registers.
///
/// # Examples
///
/// ```
/// use ls8::AluOp;
///
/// let op: AluOp = "MUL".parse().unwrap();
/// assert_eq!(op, AluOp::Mul);
/// assert!("DIV".parse::<AluOp>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// reg_a = reg_a + reg_b (wrapping)
    Add,
    /// reg_a = reg_a - reg_b (wrapping)
    Sub,
    /// reg_a = reg_a * reg_b (wrapping)
    Mul,
    /// reg_a = reg_a & reg_b
    And,
    /// FL = ordering of reg_a and reg_b
    Cmp,
}

impl AluOp {
    /// Operation name as used in assembly listings.
    pub fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Mul => "MUL",
            AluOp::And => "AND",
            AluOp::Cmp => "CMP",
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when parsing an unknown ALU operation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAluOp(pub String);

impl fmt::Display for UnknownAluOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown ALU operation \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownAluOp {}

impl FromStr for AluOp {
    type Err = UnknownAluOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(AluOp::Add),
            "SUB" => Ok(AluOp::Sub),
            "MUL" => Ok(AluOp::Mul),
            "AND" => Ok(AluOp::And),
            "CMP" => Ok(AluOp::Cmp),
            other => Err(UnknownAluOp(other.to_string())),
        }
    }
}

/// LS-8 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use ls8::{CPU, Ram, SP_INIT};
///
/// let cpu = CPU::new(Ram::new());
///
/// assert_eq!(cpu.pc(), 0);
/// assert_eq!(cpu.sp(), SP_INIT);
/// assert_eq!(cpu.fl(), 0);
/// assert!(!cpu.is_halted());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file R0-R7 (R5 = flags, R7 = stack pointer)
    pub(crate) reg: [u8; REGISTER_COUNT],

    /// Program counter (address of next instruction)
    pub(crate) pc: u8,

    /// Set by HLT
    pub(crate) halted: bool,

    /// Instructions executed since power-on
    pub(crate) steps: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Receives every value printed by PRN
    on_print: Option<Box<dyn FnMut(u8)>>,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU over an already loaded memory.
    ///
    /// Power-on state:
    /// - All registers zero except the stack pointer (R7 = 0xF4)
    /// - PC = 0
    /// - Not halted
    pub fn new(memory: M) -> Self {
        let mut reg = [0; REGISTER_COUNT];
        reg[SP] = SP_INIT;

        Self {
            reg,
            pc: 0,
            halted: false,
            steps: 0,
            memory,
            on_print: None,
        }
    }

    /// Installs the sink for PRN output.
    ///
    /// Without a callback PRN writes the decimal value and a newline to stdout.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use ls8::{load_program, CPU};
    ///
    /// let memory = load_program("10000010\n0\n1001000\n01000111\n0\n00000001").unwrap();
    /// let mut cpu = CPU::new(memory);
    ///
    /// let printed = Rc::new(RefCell::new(Vec::new()));
    /// let sink = Rc::clone(&printed);
    /// cpu.set_print_callback(move |value| sink.borrow_mut().push(value));
    ///
    /// cpu.run().unwrap();
    /// assert_eq!(*printed.borrow(), vec![72]);
    /// ```
    pub fn set_print_callback<F>(&mut self, callback: F)
    where
        F: FnMut(u8) + 'static,
    {
        self.on_print = Some(Box::new(callback));
    }

    /// Removes the PRN callback, restoring stdout output.
    pub fn clear_print_callback(&mut self) {
        self.on_print = None;
    }

    /// Executes one instruction.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC
    /// 2. Decode it; unknown opcodes fail before any state changes
    /// 3. Run the handler
    /// 4. Advance PC by the instruction size unless the opcode sets PC itself
    ///    or the CPU halted
    ///
    /// Stepping a halted CPU does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{CPU, ExecutionError, MemoryBus, Ram};
    ///
    /// let mut mem = Ram::new();
    /// mem.write(0x00, 0xFF); // not an LS-8 opcode
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::InvalidInstruction { opcode: 0xFF, address: 0x00 })
    /// );
    /// assert_eq!(cpu.pc(), 0x00);
    /// ```
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        if self.halted {
            return Ok(());
        }

        let opcode = self.memory.read(self.pc);

        let instruction = match Instruction::decode(opcode) {
            Some(instruction) => instruction,
            None => {
                debug!("unknown opcode {:#04X} at {:#04X}", opcode, self.pc);
                return Err(ExecutionError::InvalidInstruction {
                    opcode,
                    address: self.pc,
                });
            }
        };

        if log_enabled!(Level::Trace) {
            trace!("{}", self.trace());
        }

        match instruction {
            Instruction::Ldi => load_store::execute_ldi(self)?,
            Instruction::Prn => load_store::execute_prn(self)?,
            Instruction::Hlt => control::execute_hlt(self)?,
            Instruction::Add => alu::execute_add(self)?,
            Instruction::Mul => alu::execute_mul(self)?,
            Instruction::Cmp => alu::execute_cmp(self)?,
            Instruction::Push => stack::execute_push(self)?,
            Instruction::Pop => stack::execute_pop(self)?,
            Instruction::Call => control::execute_call(self)?,
            Instruction::Ret => control::execute_ret(self)?,
            Instruction::Jmp => control::execute_jmp(self)?,
            Instruction::Jeq => branches::execute_jeq(self, opcode)?,
            Instruction::Jne => branches::execute_jne(self, opcode)?,
        }

        self.steps += 1;

        let metadata = &OPCODE_TABLE[opcode as usize];
        if !metadata.sets_pc && !self.halted {
            self.pc = self.pc.wrapping_add(metadata.size_bytes);
        }

        Ok(())
    }

    /// Runs until HLT.
    ///
    /// Returns the number of instructions executed by this call. A program
    /// without HLT never returns unless it faults.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{load_program, CPU};
    ///
    /// let memory = load_program("10000010\n0\n101\n00000001").unwrap();
    /// let mut cpu = CPU::new(memory);
    ///
    /// assert_eq!(cpu.run(), Ok(2));
    /// assert_eq!(cpu.reg(0), 5);
    /// ```
    pub fn run(&mut self) -> Result<u64, ExecutionError> {
        let start_steps = self.steps;

        while !self.halted {
            self.step()?;
        }

        debug!(
            "halted at {:#04X} after {} instructions",
            self.pc,
            self.steps - start_steps
        );
        Ok(self.steps - start_steps)
    }

    /// Runs until HLT or until `limit` instructions have executed.
    ///
    /// Returns the number of instructions executed by this call.
    pub fn run_for_steps(&mut self, limit: u64) -> Result<u64, ExecutionError> {
        let start_steps = self.steps;

        while !self.halted && self.steps - start_steps < limit {
            self.step()?;
        }

        Ok(self.steps - start_steps)
    }

    /// Applies an ALU operation to two registers.
    ///
    /// ADD, SUB, MUL and AND write the result into `reg_a`, wrapping modulo 256.
    /// CMP leaves both registers untouched and sets FL to exactly one of
    /// `FLAG_EQUAL`, `FLAG_GREATER` or `FLAG_LESS`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{AluOp, CPU, Ram, FLAG_LESS};
    ///
    /// let mut cpu = CPU::new(Ram::new());
    /// cpu.set_reg(0, 200);
    /// cpu.set_reg(1, 100);
    ///
    /// cpu.alu(AluOp::Add, 0, 1).unwrap();
    /// assert_eq!(cpu.reg(0), 44); // 300 mod 256
    ///
    /// cpu.alu(AluOp::Cmp, 0, 1).unwrap();
    /// assert_eq!(cpu.fl(), FLAG_LESS);
    /// ```
    pub fn alu(&mut self, op: AluOp, reg_a: u8, reg_b: u8) -> Result<(), ExecutionError> {
        let a = self.check_register(reg_a)?;
        let b = self.check_register(reg_b)?;

        let (x, y) = (self.reg[a], self.reg[b]);
        match op {
            AluOp::Add => self.reg[a] = x.wrapping_add(y),
            AluOp::Sub => self.reg[a] = x.wrapping_sub(y),
            AluOp::Mul => self.reg[a] = x.wrapping_mul(y),
            AluOp::And => self.reg[a] = x & y,
            AluOp::Cmp => self.reg[FL] = alu::compare(x, y),
        }

        Ok(())
    }

    /// Applies an ALU operation given by name ("ADD", "SUB", "MUL", "AND", "CMP").
    ///
    /// Any other name fails with `UnsupportedOperation`.
    pub fn alu_named(&mut self, op: &str, reg_a: u8, reg_b: u8) -> Result<(), ExecutionError> {
        let op = op
            .parse::<AluOp>()
            .map_err(|UnknownAluOp(operation)| ExecutionError::UnsupportedOperation {
                operation,
                address: self.pc,
            })?;
        self.alu(op, reg_a, reg_b)
    }

    /// Renders the PC, the three bytes at PC and all registers as hex.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{CPU, Ram};
    ///
    /// let cpu = CPU::new(Ram::from_image(&[0x82, 0x00, 0x08]).unwrap());
    /// assert_eq!(
    ///     cpu.trace(),
    ///     "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4"
    /// );
    /// ```
    pub fn trace(&self) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.memory.read(self.pc),
            self.memory.read(self.pc.wrapping_add(1)),
            self.memory.read(self.pc.wrapping_add(2)),
        );

        for value in self.reg {
            line.push_str(&format!(" {:02X}", value));
        }

        line
    }

    // ========== Handler Helpers ==========

    /// Reads the operand byte `n` positions after the opcode.
    pub(crate) fn operand(&self, n: u8) -> u8 {
        self.memory.read(self.pc.wrapping_add(n))
    }

    /// Reads operand `n` as a register index.
    pub(crate) fn register_operand(&self, n: u8) -> Result<usize, ExecutionError> {
        self.check_register(self.operand(n))
    }

    fn check_register(&self, register: u8) -> Result<usize, ExecutionError> {
        let index = register as usize;
        if index < REGISTER_COUNT {
            Ok(index)
        } else {
            Err(ExecutionError::InvalidRegister {
                register,
                address: self.pc,
            })
        }
    }

    /// Decrements SP, then stores `value` at the new top of stack.
    pub(crate) fn push(&mut self, value: u8) {
        self.reg[SP] = self.reg[SP].wrapping_sub(1);
        self.memory.write(self.reg[SP], value);
    }

    /// Reads the top of stack, then increments SP.
    pub(crate) fn pop(&mut self) -> u8 {
        let value = self.memory.read(self.reg[SP]);
        self.reg[SP] = self.reg[SP].wrapping_add(1);
        value
    }

    /// Delivers a PRN value to the callback or stdout.
    pub(crate) fn print(&mut self, value: u8) {
        match self.on_print.as_mut() {
            Some(callback) => callback(value),
            None => write_decimal(&mut io::stdout().lock(), value),
        }
    }

    // ========== State Getters ==========

    /// Returns the program counter value.
    pub fn pc(&self) -> u8 {
        self.pc
    }

    /// Returns the value of register `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 8 or more.
    pub fn reg(&self, index: usize) -> u8 {
        self.reg[index]
    }

    /// Returns the whole register file.
    pub fn registers(&self) -> [u8; REGISTER_COUNT] {
        self.reg
    }

    /// Returns the stack pointer (R7).
    pub fn sp(&self) -> u8 {
        self.reg[SP]
    }

    /// Returns the flags register (R5).
    pub fn fl(&self) -> u8 {
        self.reg[FL]
    }

    /// Returns true once HLT has executed.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the number of instructions executed since power-on.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== State Setters ==========

    /// Sets the program counter.
    pub fn set_pc(&mut self, pc: u8) {
        self.pc = pc;
    }

    /// Sets register `index` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 8 or more.
    pub fn set_reg(&mut self, index: usize, value: u8) {
        self.reg[index] = value;
    }
}

/// Writes `value` as a decimal line. A closed or failing sink drops the value.
fn write_decimal<W: Write>(out: &mut W, value: u8) {
    if let Err(err) = writeln!(out, "{}", value) {
        warn!("PRN output lost: {}", err);
    }
}

impl<M: MemoryBus> fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CPU")
            .field("reg", &self.reg)
            .field("pc", &self.pc)
            .field("halted", &self.halted)
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
