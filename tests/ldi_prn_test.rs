//! Tests for the LDI (Load Immediate) and PRN (Print Register) instructions.
//!
//! Tests cover:
//! - LDI writes the literal into the named register only
//! - PRN delivers the register value to the print callback
//! - Neither instruction touches the flags register or the stack

use std::cell::RefCell;
use std::rc::Rc;

use ls8::{ExecutionError, Ram, CPU, SP_INIT};

const LDI: u8 = 0b1000_0010;
const PRN: u8 = 0b0100_0111;
const HLT: u8 = 0b0000_0001;

/// Helper function to create a CPU running the given image from address 0
fn setup_cpu(image: &[u8]) -> CPU<Ram> {
    CPU::new(Ram::from_image(image).unwrap())
}

/// Collects every PRN value
fn capture_output(cpu: &mut CPU<Ram>) -> Rc<RefCell<Vec<u8>>> {
    let printed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&printed);
    cpu.set_print_callback(move |value| sink.borrow_mut().push(value));
    printed
}

// ========== LDI Tests ==========

#[test]
fn test_ldi_basic_operation() {
    let mut cpu = setup_cpu(&[LDI, 0, 8]);

    cpu.step().unwrap();

    assert_eq!(cpu.reg(0), 8);
    assert_eq!(cpu.pc(), 3);
}

#[test]
fn test_ldi_only_touches_target_register() {
    let mut cpu = setup_cpu(&[LDI, 4, 0xFF]);

    cpu.step().unwrap();

    assert_eq!(cpu.registers(), [0, 0, 0, 0, 0xFF, 0, 0, SP_INIT]);
}

#[test]
fn test_ldi_overwrites_previous_value() {
    let mut cpu = setup_cpu(&[LDI, 1, 5, LDI, 1, 0]);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.reg(1), 0);
}

#[test]
fn test_ldi_into_stack_pointer() {
    // R7 is an ordinary register as far as LDI is concerned
    let mut cpu = setup_cpu(&[LDI, 7, 0x80]);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x80);
}

#[test]
fn test_ldi_invalid_register() {
    let mut cpu = setup_cpu(&[LDI, 8, 1]);

    assert_eq!(
        cpu.step(),
        Err(ExecutionError::InvalidRegister {
            register: 8,
            address: 0,
        })
    );
    assert_eq!(cpu.pc(), 0);
}

// ========== PRN Tests ==========

#[test]
fn test_prn_basic_operation() {
    let mut cpu = setup_cpu(&[LDI, 0, 8, PRN, 0, HLT]);
    let printed = capture_output(&mut cpu);

    cpu.run().unwrap();

    assert_eq!(*printed.borrow(), vec![8]);
}

#[test]
fn test_prn_one_value_per_call() {
    let mut cpu = setup_cpu(&[LDI, 2, 200, PRN, 2, PRN, 2, HLT]);
    let printed = capture_output(&mut cpu);

    cpu.run().unwrap();

    assert_eq!(*printed.borrow(), vec![200, 200]);
}

#[test]
fn test_prn_does_not_change_state() {
    let mut cpu = setup_cpu(&[PRN, 3]);
    cpu.set_reg(3, 42);
    let _printed = capture_output(&mut cpu);
    let registers = cpu.registers();

    cpu.step().unwrap();

    assert_eq!(cpu.registers(), registers);
    assert_eq!(cpu.pc(), 2);
}

#[test]
fn test_prn_without_callback_writes_stdout() {
    // Falls back to println!; only checks that nothing fails
    let mut cpu = setup_cpu(&[LDI, 0, 1, PRN, 0, HLT]);
    cpu.clear_print_callback();

    assert_eq!(cpu.run(), Ok(3));
}
