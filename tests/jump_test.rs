//! Tests for the JMP, JEQ and JNE instructions.
//!
//! Tests cover:
//! - JMP always loads PC from the register
//! - JEQ/JNE jump or skip two bytes depending on FL
//! - FL = 0 (no CMP yet) counts as "not equal"
//! - Only the exact equal pattern satisfies JEQ

use ls8::{ExecutionError, Ram, CPU, FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, SP_INIT};

const JMP: u8 = 0b0101_0100;
const JEQ: u8 = 0b0101_0101;
const JNE: u8 = 0b0101_0110;

/// Helper function to create a CPU with `opcode R2` at address 0x20,
/// R2 = 0x80 and FL = `flags`
fn setup_cpu(opcode: u8, flags: u8) -> CPU<Ram> {
    let mut image = vec![0; 0x22];
    image[0x20] = opcode;
    image[0x21] = 2;

    let mut cpu = CPU::new(Ram::from_image(&image).unwrap());
    cpu.set_pc(0x20);
    cpu.set_reg(2, 0x80);
    cpu.set_reg(5, flags);
    cpu
}

// ========== JMP Tests ==========

#[test]
fn test_jmp_basic_operation() {
    let mut cpu = setup_cpu(JMP, 0);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x80);
}

#[test]
fn test_jmp_ignores_flags() {
    for flags in [0, FLAG_EQUAL, FLAG_GREATER, FLAG_LESS] {
        let mut cpu = setup_cpu(JMP, flags);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x80);
    }
}

#[test]
fn test_jmp_leaves_stack_alone() {
    let mut cpu = setup_cpu(JMP, 0);

    cpu.step().unwrap();

    assert_eq!(cpu.sp(), SP_INIT);
}

#[test]
fn test_jmp_to_itself() {
    let mut cpu = setup_cpu(JMP, 0);
    cpu.set_reg(2, 0x20);

    cpu.run_for_steps(5).unwrap();

    assert_eq!(cpu.pc(), 0x20);
    assert_eq!(cpu.steps(), 5);
}

// ========== JEQ Tests ==========

#[test]
fn test_jeq_taken_when_equal() {
    let mut cpu = setup_cpu(JEQ, FLAG_EQUAL);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x80);
}

#[test]
fn test_jeq_not_taken_skips_instruction() {
    for flags in [FLAG_GREATER, FLAG_LESS] {
        let mut cpu = setup_cpu(JEQ, flags);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x22, "JEQ with FL={:#05b} must fall through", flags);
    }
}

#[test]
fn test_jeq_without_prior_cmp_falls_through() {
    let mut cpu = setup_cpu(JEQ, 0);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x22);
}

#[test]
fn test_jeq_requires_exact_equal_pattern() {
    let mut cpu = setup_cpu(JEQ, FLAG_EQUAL | FLAG_GREATER);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x22);
}

// ========== JNE Tests ==========

#[test]
fn test_jne_taken_when_not_equal() {
    for flags in [FLAG_GREATER, FLAG_LESS] {
        let mut cpu = setup_cpu(JNE, flags);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x80);
    }
}

#[test]
fn test_jne_not_taken_when_equal() {
    let mut cpu = setup_cpu(JNE, FLAG_EQUAL);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x22);
}

#[test]
fn test_jne_without_prior_cmp_jumps() {
    let mut cpu = setup_cpu(JNE, 0);

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x80);
}

#[test]
fn test_branch_invalid_register() {
    let mut cpu = CPU::new(Ram::from_image(&[JEQ, 0xFF]).unwrap());

    assert_eq!(
        cpu.step(),
        Err(ExecutionError::InvalidRegister {
            register: 0xFF,
            address: 0,
        })
    );
    assert_eq!(cpu.pc(), 0);
}

// ========== CMP + Branch Integration ==========

#[test]
fn test_cmp_then_jne_loop_counts_up() {
    const LDI: u8 = 0b1000_0010;
    const CMP: u8 = 0b1010_0111;
    const ADD: u8 = 0b1010_0000;
    const HLT: u8 = 0b0000_0001;

    // R0 counts up by R1 until it equals R2
    let mut cpu = CPU::new(
        Ram::from_image(&[
            LDI, 1, 1,  // 0: LDI R1,1
            LDI, 2, 5,  // 3: LDI R2,5
            LDI, 3, 9,  // 6: LDI R3,9 (loop)
            ADD, 0, 1,  // 9: loop: ADD R0,R1
            CMP, 0, 2,  // 12: CMP R0,R2
            JNE, 3,     // 15: JNE R3
            HLT,        // 17
        ])
        .unwrap(),
    );

    cpu.run().unwrap();

    assert_eq!(cpu.reg(0), 5);
    assert_eq!(cpu.fl(), FLAG_EQUAL);
    assert_eq!(cpu.pc(), 17);
}
