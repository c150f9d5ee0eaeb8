//! Tests for the LDA (Load Accumulator) instruction.
//!
//! Covers:
//! - All 8 addressing modes
//! - Flag updates (Z, N) and preservation of the other flags
//! - Cycle counts including page-crossing penalties
//! - Zero-page wraparound on indexed modes

use emu6502::{opcodes, Memory, Status, CPU};

/// Builds a reset CPU with PC at 0x8000, away from the stack page.
fn setup() -> (CPU, Memory) {
    let mut memory = Memory::new();
    let mut cpu = CPU::new();
    cpu.reset_to(&mut memory, 0x8000);
    (cpu, memory)
}

// ========== Basic Operation ==========

#[test]
fn test_lda_immediate_basic() {
    let (mut cpu, mut memory) = setup();

    // LDA #$42
    memory[0x8000] = opcodes::LDA_IM;
    memory[0x8001] = 0x42;

    assert_eq!(cpu.execute(&mut memory, 2), Ok(2));

    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.pc, 0x8002);
    assert!(!cpu.status.contains(Status::ZERO));
    assert!(!cpu.status.contains(Status::NEGATIVE));
}

#[test]
fn test_lda_zero_page() {
    let (mut cpu, mut memory) = setup();

    // LDA $37
    memory[0x8000] = opcodes::LDA_ZP;
    memory[0x8001] = 0x37;
    memory[0x0037] = 0x21;

    assert_eq!(cpu.execute(&mut memory, 3), Ok(3));
    assert_eq!(cpu.a, 0x21);
}

#[test]
fn test_lda_zero_page_x() {
    let (mut cpu, mut memory) = setup();
    cpu.x = 0x0F;

    // LDA $40,X -> $4F
    memory[0x8000] = opcodes::LDA_ZPX;
    memory[0x8001] = 0x40;
    memory[0x004F] = 0x99;

    assert_eq!(cpu.execute(&mut memory, 4), Ok(4));
    assert_eq!(cpu.a, 0x99);
}

#[test]
fn test_lda_zero_page_x_wraps_within_zero_page() {
    let (mut cpu, mut memory) = setup();
    cpu.x = 0xFF;

    // LDA $80,X -> 0x80 + 0xFF wraps to $7F, not $017F
    memory[0x8000] = opcodes::LDA_ZPX;
    memory[0x8001] = 0x80;
    memory[0x007F] = 0x37;
    memory[0x017F] = 0xEE;

    assert_eq!(cpu.execute(&mut memory, 4), Ok(4));
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_absolute() {
    let (mut cpu, mut memory) = setup();

    // LDA $4480
    memory[0x8000] = opcodes::LDA_ABS;
    memory[0x8001] = 0x80;
    memory[0x8002] = 0x44;
    memory[0x4480] = 0x12;

    assert_eq!(cpu.execute(&mut memory, 4), Ok(4));
    assert_eq!(cpu.a, 0x12);
}

#[test]
fn test_lda_absolute_x_no_page_cross() {
    let (mut cpu, mut memory) = setup();
    cpu.x = 0x01;

    // LDA $4480,X -> $4481, same page
    memory[0x8000] = opcodes::LDA_AX;
    memory[0x8001] = 0x80;
    memory[0x8002] = 0x44;
    memory[0x4481] = 0x55;

    assert_eq!(cpu.execute(&mut memory, 4), Ok(4));
    assert_eq!(cpu.a, 0x55);
}

#[test]
fn test_lda_absolute_x_page_cross_costs_extra_cycle() {
    let (mut cpu, mut memory) = setup();
    cpu.x = 0x01;

    // LDA $44FF,X -> $4500, page crossed
    memory[0x8000] = opcodes::LDA_AX;
    memory[0x8001] = 0xFF;
    memory[0x8002] = 0x44;
    memory[0x4500] = 0x55;

    assert_eq!(cpu.execute(&mut memory, 5), Ok(5));
    assert_eq!(cpu.a, 0x55);
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let (mut cpu, mut memory) = setup();
    cpu.y = 0xFF;

    // LDA $4402,Y -> $4501, page crossed
    memory[0x8000] = opcodes::LDA_AY;
    memory[0x8001] = 0x02;
    memory[0x8002] = 0x44;
    memory[0x4501] = 0x37;

    assert_eq!(cpu.execute(&mut memory, 5), Ok(5));
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_indexed_indirect() {
    let (mut cpu, mut memory) = setup();
    cpu.x = 0x04;

    // LDA ($02,X): pointer at $06/$07 holds $4480
    memory[0x8000] = opcodes::LDA_IX;
    memory[0x8001] = 0x02;
    memory.write_word(0x4480, 0x0006);
    memory[0x4480] = 0x37;

    assert_eq!(cpu.execute(&mut memory, 6), Ok(6));
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_indexed_indirect_pointer_wraps_in_zero_page() {
    let (mut cpu, mut memory) = setup();
    cpu.x = 0xFF;

    // ($80,X): 0x80 + 0xFF wraps to $7F
    memory[0x8000] = opcodes::LDA_IX;
    memory[0x8001] = 0x80;
    memory.write_word(0x4480, 0x007F);
    memory[0x4480] = 0x42;

    assert_eq!(cpu.execute(&mut memory, 6), Ok(6));
    assert_eq!(cpu.a, 0x42);
}

#[test]
fn test_lda_indirect_indexed() {
    let (mut cpu, mut memory) = setup();
    cpu.y = 0x04;

    // LDA ($02),Y: pointer at $02 holds base $4480, + Y -> $4484
    memory[0x8000] = opcodes::LDA_IY;
    memory[0x8001] = 0x02;
    memory.write_word(0x4480, 0x0002);
    memory[0x4484] = 0x37;

    assert_eq!(cpu.execute(&mut memory, 5), Ok(5));
    assert_eq!(cpu.a, 0x37);
}

#[test]
fn test_lda_indirect_indexed_page_cross_costs_extra_cycle() {
    let (mut cpu, mut memory) = setup();
    cpu.y = 0x01;

    // LDA ($02),Y: base $44FF + 1 -> $4500, page crossed
    memory[0x8000] = opcodes::LDA_IY;
    memory[0x8001] = 0x02;
    memory.write_word(0x44FF, 0x0002);
    memory[0x4500] = 0x37;

    assert_eq!(cpu.execute(&mut memory, 6), Ok(6));
    assert_eq!(cpu.a, 0x37);
}

// ========== Flag Behaviour ==========

#[test]
fn test_lda_zero_flag() {
    let (mut cpu, mut memory) = setup();
    cpu.a = 0xFF;

    memory[0x8000] = opcodes::LDA_IM;
    memory[0x8001] = 0x00;

    assert_eq!(cpu.execute(&mut memory, 2), Ok(2));

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.status.contains(Status::ZERO));
    assert!(!cpu.status.contains(Status::NEGATIVE));
}

#[test]
fn test_lda_negative_flag() {
    let (mut cpu, mut memory) = setup();

    memory[0x8000] = opcodes::LDA_IM;
    memory[0x8001] = 0x80;

    assert_eq!(cpu.execute(&mut memory, 2), Ok(2));

    assert!(!cpu.status.contains(Status::ZERO));
    assert!(cpu.status.contains(Status::NEGATIVE));
}

#[test]
fn test_lda_preserves_unrelated_flags() {
    let (mut cpu, mut memory) = setup();
    cpu.status = Status::CARRY | Status::DECIMAL | Status::OVERFLOW;

    memory[0x8000] = opcodes::LDA_IM;
    memory[0x8001] = 0x80;

    assert_eq!(cpu.execute(&mut memory, 2), Ok(2));

    assert!(cpu.status.contains(Status::CARRY));
    assert!(cpu.status.contains(Status::DECIMAL));
    assert!(cpu.status.contains(Status::OVERFLOW));
    assert!(cpu.status.contains(Status::NEGATIVE));
}
