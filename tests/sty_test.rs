//! Tests for the STY (Store Y Register) instruction.

use emu6502::{opcodes, Memory, CPU};

fn setup() -> (CPU, Memory) {
    let mut memory = Memory::new();
    let mut cpu = CPU::new();
    cpu.reset_to(&mut memory, 0x8000);
    (cpu, memory)
}

#[test]
fn test_sty_zero_page() {
    let (mut cpu, mut memory) = setup();
    cpu.y = 0x42;

    memory[0x8000] = opcodes::STY_ZP;
    memory[0x8001] = 0x37;

    assert_eq!(cpu.execute(&mut memory, 3), Ok(3));
    assert_eq!(memory[0x0037], 0x42);
}

#[test]
fn test_sty_zero_page_x() {
    let (mut cpu, mut memory) = setup();
    cpu.y = 0x42;
    cpu.x = 0x0F;

    memory[0x8000] = opcodes::STY_ZPX;
    memory[0x8001] = 0x40;

    assert_eq!(cpu.execute(&mut memory, 4), Ok(4));
    assert_eq!(memory[0x004F], 0x42);
}

#[test]
fn test_sty_absolute() {
    let (mut cpu, mut memory) = setup();
    cpu.y = 0x42;

    memory[0x8000] = opcodes::STY_ABS;
    memory[0x8001] = 0x80;
    memory[0x8002] = 0x44;

    assert_eq!(cpu.execute(&mut memory, 4), Ok(4));
    assert_eq!(memory[0x4480], 0x42);
}
