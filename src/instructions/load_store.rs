//! Load and store instruction bodies.
//!
//! Loads read the byte at the effective address into a register and
//! update the zero and negative flags; stores write the register out
//! and leave the flags untouched.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// LDA: A = memory\[addr\], flags Z and N.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU, memory: &M, cycles: &mut i32, addr: u16) {
    let value = cpu.read_byte(memory, cycles, addr);
    cpu.a = value;
    cpu.status.set_zero_negative(value);
}

/// LDX: X = memory\[addr\], flags Z and N.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU, memory: &M, cycles: &mut i32, addr: u16) {
    let value = cpu.read_byte(memory, cycles, addr);
    cpu.x = value;
    cpu.status.set_zero_negative(value);
}

/// LDY: Y = memory\[addr\], flags Z and N.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU, memory: &M, cycles: &mut i32, addr: u16) {
    let value = cpu.read_byte(memory, cycles, addr);
    cpu.y = value;
    cpu.status.set_zero_negative(value);
}

/// STA: memory\[addr\] = A. No flags.
pub(crate) fn sta<M: MemoryBus>(cpu: &CPU, memory: &mut M, cycles: &mut i32, addr: u16) {
    cpu.write_byte(memory, cycles, cpu.a, addr);
}

/// STX: memory\[addr\] = X. No flags.
pub(crate) fn stx<M: MemoryBus>(cpu: &CPU, memory: &mut M, cycles: &mut i32, addr: u16) {
    cpu.write_byte(memory, cycles, cpu.x, addr);
}

/// STY: memory\[addr\] = Y. No flags.
pub(crate) fn sty<M: MemoryBus>(cpu: &CPU, memory: &mut M, cycles: &mut i32, addr: u16) {
    cpu.write_byte(memory, cycles, cpu.y, addr);
}
