//! Stack and stack-pointer instruction bodies.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::status::Status;

/// TSX: X = SP, flags Z and N. 2 cycles.
pub(crate) fn tsx(cpu: &mut CPU, cycles: &mut i32) {
    cpu.x = cpu.sp;
    cpu.status.set_zero_negative(cpu.x);
    *cycles -= 1;
}

/// TXS: SP = X. No flags. 2 cycles.
pub(crate) fn txs(cpu: &mut CPU, cycles: &mut i32) {
    cpu.sp = cpu.x;
    *cycles -= 1;
}

/// PHA: pushes A. 3 cycles.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, cycles: &mut i32) {
    let a = cpu.a;
    cpu.push_byte(memory, cycles, a);
    *cycles -= 1;
}

/// PHP: pushes the packed status byte. 3 cycles.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, cycles: &mut i32) {
    let bits = cpu.status.bits();
    cpu.push_byte(memory, cycles, bits);
    *cycles -= 1;
}

/// PLA: pulls into A, flags Z and N. 4 cycles.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU, memory: &M, cycles: &mut i32) {
    let value = cpu.pull_byte(memory, cycles);
    cpu.a = value;
    cpu.status.set_zero_negative(value);
    *cycles -= 2;
}

/// PLP: pulls the packed status byte, replacing all flags. 4 cycles.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU, memory: &M, cycles: &mut i32) {
    let bits = cpu.pull_byte(memory, cycles);
    cpu.status = Status::from_bits_truncate(bits);
    *cycles -= 2;
}
