//! Bitwise logical instruction bodies.
//!
//! AND, EOR and ORA all combine a fetched operand into the accumulator
//! and update the zero and negative flags from the result. The operand
//! fetch itself is charged by the caller, so these take the value
//! directly.

use crate::cpu::CPU;

/// AND: A &= value, flags Z and N.
pub(crate) fn and(cpu: &mut CPU, value: u8) {
    cpu.a &= value;
    cpu.status.set_zero_negative(cpu.a);
}

/// EOR: A ^= value, flags Z and N.
pub(crate) fn eor(cpu: &mut CPU, value: u8) {
    cpu.a ^= value;
    cpu.status.set_zero_negative(cpu.a);
}

/// ORA: A |= value, flags Z and N.
pub(crate) fn ora(cpu: &mut CPU, value: u8) {
    cpu.a |= value;
    cpu.status.set_zero_negative(cpu.a);
}
