//! Control-flow instruction bodies: JSR, RTS and the two JMP forms.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// JSR: pushes the address of the JSR's last operand byte (PC - 1)
/// onto the stack, high byte at the higher address, then jumps to the
/// absolute target. SP ends two lower. 6 cycles.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, cycles: &mut i32) {
    let target = cpu.fetch_word(memory, cycles);
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(memory, cycles, return_addr);
    cpu.pc = target;
    // Internal cycle for the PC update
    *cycles -= 1;
}

/// RTS: pops the return address pushed by JSR and resumes at the
/// following byte. SP ends two higher. 6 cycles.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU, memory: &M, cycles: &mut i32) {
    let return_addr = cpu.pull_word(memory, cycles);
    cpu.pc = return_addr.wrapping_add(1);
    // Internal cycles: SP adjust and PC increment
    *cycles -= 3;
}

/// JMP absolute: PC = operand word. 3 cycles.
pub(crate) fn jmp_absolute<M: MemoryBus>(cpu: &mut CPU, memory: &M, cycles: &mut i32) {
    cpu.pc = cpu.absolute(memory, cycles);
}

/// JMP indirect: PC = word stored at the operand address. 5 cycles.
///
/// The pointer read does not reproduce the NMOS page-wrap quirk; a
/// pointer at 0x02FF reads its high byte from 0x0300.
pub(crate) fn jmp_indirect<M: MemoryBus>(cpu: &mut CPU, memory: &M, cycles: &mut i32) {
    cpu.pc = cpu.indirect(memory, cycles);
}
