//! # Addressing-Mode Resolvers
//!
//! Each resolver consumes the instruction's operand bytes at PC,
//! computes the effective 16-bit address, and charges the cycles the
//! hardware spends doing so. Page-crossing penalties depend on context:
//! loads pay the extra cycle only when indexing actually crosses a
//! 256-byte page, stores pay it unconditionally. The [`Penalty`]
//! argument selects which rule applies.

use crate::{MemoryBus, CPU};

/// Extra-cycle rule for indexed addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Penalty {
    /// One extra cycle only if indexing crosses a page boundary (loads).
    PageCross,
    /// One extra cycle regardless (stores).
    Always,
}

/// True if `base` and `indexed` fall in different 256-byte pages.
///
/// Only the high bytes are compared; equality of the low bytes is
/// irrelevant.
fn page_crossed(base: u16, indexed: u16) -> bool {
    (base ^ indexed) >> 8 != 0
}

impl CPU {
    /// Zero page: the operand byte is the address.
    pub(crate) fn zero_page<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u16 {
        self.fetch_byte(memory, cycles) as u16
    }

    /// Zero page,X: 8-bit wraparound, never leaves the zero page.
    pub(crate) fn zero_page_x<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u16 {
        let base = self.fetch_byte(memory, cycles);
        *cycles -= 1;
        base.wrapping_add(self.x) as u16
    }

    /// Zero page,Y: 8-bit wraparound, never leaves the zero page.
    pub(crate) fn zero_page_y<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u16 {
        let base = self.fetch_byte(memory, cycles);
        *cycles -= 1;
        base.wrapping_add(self.y) as u16
    }

    /// Absolute: the operand word is the address.
    pub(crate) fn absolute<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u16 {
        self.fetch_word(memory, cycles)
    }

    /// Absolute,X.
    pub(crate) fn absolute_x<M: MemoryBus>(
        &mut self,
        memory: &M,
        cycles: &mut i32,
        penalty: Penalty,
    ) -> u16 {
        let index = self.x;
        self.absolute_indexed(memory, cycles, index, penalty)
    }

    /// Absolute,Y.
    pub(crate) fn absolute_y<M: MemoryBus>(
        &mut self,
        memory: &M,
        cycles: &mut i32,
        penalty: Penalty,
    ) -> u16 {
        let index = self.y;
        self.absolute_indexed(memory, cycles, index, penalty)
    }

    fn absolute_indexed<M: MemoryBus>(
        &mut self,
        memory: &M,
        cycles: &mut i32,
        index: u8,
        penalty: Penalty,
    ) -> u16 {
        let base = self.fetch_word(memory, cycles);
        let indexed = base.wrapping_add(index as u16);
        match penalty {
            Penalty::Always => *cycles -= 1,
            Penalty::PageCross => {
                if page_crossed(base, indexed) {
                    *cycles -= 1;
                }
            }
        }
        indexed
    }

    /// Indexed indirect, `(zp,X)`: the operand byte plus X (mod 256)
    /// names a zero-page location holding the effective address.
    pub(crate) fn indexed_indirect<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u16 {
        let zp = self.fetch_byte(memory, cycles).wrapping_add(self.x);
        *cycles -= 1;
        self.read_word(memory, cycles, zp as u16)
    }

    /// Indirect indexed, `(zp),Y`: the operand byte names a zero-page
    /// location holding a base address; Y is added to the fetched base.
    pub(crate) fn indirect_indexed<M: MemoryBus>(
        &mut self,
        memory: &M,
        cycles: &mut i32,
        penalty: Penalty,
    ) -> u16 {
        let zp = self.fetch_byte(memory, cycles) as u16;
        let base = self.read_word(memory, cycles, zp);
        let indexed = base.wrapping_add(self.y as u16);
        match penalty {
            Penalty::Always => *cycles -= 1,
            Penalty::PageCross => {
                if page_crossed(base, indexed) {
                    *cycles -= 1;
                }
            }
        }
        indexed
    }

    /// Indirect (JMP only): the operand word names the location holding
    /// the target address. Does not reproduce the NMOS wraparound bug
    /// for pointers ending in 0xFF.
    pub(crate) fn indirect<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u16 {
        let ptr = self.fetch_word(memory, cycles);
        self.read_word(memory, cycles, ptr)
    }
}
