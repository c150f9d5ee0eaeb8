//! # Memory Bus Abstraction
//!
//! This module provides the [`MemoryBus`] trait that decouples the CPU
//! from specific memory implementations, and [`Memory`], the flat 64KB
//! implementation used by the tests and by simple embeddings.
//!
//! ## Design Principles
//!
//! - No bus errors: reads and writes within the 16-bit address space
//!   always succeed, matching 6502 hardware which has no fault mechanism.
//! - The 16-bit address type itself carries the range guarantee; an
//!   address that would fall outside the array cannot be constructed,
//!   and the one operation that can step past the end ([`Memory::write_word`]
//!   at 0xFFFF) treats it as a precondition violation and panics.

use std::ops::{Index, IndexMut};

/// Memory bus trait for CPU byte access.
///
/// Implementations provide the memory backend for the CPU. All CPU
/// reads and writes (program fetch, data, stack) go through this
/// abstraction.
///
/// # Examples
///
/// ```
/// use emu6502::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the given 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the given 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Returns the bus to its power-on state.
    ///
    /// Called by [`CPU::reset`](crate::CPU::reset). The default is a
    /// no-op; backing stores that model RAM (like [`Memory`]) override
    /// it to zero-fill.
    fn init(&mut self) {}
}

/// Flat 64KB memory: every address 0x0000-0xFFFF is writable RAM.
///
/// The array is heap-allocated once at construction and zero-filled.
/// Beyond the [`MemoryBus`] methods it offers `Index`/`IndexMut` for
/// direct harness-style access and [`write_word`](Memory::write_word)
/// for seeding 16-bit operands.
///
/// # Examples
///
/// ```
/// use emu6502::Memory;
///
/// let mut mem = Memory::new();
/// mem[0x8000] = 0xA9;
/// assert_eq!(mem[0x8000], 0xA9);
///
/// // Little-endian word write for operands and pointers.
/// mem.write_word(0x4242, 0x8001);
/// assert_eq!(mem[0x8001], 0x42);
/// assert_eq!(mem[0x8002], 0x42);
/// ```
pub struct Memory {
    data: Box<[u8; Memory::SIZE]>,
}

impl Memory {
    /// Size of the 6502 address space in bytes.
    pub const SIZE: usize = 0x10000;

    /// Creates a new memory with all cells zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; Memory::SIZE]),
        }
    }

    /// Writes a 16-bit word at `addr`, low byte first.
    ///
    /// Always little-endian regardless of the host byte order.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is 0xFFFF: the high byte would fall outside the
    /// address space. The write does not wrap.
    pub fn write_word(&mut self, value: u16, addr: u16) {
        self.data[addr as usize] = (value & 0xFF) as u8;
        self.data[addr as usize + 1] = (value >> 8) as u8;
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn init(&mut self) {
        self.data.fill(0);
    }
}

impl Index<u16> for Memory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for Memory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[addr as usize]
    }
}
