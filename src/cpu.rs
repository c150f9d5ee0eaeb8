//! # CPU State and Execution
//!
//! The [`CPU`] struct holds the register file and packed status byte;
//! [`CPU::execute`] runs the fetch-decode-execute loop against a caller
//! supplied [`MemoryBus`] until a cycle budget is exhausted.
//!
//! ## Execution Model
//!
//! The budget is a signed countdown, decremented once per memory access
//! plus the fixed internal cycles each instruction spends. It is only
//! checked at instruction boundaries: an instruction that starts with
//! one cycle remaining runs to completion, so the cycles reported back
//! can exceed the request by the tail of that instruction. A budget of
//! zero or less performs no fetch at all.
//!
//! The CPU holds no memory of its own. Passing the bus into `reset` and
//! `execute` keeps the processor/memory binding in the caller's hands;
//! rebinding to a different memory is just passing a different argument.

use crate::addressing::Penalty;
use crate::instructions::{control, load_store, logical, stack};
use crate::opcodes as op;
use crate::{ExecutionError, MemoryBus, Status};

/// Address loaded into PC by [`CPU::reset`].
///
/// Note: reset places this *value* directly into PC. It does not fetch
/// a vector through 0xFFFC/0xFFFD the way real hardware does.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Base address of the stack page; the full stack address is
/// `0x0100 | SP`.
pub(crate) const STACK_PAGE: u16 = 0x0100;

/// 6502 register file and execution context.
///
/// Fields are public: the embedding harness seeds registers directly
/// the same way it seeds memory through indexing.
///
/// # Examples
///
/// ```
/// use emu6502::{opcodes, Memory, CPU};
///
/// let mut memory = Memory::new();
/// let mut cpu = CPU::new();
/// cpu.reset(&mut memory);
///
/// memory[0xFFFC] = opcodes::LDA_IM;
/// memory[0xFFFD] = 0x42;
///
/// assert_eq!(cpu.execute(&mut memory, 2), Ok(2));
/// assert_eq!(cpu.a, 0x42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CPU {
    /// Program counter.
    pub pc: u16,
    /// Stack pointer, an offset into the stack page 0x0100-0x01FF.
    pub sp: u8,
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Packed processor status byte.
    pub status: Status,
}

impl CPU {
    /// Creates a CPU in the post-reset register state.
    ///
    /// Unlike [`reset`](CPU::reset) this touches no memory, so it can
    /// be used to snapshot the default state for comparisons in tests.
    pub fn new() -> Self {
        Self {
            pc: RESET_VECTOR,
            sp: 0xFF,
            a: 0,
            x: 0,
            y: 0,
            status: Status::empty(),
        }
    }

    /// Resets the CPU and zero-fills the bus.
    ///
    /// PC is set to [`RESET_VECTOR`], SP to 0xFF, registers and flags
    /// to zero, and `memory` is returned to its power-on state via
    /// [`MemoryBus::init`].
    pub fn reset<M: MemoryBus>(&mut self, memory: &mut M) {
        self.reset_to(memory, RESET_VECTOR);
    }

    /// Resets the CPU with PC placed at `vector` instead of the default
    /// reset vector.
    pub fn reset_to<M: MemoryBus>(&mut self, memory: &mut M, vector: u16) {
        self.pc = vector;
        self.sp = 0xFF;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.status = Status::empty();
        memory.init();
        log::debug!("reset: PC=0x{:04X}", vector);
    }

    /// Runs instructions until the cycle budget is spent.
    ///
    /// Returns the number of cycles actually consumed, which is at
    /// least `budget` when `budget > 0` (the final instruction runs to
    /// completion) and 0 when `budget <= 0`.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::UnknownInstruction`] if decode finds no mapping
    /// for a fetched opcode byte. The call aborts immediately; state
    /// changes made by instructions that already completed are kept.
    pub fn execute<M: MemoryBus>(
        &mut self,
        memory: &mut M,
        budget: i32,
    ) -> Result<i32, ExecutionError> {
        let mut cycles = budget;
        while cycles > 0 {
            let at = self.pc;
            let opcode = self.fetch_byte(memory, &mut cycles);
            log::trace!("0x{:04X}: opcode 0x{:02X}", at, opcode);
            match opcode {
                // LDA ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::LDA_IM => {
                    let value = self.fetch_byte(memory, &mut cycles);
                    self.a = value;
                    self.status.set_zero_negative(value);
                }
                op::LDA_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    load_store::lda(self, memory, &mut cycles, addr);
                }
                op::LDA_ZPX => {
                    let addr = self.zero_page_x(memory, &mut cycles);
                    load_store::lda(self, memory, &mut cycles, addr);
                }
                op::LDA_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    load_store::lda(self, memory, &mut cycles, addr);
                }
                op::LDA_AX => {
                    let addr = self.absolute_x(memory, &mut cycles, Penalty::PageCross);
                    load_store::lda(self, memory, &mut cycles, addr);
                }
                op::LDA_AY => {
                    let addr = self.absolute_y(memory, &mut cycles, Penalty::PageCross);
                    load_store::lda(self, memory, &mut cycles, addr);
                }
                op::LDA_IX => {
                    let addr = self.indexed_indirect(memory, &mut cycles);
                    load_store::lda(self, memory, &mut cycles, addr);
                }
                op::LDA_IY => {
                    let addr = self.indirect_indexed(memory, &mut cycles, Penalty::PageCross);
                    load_store::lda(self, memory, &mut cycles, addr);
                }
                // LDX ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::LDX_IM => {
                    let value = self.fetch_byte(memory, &mut cycles);
                    self.x = value;
                    self.status.set_zero_negative(value);
                }
                op::LDX_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    load_store::ldx(self, memory, &mut cycles, addr);
                }
                op::LDX_ZPY => {
                    let addr = self.zero_page_y(memory, &mut cycles);
                    load_store::ldx(self, memory, &mut cycles, addr);
                }
                op::LDX_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    load_store::ldx(self, memory, &mut cycles, addr);
                }
                op::LDX_AY => {
                    let addr = self.absolute_y(memory, &mut cycles, Penalty::PageCross);
                    load_store::ldx(self, memory, &mut cycles, addr);
                }
                // LDY ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::LDY_IM => {
                    let value = self.fetch_byte(memory, &mut cycles);
                    self.y = value;
                    self.status.set_zero_negative(value);
                }
                op::LDY_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    load_store::ldy(self, memory, &mut cycles, addr);
                }
                op::LDY_ZPX => {
                    let addr = self.zero_page_x(memory, &mut cycles);
                    load_store::ldy(self, memory, &mut cycles, addr);
                }
                op::LDY_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    load_store::ldy(self, memory, &mut cycles, addr);
                }
                op::LDY_AX => {
                    let addr = self.absolute_x(memory, &mut cycles, Penalty::PageCross);
                    load_store::ldy(self, memory, &mut cycles, addr);
                }
                // STA ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::STA_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    load_store::sta(self, memory, &mut cycles, addr);
                }
                op::STA_ZPX => {
                    let addr = self.zero_page_x(memory, &mut cycles);
                    load_store::sta(self, memory, &mut cycles, addr);
                }
                op::STA_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    load_store::sta(self, memory, &mut cycles, addr);
                }
                op::STA_AX => {
                    let addr = self.absolute_x(memory, &mut cycles, Penalty::Always);
                    load_store::sta(self, memory, &mut cycles, addr);
                }
                op::STA_AY => {
                    let addr = self.absolute_y(memory, &mut cycles, Penalty::Always);
                    load_store::sta(self, memory, &mut cycles, addr);
                }
                op::STA_IX => {
                    let addr = self.indexed_indirect(memory, &mut cycles);
                    load_store::sta(self, memory, &mut cycles, addr);
                }
                op::STA_IY => {
                    let addr = self.indirect_indexed(memory, &mut cycles, Penalty::Always);
                    load_store::sta(self, memory, &mut cycles, addr);
                }
                // STX ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::STX_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    load_store::stx(self, memory, &mut cycles, addr);
                }
                op::STX_ZPY => {
                    let addr = self.zero_page_y(memory, &mut cycles);
                    load_store::stx(self, memory, &mut cycles, addr);
                }
                op::STX_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    load_store::stx(self, memory, &mut cycles, addr);
                }
                // STY ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::STY_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    load_store::sty(self, memory, &mut cycles, addr);
                }
                op::STY_ZPX => {
                    let addr = self.zero_page_x(memory, &mut cycles);
                    load_store::sty(self, memory, &mut cycles, addr);
                }
                op::STY_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    load_store::sty(self, memory, &mut cycles, addr);
                }
                // Jumps and returns ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::JSR => control::jsr(self, memory, &mut cycles),
                op::RTS => control::rts(self, memory, &mut cycles),
                op::JMP_ABS => control::jmp_absolute(self, memory, &mut cycles),
                op::JMP_IND => control::jmp_indirect(self, memory, &mut cycles),
                // Stack operations ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::TSX => stack::tsx(self, &mut cycles),
                op::TXS => stack::txs(self, &mut cycles),
                op::PHA => stack::pha(self, memory, &mut cycles),
                op::PHP => stack::php(self, memory, &mut cycles),
                op::PLA => stack::pla(self, memory, &mut cycles),
                op::PLP => stack::plp(self, memory, &mut cycles),
                // AND ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::AND_IM => {
                    let value = self.fetch_byte(memory, &mut cycles);
                    logical::and(self, value);
                }
                op::AND_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::and(self, value);
                }
                op::AND_ZPX => {
                    let addr = self.zero_page_x(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::and(self, value);
                }
                op::AND_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::and(self, value);
                }
                op::AND_AX => {
                    let addr = self.absolute_x(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::and(self, value);
                }
                op::AND_AY => {
                    let addr = self.absolute_y(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::and(self, value);
                }
                op::AND_IX => {
                    let addr = self.indexed_indirect(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::and(self, value);
                }
                op::AND_IY => {
                    let addr = self.indirect_indexed(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::and(self, value);
                }
                // EOR ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::EOR_IM => {
                    let value = self.fetch_byte(memory, &mut cycles);
                    logical::eor(self, value);
                }
                op::EOR_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::eor(self, value);
                }
                op::EOR_ZPX => {
                    let addr = self.zero_page_x(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::eor(self, value);
                }
                op::EOR_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::eor(self, value);
                }
                op::EOR_AX => {
                    let addr = self.absolute_x(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::eor(self, value);
                }
                op::EOR_AY => {
                    let addr = self.absolute_y(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::eor(self, value);
                }
                op::EOR_IX => {
                    let addr = self.indexed_indirect(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::eor(self, value);
                }
                op::EOR_IY => {
                    let addr = self.indirect_indexed(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::eor(self, value);
                }
                // ORA ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
                op::ORA_IM => {
                    let value = self.fetch_byte(memory, &mut cycles);
                    logical::ora(self, value);
                }
                op::ORA_ZP => {
                    let addr = self.zero_page(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::ora(self, value);
                }
                op::ORA_ZPX => {
                    let addr = self.zero_page_x(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::ora(self, value);
                }
                op::ORA_ABS => {
                    let addr = self.absolute(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::ora(self, value);
                }
                op::ORA_AX => {
                    let addr = self.absolute_x(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::ora(self, value);
                }
                op::ORA_AY => {
                    let addr = self.absolute_y(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::ora(self, value);
                }
                op::ORA_IX => {
                    let addr = self.indexed_indirect(memory, &mut cycles);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::ora(self, value);
                }
                op::ORA_IY => {
                    let addr = self.indirect_indexed(memory, &mut cycles, Penalty::PageCross);
                    let value = self.read_byte(memory, &mut cycles, addr);
                    logical::ora(self, value);
                }
                unknown => {
                    log::error!("unknown instruction 0x{:02X} at 0x{:04X}", unknown, at);
                    return Err(ExecutionError::UnknownInstruction(unknown));
                }
            }
        }
        Ok(budget - cycles)
    }

    // ========== Bus helpers ==========
    //
    // Each helper charges exactly the cycles the hardware spends on the
    // access, so instruction timing falls out of the sequence of calls.

    /// Reads the byte at PC, advancing PC. 1 cycle.
    pub(crate) fn fetch_byte<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u8 {
        let value = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        *cycles -= 1;
        value
    }

    /// Reads the little-endian word at PC, advancing PC by 2. 2 cycles.
    pub(crate) fn fetch_word<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u16 {
        let low = self.fetch_byte(memory, cycles) as u16;
        let high = self.fetch_byte(memory, cycles) as u16;
        (high << 8) | low
    }

    /// Reads a data byte. 1 cycle.
    pub(crate) fn read_byte<M: MemoryBus>(&self, memory: &M, cycles: &mut i32, addr: u16) -> u8 {
        *cycles -= 1;
        memory.read(addr)
    }

    /// Reads a little-endian data word. 2 cycles.
    pub(crate) fn read_word<M: MemoryBus>(&self, memory: &M, cycles: &mut i32, addr: u16) -> u16 {
        let low = self.read_byte(memory, cycles, addr) as u16;
        let high = self.read_byte(memory, cycles, addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Writes a data byte. 1 cycle.
    pub(crate) fn write_byte<M: MemoryBus>(
        &self,
        memory: &mut M,
        cycles: &mut i32,
        value: u8,
        addr: u16,
    ) {
        memory.write(addr, value);
        *cycles -= 1;
    }

    /// Writes a byte at the current stack address, then decrements SP
    /// (wrapping within the stack page). 1 cycle.
    pub(crate) fn push_byte<M: MemoryBus>(&mut self, memory: &mut M, cycles: &mut i32, value: u8) {
        self.write_byte(memory, cycles, value, STACK_PAGE | self.sp as u16);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping within the stack page), then reads the
    /// byte at the new stack address. 1 cycle.
    pub(crate) fn pull_byte<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_byte(memory, cycles, STACK_PAGE | self.sp as u16)
    }

    /// Pushes a word, high byte first, so the bytes land in the same
    /// storage order [`Memory::write_word`](crate::Memory::write_word)
    /// would produce. 2 cycles.
    pub(crate) fn push_word<M: MemoryBus>(&mut self, memory: &mut M, cycles: &mut i32, value: u16) {
        self.push_byte(memory, cycles, (value >> 8) as u8);
        self.push_byte(memory, cycles, (value & 0xFF) as u8);
    }

    /// Pops a word pushed by [`push_word`](CPU::push_word). 2 cycles.
    pub(crate) fn pull_word<M: MemoryBus>(&mut self, memory: &M, cycles: &mut i32) -> u16 {
        let low = self.pull_byte(memory, cycles) as u16;
        let high = self.pull_byte(memory, cycles) as u16;
        (high << 8) | low
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
