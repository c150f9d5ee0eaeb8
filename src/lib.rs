//! # 6502 CPU Instruction Execution Core
//!
//! A cycle-accurate emulator core for the instruction subset of a
//! 6502-class 8-bit microprocessor: loads and stores, jumps and returns,
//! stack operations, and the logical operations AND/EOR/ORA.
//!
//! The crate has two components:
//!
//! - [`Memory`]: a flat 64KB byte array behind the [`MemoryBus`] trait
//! - [`CPU`]: the register file, packed [`Status`] byte, addressing-mode
//!   resolvers, and the cycle-budgeted fetch-decode-execute loop
//!
//! The CPU never owns its memory. Every operation that touches the bus
//! takes it as an explicit parameter, so a host can share one memory
//! between runs or hand the CPU a different memory at any call site.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{opcodes, Memory, CPU};
//!
//! let mut memory = Memory::new();
//! let mut cpu = CPU::new();
//! cpu.reset(&mut memory);
//!
//! // Reset leaves PC at the reset vector; assemble a program there.
//! memory[0xFFFC] = opcodes::LDA_IM;
//! memory[0xFFFD] = 0x84;
//!
//! let cycles = cpu.execute(&mut memory, 2).unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a, 0x84);
//! ```
//!
//! ## Execution Model
//!
//! [`CPU::execute`] consumes a signed cycle budget and returns the cycles
//! actually spent. The budget is only checked between instructions, so an
//! instruction that begins with one cycle remaining still runs to
//! completion and the return value can exceed the request by the tail of
//! that final instruction. A budget of zero (or less) performs no fetch.
//!
//! Timing matches NMOS 6502 documented behavior for the implemented
//! subset, including the one-cycle penalty when indexed addressing
//! crosses a 256-byte page boundary (loads pay it only on a cross,
//! stores always pay it).
//!
//! ## Known deviations
//!
//! - `reset` places the reset-vector *address* directly into PC rather
//!   than fetching a vector through 0xFFFC/0xFFFD as real hardware does.
//! - Indirect JMP does not reproduce the NMOS page-boundary wraparound
//!   bug for pointers ending in 0xFF.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Instruction semantics, grouped by category (not part of the public API).
mod instructions;

pub use cpu::{CPU, RESET_VECTOR};
pub use memory::{Memory, MemoryBus};
pub use status::Status;

/// Errors that can occur during CPU execution.
///
/// Decode failures are the only runtime error: every in-scope
/// instruction, once decoded, always succeeds. Out-of-range memory
/// access is a programming error and panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched opcode byte has no mapping in the implemented set.
    ///
    /// The error aborts the in-progress `execute` call immediately;
    /// register and memory mutations made by instructions that already
    /// completed in the same call remain in effect.
    #[error("unknown instruction: 0x{0:02X}")]
    UnknownInstruction(u8),
}
