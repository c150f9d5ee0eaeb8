//! # Instruction Implementations
//!
//! Instruction bodies, grouped by family. Each function is the part of
//! an instruction that runs *after* the effective address has been
//! resolved (or, for implied-mode instructions, the whole body), and
//! charges the cycles that part spends.

pub(crate) mod control;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod stack;
