//! # Opcode Byte Constants
//!
//! One `pub const` per supported instruction+addressing-mode pair, at
//! the byte values of the real NMOS 6502 opcode map. The decoder in
//! [`CPU::execute`](crate::CPU::execute) matches on these, and test
//! harnesses use them to assemble programs byte by byte.
//!
//! Addressing-mode suffixes:
//!
//! - `IM`  — immediate
//! - `ZP`  — zero page
//! - `ZPX`/`ZPY` — zero page, X/Y-indexed (wraps within the zero page)
//! - `ABS` — absolute
//! - `AX`/`AY` — absolute, X/Y-indexed
//! - `IX`  — indexed indirect, `(zp,X)`
//! - `IY`  — indirect indexed, `(zp),Y`

// ~~~~~~~~~~~~~~~~ Load/Store ~~~~~~~~~~~~~~~~

// LDA
pub const LDA_IM: u8 = 0xA9;
pub const LDA_ZP: u8 = 0xA5;
pub const LDA_ZPX: u8 = 0xB5;
pub const LDA_ABS: u8 = 0xAD;
pub const LDA_AX: u8 = 0xBD;
pub const LDA_AY: u8 = 0xB9;
pub const LDA_IX: u8 = 0xA1;
pub const LDA_IY: u8 = 0xB1;

// LDX
pub const LDX_IM: u8 = 0xA2;
pub const LDX_ZP: u8 = 0xA6;
pub const LDX_ZPY: u8 = 0xB6;
pub const LDX_ABS: u8 = 0xAE;
pub const LDX_AY: u8 = 0xBE;

// LDY
pub const LDY_IM: u8 = 0xA0;
pub const LDY_ZP: u8 = 0xA4;
pub const LDY_ZPX: u8 = 0xB4;
pub const LDY_ABS: u8 = 0xAC;
pub const LDY_AX: u8 = 0xBC;

// STA
pub const STA_ZP: u8 = 0x85;
pub const STA_ZPX: u8 = 0x95;
pub const STA_ABS: u8 = 0x8D;
pub const STA_AX: u8 = 0x9D;
pub const STA_AY: u8 = 0x99;
pub const STA_IX: u8 = 0x81;
pub const STA_IY: u8 = 0x91;

// STX
pub const STX_ZP: u8 = 0x86;
pub const STX_ZPY: u8 = 0x96;
pub const STX_ABS: u8 = 0x8E;

// STY
pub const STY_ZP: u8 = 0x84;
pub const STY_ZPX: u8 = 0x94;
pub const STY_ABS: u8 = 0x8C;

// ~~~~~~~~~~~~~~~~ Jumps and Returns ~~~~~~~~~~~~~~~~

pub const JSR: u8 = 0x20;
pub const RTS: u8 = 0x60;
pub const JMP_ABS: u8 = 0x4C;
pub const JMP_IND: u8 = 0x6C;

// ~~~~~~~~~~~~~~~~ Stack Operations ~~~~~~~~~~~~~~~~

pub const TSX: u8 = 0xBA;
pub const TXS: u8 = 0x9A;
pub const PHA: u8 = 0x48;
pub const PHP: u8 = 0x08;
pub const PLA: u8 = 0x68;
pub const PLP: u8 = 0x28;

// ~~~~~~~~~~~~~~~~ Logical ~~~~~~~~~~~~~~~~

// AND
pub const AND_IM: u8 = 0x29;
pub const AND_ZP: u8 = 0x25;
pub const AND_ZPX: u8 = 0x35;
pub const AND_ABS: u8 = 0x2D;
pub const AND_AX: u8 = 0x3D;
pub const AND_AY: u8 = 0x39;
pub const AND_IX: u8 = 0x21;
pub const AND_IY: u8 = 0x31;

// EOR
pub const EOR_IM: u8 = 0x49;
pub const EOR_ZP: u8 = 0x45;
pub const EOR_ZPX: u8 = 0x55;
pub const EOR_ABS: u8 = 0x4D;
pub const EOR_AX: u8 = 0x5D;
pub const EOR_AY: u8 = 0x59;
pub const EOR_IX: u8 = 0x41;
pub const EOR_IY: u8 = 0x51;

// ORA
pub const ORA_IM: u8 = 0x09;
pub const ORA_ZP: u8 = 0x05;
pub const ORA_ZPX: u8 = 0x15;
pub const ORA_ABS: u8 = 0x0D;
pub const ORA_AX: u8 = 0x1D;
pub const ORA_AY: u8 = 0x19;
pub const ORA_IX: u8 = 0x01;
pub const ORA_IY: u8 = 0x11;
