//! # Processor Status Register
//!
//! The 6502 packs its seven status flags into a single byte. [`Status`]
//! stores that byte as ground truth; the named-flag view and the raw
//! packed view are always two reads of the same value, so a write
//! through either is observable through the other.

use bitflags::bitflags;

bitflags! {
    /// Packed processor status byte (NV-BDIZC).
    ///
    /// Bit 5 is physically unused on the 6502. It travels with the byte
    /// through PHP/PLP but no instruction logic ever consults it.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::Status;
    ///
    /// let mut status = Status::empty();
    /// status.insert(Status::CARRY | Status::NEGATIVE);
    ///
    /// // Named-bit view and packed-byte view agree.
    /// assert!(status.contains(Status::CARRY));
    /// assert_eq!(status.bits(), 0b1000_0001);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Status: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

impl Status {
    /// The shared flag rule for loads, transfers into registers, pulls,
    /// and logical operations: Zero iff the value is 0, Negative iff
    /// bit 7 is set. No other flag is touched.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}
