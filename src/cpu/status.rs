/*!
status.rs - Processor status flags and their packed byte form.

Six independent flags are kept as booleans. `pack`/`unpack` convert to and
from the byte pushed by PHP/BRK and pulled by PLP/RTI.

Packed layout
=============
Bit: 7 6 5 4 3 2 1 0
     - N V B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  B = BREAK (never set by `pack`; BRK/PHP add it when pushing)
  D = DECIMAL
  I = INTERRUPT (disable)
  Z = ZERO
  C = CARRY
Bit 7 is unused and always packs as 0.
*/

use bitflags::bitflags;

bitflags! {
    /// Bit masks of the packed status byte. Also used as flag selectors by
    /// execution helpers and as per-instruction flag-effect sets.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusBits: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const OVERFLOW = 0b0010_0000;
        const NEGATIVE = 0b0100_0000;

        /// The six architectural flags (everything `pack` can produce).
        const FLAGS = Self::CARRY.bits()
            | Self::ZERO.bits()
            | Self::INTERRUPT.bits()
            | Self::DECIMAL.bits()
            | Self::OVERFLOW.bits()
            | Self::NEGATIVE.bits();
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusRegister {
    pub carry: bool,
    pub zero: bool,
    pub interrupt: bool,
    pub decimal: bool,
    pub overflow: bool,
    pub negative: bool,
}

impl StatusRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pack into the status byte. Break and bit 7 are always 0.
    pub fn pack(&self) -> u8 {
        let mut bits = StatusBits::empty();
        bits.set(StatusBits::CARRY, self.carry);
        bits.set(StatusBits::ZERO, self.zero);
        bits.set(StatusBits::INTERRUPT, self.interrupt);
        bits.set(StatusBits::DECIMAL, self.decimal);
        bits.set(StatusBits::OVERFLOW, self.overflow);
        bits.set(StatusBits::NEGATIVE, self.negative);
        bits.bits()
    }

    /// Restore all six flags from a status byte. Break and bit 7 are ignored.
    pub fn unpack(&mut self, byte: u8) {
        let bits = StatusBits::from_bits_truncate(byte);
        self.carry = bits.contains(StatusBits::CARRY);
        self.zero = bits.contains(StatusBits::ZERO);
        self.interrupt = bits.contains(StatusBits::INTERRUPT);
        // Same bit 3 as pack.
        self.decimal = bits.contains(StatusBits::DECIMAL);
        self.overflow = bits.contains(StatusBits::OVERFLOW);
        self.negative = bits.contains(StatusBits::NEGATIVE);
    }

    pub fn from_byte(byte: u8) -> Self {
        let mut s = Self::new();
        s.unpack(byte);
        s
    }

    /// True if every flag selected by `mask` is set.
    pub fn contains(&self, mask: StatusBits) -> bool {
        StatusBits::from_bits_truncate(self.pack()).contains(mask)
    }

    /// Set or clear every flag selected by `mask`.
    pub fn assign(&mut self, mask: StatusBits, value: bool) {
        if mask.contains(StatusBits::CARRY) {
            self.carry = value;
        }
        if mask.contains(StatusBits::ZERO) {
            self.zero = value;
        }
        if mask.contains(StatusBits::INTERRUPT) {
            self.interrupt = value;
        }
        if mask.contains(StatusBits::DECIMAL) {
            self.decimal = value;
        }
        if mask.contains(StatusBits::OVERFLOW) {
            self.overflow = value;
        }
        if mask.contains(StatusBits::NEGATIVE) {
            self.negative = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_index(i: u8) -> StatusRegister {
        StatusRegister {
            carry: i & 1 != 0,
            zero: i & 2 != 0,
            interrupt: i & 4 != 0,
            decimal: i & 8 != 0,
            overflow: i & 16 != 0,
            negative: i & 32 != 0,
        }
    }

    #[test]
    fn pack_bit_positions() {
        let s = StatusRegister {
            carry: true,
            ..Default::default()
        };
        assert_eq!(s.pack(), 0x01);
        let s = StatusRegister {
            decimal: true,
            ..Default::default()
        };
        assert_eq!(s.pack(), 0x08);
        let s = StatusRegister {
            overflow: true,
            ..Default::default()
        };
        assert_eq!(s.pack(), 0x20);
        let s = StatusRegister {
            negative: true,
            ..Default::default()
        };
        assert_eq!(s.pack(), 0x40);
    }

    #[test]
    fn break_and_top_bit_never_packed() {
        let mut s = StatusRegister::new();
        s.unpack(0xFF);
        assert_eq!(s.pack(), 0x6F);
        assert_eq!(s.pack() & StatusBits::BREAK.bits(), 0);
        assert_eq!(s.pack() & 0x80, 0);
    }

    #[test]
    fn round_trip_all_64_combinations() {
        for i in 0..64u8 {
            let s = from_index(i);
            let mut r = StatusRegister::new();
            r.unpack(s.pack());
            assert_eq!(r, s, "combination {i:#04x}");
        }
    }

    #[test]
    fn decimal_flag_both_directions() {
        // Set -> pack -> unpack.
        let s = StatusRegister {
            decimal: true,
            ..Default::default()
        };
        assert!(StatusRegister::from_byte(s.pack()).decimal);
        // Clear -> pack -> unpack, starting from a register that had it set.
        let mut r = StatusRegister {
            decimal: true,
            ..Default::default()
        };
        r.unpack(StatusRegister::new().pack());
        assert!(!r.decimal);
        // Break bit alone must not be read as decimal.
        assert!(!StatusRegister::from_byte(0x10).decimal);
    }

    #[test]
    fn assign_and_contains() {
        let mut s = StatusRegister::new();
        s.assign(StatusBits::CARRY | StatusBits::NEGATIVE, true);
        assert!(s.carry && s.negative);
        assert!(s.contains(StatusBits::CARRY | StatusBits::NEGATIVE));
        assert!(!s.contains(StatusBits::ZERO));
        s.assign(StatusBits::CARRY, false);
        assert!(!s.carry && s.negative);
    }
}
