#![doc = r#"
Playfield bit lookup

The playfield is 20 logical pixels wide per half-screen, each 4 color clocks
wide, built from three registers:

```text
    logical 0..=3    PF0 bits 4..=7   (low to high)
    logical 4..=11   PF1 bits 7..=0   (high to low)
    logical 12..=19  PF2 bits 0..=7   (low to high)
```

The right half (logical 20..=39) repeats the pattern, or mirrors it
(`39 - pixel`) when CTRLPF bit 0 is set.
"#]

use crate::bus::Bus;
use crate::bus::memory_map::tia::{CTRLPF, PF0, PF1, PF2};

/// Logical playfield pixels across the visible line.
pub const PLAYFIELD_PIXELS: u32 = 40;
/// Color clocks per logical playfield pixel.
pub const CLOCKS_PER_PIXEL: u32 = 4;

/// The three pattern registers and the mirror bit, as read from memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Playfield {
    pub pf0: u8,
    pub pf1: u8,
    pub pf2: u8,
    pub mirror: bool,
}

impl Playfield {
    pub fn from_bus(bus: &Bus) -> Self {
        Self {
            pf0: bus.read(PF0),
            pf1: bus.read(PF1),
            pf2: bus.read(PF2),
            mirror: bus.read(CTRLPF) & 0x01 != 0,
        }
    }

    /// Is the playfield set at visible pixel `x` (0..160)?
    pub fn is_set(&self, x: u32) -> bool {
        let pixel = x / CLOCKS_PER_PIXEL;
        if pixel >= PLAYFIELD_PIXELS {
            return false;
        }
        let p = match pixel {
            0..=19 => pixel,
            _ if self.mirror => 39 - pixel,
            _ => pixel - 20,
        };
        match p {
            0..=3 => self.pf0 & (1 << (4 + p)) != 0,
            4..=11 => self.pf1 & (1 << (7 - (p - 4))) != 0,
            _ => self.pf2 & (1 << (p - 12)) != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pf(pf0: u8, pf1: u8, pf2: u8, mirror: bool) -> Playfield {
        Playfield {
            pf0,
            pf1,
            pf2,
            mirror,
        }
    }

    fn pattern(p: &Playfield) -> Vec<bool> {
        (0..PLAYFIELD_PIXELS).map(|i| p.is_set(i * 4)).collect()
    }

    #[test]
    fn pf0_reads_upper_nibble_low_to_high() {
        let p = pf(0x10, 0, 0, false);
        assert!(p.is_set(0) && p.is_set(3));
        assert!(!p.is_set(4));
        let p = pf(0x80, 0, 0, false);
        assert!(p.is_set(12));
        assert!(!pf(0x0F, 0, 0, false).is_set(0));
    }

    #[test]
    fn pf1_reads_high_to_low() {
        let p = pf(0, 0x80, 0, false);
        assert_eq!(pattern(&p).iter().position(|&b| b), Some(4));
        let p = pf(0, 0x01, 0, false);
        assert_eq!(pattern(&p).iter().position(|&b| b), Some(11));
    }

    #[test]
    fn pf2_reads_low_to_high() {
        let p = pf(0, 0, 0x01, false);
        assert_eq!(pattern(&p).iter().position(|&b| b), Some(12));
        let p = pf(0, 0, 0x80, false);
        assert_eq!(pattern(&p).iter().position(|&b| b), Some(19));
    }

    #[test]
    fn right_half_repeats_or_mirrors() {
        let repeat = pattern(&pf(0x10, 0, 0, false));
        assert!(repeat[0] && repeat[20] && !repeat[39]);

        let mirror = pattern(&pf(0x10, 0, 0, true));
        assert!(mirror[0] && !mirror[20] && mirror[39]);

        let mirror = pattern(&pf(0, 0, 0x80, true));
        assert!(mirror[19] && mirror[20]);
    }

    #[test]
    fn from_bus_reads_registers() {
        let mut bus = Bus::new();
        bus.write(PF0, 0xF0);
        bus.write(PF1, 0xAA);
        bus.write(PF2, 0x55);
        bus.write(CTRLPF, 0x31);
        assert_eq!(Playfield::from_bus(&bus), pf(0xF0, 0xAA, 0x55, true));
    }
}
