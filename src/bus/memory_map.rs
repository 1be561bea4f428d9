/*!
Address map for the console's 13-bit address space.

The processor drives only 13 address lines, so every CPU-visible address is
masked with `ADDRESS_MASK` before it reaches memory. Regions are fixed by the
hardware and are not configurable:

- $0000-$007F: raster chip (TIA) registers
- $0080-$00FF: 128 bytes of RAM (also the stack page)
- $0280-$029F: I/O + timer chip (RIOT) registers (unmodeled; plain memory)
- $1000-$1FFF: cartridge ROM

Everything in between is plain memory with no side effects.
*/

/// Size of the flat memory array (13 address bits).
pub const MEMORY_SIZE: usize = 0x2000;

/// Mask applied to every address before it touches memory.
pub const ADDRESS_MASK: u16 = 0x1FFF;

/// Program counter value at power-on.
pub const ROM_START: u16 = 0x1000;
/// Last address of the ROM window.
pub const ROM_END: u16 = 0x1FFF;

/// Base of the page the stack cursor addresses.
pub const STACK_BASE: u16 = 0x0000;
/// Stack cursor at power-on.
pub const STACK_INIT: u8 = 0xFF;

/// Start of RAM.
pub const RAM_START: u16 = 0x0080;
/// End of RAM (inclusive).
pub const RAM_END: u16 = 0x00FF;

/// Start of the RIOT register window.
pub const RIOT_START: u16 = 0x0280;
/// End of the RIOT register window (inclusive).
pub const RIOT_END: u16 = 0x029F;

/// Vector fetched by BRK.
pub const BRK_VECTOR: u16 = 0xFFFE;

/// Raster chip write registers. Only the ones the chip models have behavior;
/// the rest are stored like ordinary memory.
pub mod tia {
    /// Vertical sync; writing 0 starts a new frame.
    pub const VSYNC: u16 = 0x00;
    /// Vertical blank.
    pub const VBLANK: u16 = 0x01;
    /// Wait for horizontal sync (strobe).
    pub const WSYNC: u16 = 0x02;
    /// Reset horizontal sync counter (strobe).
    pub const RSYNC: u16 = 0x03;
    pub const NUSIZ0: u16 = 0x04;
    pub const NUSIZ1: u16 = 0x05;
    pub const COLUP0: u16 = 0x06;
    pub const COLUP1: u16 = 0x07;
    /// Playfield colour.
    pub const COLUPF: u16 = 0x08;
    /// Background colour.
    pub const COLUBK: u16 = 0x09;
    /// Playfield control; bit 0 selects mirroring of the right half.
    pub const CTRLPF: u16 = 0x0A;
    pub const REFP0: u16 = 0x0B;
    pub const REFP1: u16 = 0x0C;
    /// Playfield register 0 (upper nibble used).
    pub const PF0: u16 = 0x0D;
    /// Playfield register 1.
    pub const PF1: u16 = 0x0E;
    /// Playfield register 2.
    pub const PF2: u16 = 0x0F;
    pub const RESP0: u16 = 0x10;
    pub const RESP1: u16 = 0x11;
    pub const RESM0: u16 = 0x12;
    pub const RESM1: u16 = 0x13;
    pub const RESBL: u16 = 0x14;
    pub const AUDC0: u16 = 0x15;
    pub const AUDC1: u16 = 0x16;
    pub const AUDF0: u16 = 0x17;
    pub const AUDF1: u16 = 0x18;
    pub const AUDV0: u16 = 0x19;
    pub const AUDV1: u16 = 0x1A;
    pub const GRP0: u16 = 0x1B;
    pub const GRP1: u16 = 0x1C;
    pub const ENAM0: u16 = 0x1D;
    pub const ENAM1: u16 = 0x1E;
    pub const ENABL: u16 = 0x1F;
    pub const HMP0: u16 = 0x20;
    pub const HMP1: u16 = 0x21;
    pub const HMM0: u16 = 0x22;
    pub const HMM1: u16 = 0x23;
    pub const HMBL: u16 = 0x24;
    pub const VDELP0: u16 = 0x25;
    pub const VDELP1: u16 = 0x26;
    pub const VDELBL: u16 = 0x27;
    pub const RESMP0: u16 = 0x28;
    pub const RESMP1: u16 = 0x29;
    pub const HMOVE: u16 = 0x2A;
    pub const HMCLR: u16 = 0x2B;
    pub const CXCLR: u16 = 0x2C;
}

/// Coarse classification of an address, mainly for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    TiaRegisters,
    Ram,
    Riot,
    Rom,
    Unmapped,
}

/// Mask an address into the 13-bit space.
#[inline]
pub const fn mask(addr: u16) -> u16 {
    addr & ADDRESS_MASK
}

/// Classify an address (after masking).
pub fn region(addr: u16) -> Region {
    match mask(addr) {
        0x0000..=0x007F => Region::TiaRegisters,
        RAM_START..=RAM_END => Region::Ram,
        RIOT_START..=RIOT_END => Region::Riot,
        ROM_START..=ROM_END => Region::Rom,
        _ => Region::Unmapped,
    }
}
