/*!
TIA raster/timing chip providing:
- A color clock counter covering one NTSC frame (262 scanlines x 228 clocks)
- The fixed 3:1 color-clock to CPU-clock ratio (the chip drives the CPU)
- WSYNC: hold the CPU off (RDY low) until the next scanline boundary
- VSYNC: restart the frame when the sync register is written with zero
- Background / playfield pixels painted into an RGBA framebuffer

NOTES / LIMITATIONS:
- Only background color, playfield color and the three playfield registers
  (plus the mirror bit of CTRLPF) affect the picture. Players, missiles, ball,
  collisions and audio registers are stored in memory but not modelled.
- Painting is per color clock; there is no latching delay on register writes.

STRUCTURE:
- `Tia` holds the clock, the WSYNC latch, the frame counter and the buffer.
- `registers.rs` is the bus write intercept (`WriteHook`).
- `playfield.rs` maps a column to a playfield bit.
- `renderer.rs` advances the clock and paints.
- `screenshot.rs` exports the buffer as PNG (feature `screenshot`).
*/

pub mod playfield;
pub mod registers;
pub mod renderer;
#[cfg(feature = "screenshot")]
pub mod screenshot;

#[cfg(feature = "screenshot")]
pub use screenshot::ScreenshotError;

/// Color clocks per scanline.
pub const COLOR_CLOCKS: u32 = 228;
/// Horizontal blank width in color clocks.
pub const HBLANK: u32 = 68;
/// Visible pixels per scanline.
pub const ACTIVE_PIXELS: u32 = 160;
pub const VSYNC_LINES: u32 = 3;
pub const VBLANK_LINES: u32 = 37;
pub const ACTIVE_LINES: u32 = 192;
pub const OVERSCAN_LINES: u32 = 30;
/// Total NTSC scanlines per frame.
pub const SCANLINES: u32 = VSYNC_LINES + VBLANK_LINES + ACTIVE_LINES + OVERSCAN_LINES;
/// First scanline of the visible picture.
pub const ACTIVE_START_LINE: u32 = VSYNC_LINES + VBLANK_LINES;
/// Color clocks per frame.
pub const FRAME_CLOCKS: u32 = SCANLINES * COLOR_CLOCKS;
/// Color clocks per CPU clock.
pub const CPU_CLOCK_DIVIDER: u32 = 3;

/// Framebuffer width in pixels.
pub const FRAME_WIDTH: usize = ACTIVE_PIXELS as usize;
/// Framebuffer height in pixels.
pub const FRAME_HEIGHT: usize = ACTIVE_LINES as usize;
/// RGBA bytes per pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// NTSC palette (0xRRGGBB), indexed by color register value / 2.
pub const NTSC_PALETTE: [u32; 128] = [
    0x000000, 0x404040, 0x6c6c6c, 0x909090, 0xb0b0b0, 0xc8c8c8, 0xdcdcdc, 0xececec,
    0x444400, 0x646410, 0x848424, 0xa0a034, 0xb8b840, 0xd0d050, 0xe8e85c, 0xfcfc68,
    0x702800, 0x844414, 0x985c28, 0xac783c, 0xbc8c4c, 0xcca05c, 0xdcb468, 0xecc878,
    0x841800, 0x983418, 0xac5030, 0xc06848, 0xd0805c, 0xe09470, 0xeca880, 0xfcbc94,
    0x880000, 0x9c2020, 0xb03c3c, 0xc05858, 0xd07070, 0xe08888, 0xeca0a0, 0xfcb4b4,
    0x78005c, 0x8c2074, 0xa03c88, 0xb0589c, 0xc070b0, 0xd084c0, 0xdc9cd0, 0xecb0e0,
    0x480078, 0x602090, 0x783ca4, 0x8c58b8, 0xa070cc, 0xb484dc, 0xc49cec, 0xd4b0fc,
    0x140084, 0x302098, 0x4c3cac, 0x6858c0, 0x7c70d0, 0x9488e0, 0xa8a0ec, 0xbcb4fc,
    0x000088, 0x1c209c, 0x3840b0, 0x505cc0, 0x6874d0, 0x7c8ce0, 0x90a4ec, 0xa4b8fc,
    0x00187c, 0x1c3890, 0x3854a8, 0x5070bc, 0x6888cc, 0x7c9cdc, 0x90b4ec, 0xa4c8fc,
    0x002c5c, 0x1c4c78, 0x386890, 0x5084ac, 0x689cc0, 0x7cb4d4, 0x90cce8, 0xa4e0fc,
    0x003c2c, 0x1c5c48, 0x387c64, 0x509c80, 0x68b494, 0x7cd0ac, 0x90e4c0, 0xa4fcd4,
    0x003c00, 0x205c20, 0x407c40, 0x5c9c5c, 0x74b474, 0x8cd08c, 0xa4e4a4, 0xb8fcb8,
    0x143800, 0x345c1c, 0x507c38, 0x6c9850, 0x84b468, 0x9ccc7c, 0xb4e490, 0xc8fca4,
    0x2c3000, 0x4c501c, 0x687034, 0x848c4c, 0x9ca864, 0xb4c078, 0xc8d488, 0xe0ec9c,
    0x442800, 0x644818, 0x846830, 0xa08444, 0xb89c58, 0xd0b46c, 0xe8cc7c, 0xfce08c,
];

/// RGB bytes for a color register value.
#[inline]
pub fn rgb(color: u8) -> [u8; 3] {
    let c = NTSC_PALETTE[(color / 2) as usize];
    [(c >> 16) as u8, (c >> 8) as u8, c as u8]
}

#[derive(Debug, Clone)]
pub struct Tia {
    clock: u32,
    strobed_wsync: bool,
    frame_count: u64,
    frame_buffer: Vec<u8>,
}

impl Default for Tia {
    fn default() -> Self {
        Self::new()
    }
}

impl Tia {
    pub fn new() -> Self {
        Self {
            clock: 0,
            strobed_wsync: false,
            frame_count: 0,
            frame_buffer: vec![0; FRAME_WIDTH * FRAME_HEIGHT * BYTES_PER_PIXEL],
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Color clocks since the start of the current frame.
    pub fn clock(&self) -> u32 {
        self.clock
    }

    pub fn scanline(&self) -> u32 {
        self.clock / COLOR_CLOCKS
    }

    pub fn column(&self) -> u32 {
        self.clock % COLOR_CLOCKS
    }

    /// Frames started so far (vertical-sync resets and clock wraps).
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// True while a WSYNC strobe is holding the CPU.
    pub fn is_holding_cpu(&self) -> bool {
        self.strobed_wsync
    }

    /// RGBA8 pixels, row-major, `FRAME_WIDTH` x `FRAME_HEIGHT`.
    pub fn frame_buffer(&self) -> &[u8] {
        &self.frame_buffer
    }

    /// RGBA of the pixel at (`x`, `y`) in the visible picture.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= FRAME_WIDTH || y >= FRAME_HEIGHT {
            return None;
        }
        let i = (y * FRAME_WIDTH + x) * BYTES_PER_PIXEL;
        let p = &self.frame_buffer[i..i + BYTES_PER_PIXEL];
        Some([p[0], p[1], p[2], p[3]])
    }

    fn start_frame(&mut self) {
        self.clock = 0;
        self.frame_count += 1;
    }
}
