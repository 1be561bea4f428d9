#![doc = r#"
Bus module: flat memory façade and its submodules.

Overview
- `Bus` owns the 8 KiB byte array that backs the whole 13-bit address space
  (chip registers low, RAM, RIOT window, ROM high) and the stack cursor.
- `Bus::read`/`Bus::write` are plain array accesses after masking; they have
  no side effects. Side effects of register writes belong to the raster chip
  and are delivered through `interfaces::HookedBus`, which the console builds
  around the bus whenever the processor runs.

Modules and responsibilities
- memory_map: fixed address map and named chip register addresses.
- interfaces: `CpuBus` (what the CPU needs), `WriteHook` (chip intercept),
  `HookedBus` (view pairing the two without shared ownership).
"#]

pub mod interfaces;
pub mod memory_map;


pub use interfaces::{CpuBus, HookedBus, WriteHook};
pub use memory_map::{ADDRESS_MASK, MEMORY_SIZE, ROM_START};

use memory_map::{STACK_INIT, mask};

#[derive(Clone)]
pub struct Bus {
    mem: [u8; MEMORY_SIZE],
    sp: u8,
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field("sp", &self.sp)
            .field("rom_entry", &format_args!("{:02X?}", &self.mem[ROM_START as usize..][..4]))
            .finish()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    /// Zero-initialized memory with the stack cursor at its power-on value.
    pub fn new() -> Self {
        Self {
            mem: [0; MEMORY_SIZE],
            sp: STACK_INIT,
        }
    }

    /// Build a bus from a memory image. Bytes beyond `MEMORY_SIZE` are ignored;
    /// a shorter image leaves the tail zeroed.
    pub fn from_image(image: &[u8]) -> Self {
        let mut bus = Self::new();
        let n = image.len().min(MEMORY_SIZE);
        bus.mem[..n].copy_from_slice(&image[..n]);
        bus
    }

    pub fn reset(&mut self) {
        self.mem.fill(0);
        self.sp = STACK_INIT;
    }

    /// Entry address loaded into the program counter at power-on.
    #[inline]
    pub fn rom_start_address(&self) -> u16 {
        ROM_START
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.mem[mask(addr) as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.mem[mask(addr) as usize] = value;
    }

    /// Little-endian 16-bit read of `addr` and `addr + 1`.
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        lo + hi * 256
    }

    /// Copy `bytes` into memory starting at `addr` (masked per byte).
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            self.write(addr.wrapping_add(i as u16), *b);
        }
    }

    // -----------------------------
    // Stack cursor
    // -----------------------------

    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }

    #[inline]
    pub fn set_sp(&mut self, sp: u8) {
        self.sp = sp;
    }

    /// Push without notifying any chip (raw memory semantics).
    pub fn push(&mut self, value: u8) {
        CpuBus::push(self, value);
    }

    pub fn pop(&mut self) -> u8 {
        CpuBus::pop(self)
    }

    /// Raw memory for inspection.
    #[inline]
    pub fn memory(&self) -> &[u8] {
        &self.mem
    }

    #[inline]
    pub fn memory_mut(&mut self) -> &mut [u8] {
        &mut self.mem
    }
}

impl CpuBus for Bus {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        Bus::read(self, addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        Bus::write(self, addr, value);
    }

    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }

    #[inline]
    fn set_sp(&mut self, sp: u8) {
        self.sp = sp;
    }
}
