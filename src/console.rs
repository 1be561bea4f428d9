/*!
Console: the owning context for one emulated machine.

The bus, the processor and the raster chip are siblings owned here. The chip
drives the processor (three color clocks per CPU clock) and needs to see every
store the processor makes, while the processor needs the chip's RDY line. No
component holds a reference to another between ticks; `Tia::tick_once`
borrows the bus and the CPU for one color clock and builds the `HookedBus`
view that connects them.

Lifecycle
=========
- `Console::new` validates the instruction table before any tick can run; a
  malformed table is a programmer error and panics.
- Memory starts zeroed with the program counter at `$1000`. Load code with
  `load_program`, `with_image` or `with_cartridge`.
- `tick`/`tick_once` advance color clocks; `run_frame` runs until the next
  frame starts.
*/

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::{Cpu, CpuSnapshot, table};
use crate::tia::{FRAME_CLOCKS, Tia};

#[derive(Debug, Clone)]
pub struct Console {
    bus: Bus,
    cpu: Cpu,
    tia: Tia,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Power-on console with zeroed memory.
    pub fn new() -> Self {
        Self::with_bus(Bus::new())
    }

    /// Power-on console whose memory starts as `image` (see `Bus::from_image`).
    pub fn with_image(image: &[u8]) -> Self {
        Self::with_bus(Bus::from_image(image))
    }

    /// Power-on console with `cart` installed in the ROM window.
    pub fn with_cartridge(cart: &Cartridge) -> Self {
        let mut console = Self::new();
        cart.install(&mut console.bus);
        console
    }

    fn with_bus(bus: Bus) -> Self {
        if let Err(e) = table::validate() {
            panic!("instruction table rejected: {e}");
        }
        Self {
            bus,
            cpu: Cpu::new(),
            tia: Tia::new(),
        }
    }

    /// Copy `bytes` into memory at `addr`.
    pub fn load_program(&mut self, addr: u16, bytes: &[u8]) {
        self.bus.load(addr, bytes);
    }

    /// Processor and chip back to power-on state; memory is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.tia.reset();
        self.bus.set_sp(crate::bus::memory_map::STACK_INIT);
    }

    // ---------------------------------------------------------------------
    // Clocking
    // ---------------------------------------------------------------------

    /// Advance one color clock.
    #[inline]
    pub fn tick_once(&mut self) {
        self.tia.tick_once(&mut self.bus, &mut self.cpu);
    }

    /// Advance `n` color clocks.
    pub fn tick(&mut self, n: usize) {
        self.tia.tick(&mut self.bus, &mut self.cpu, n);
    }

    /// Tick until the chip starts a new frame (vertical sync or clock wrap).
    /// Returns the number of color clocks run.
    pub fn run_frame(&mut self) -> u64 {
        let start = self.tia.frame_count();
        let limit = 2 * FRAME_CLOCKS as u64;
        let mut ticks = 0;
        while self.tia.frame_count() == start && ticks < limit {
            self.tick_once();
            ticks += 1;
        }
        ticks
    }

    // ---------------------------------------------------------------------
    // Observation
    // ---------------------------------------------------------------------

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn tia(&self) -> &Tia {
        &self.tia
    }

    pub fn snapshot(&self) -> CpuSnapshot {
        self.cpu.snapshot(&self.bus)
    }

    /// RGBA8 frame buffer, 160 x 192.
    pub fn frame_buffer(&self) -> &[u8] {
        self.tia.frame_buffer()
    }

    pub fn memory(&self) -> &[u8] {
        self.bus.memory()
    }
}
