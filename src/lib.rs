#![doc = r#"
arvcs library crate.

Core of a cycle-stepped emulator for an Atari-2600-style machine: a 6502
processor, a flat 8 KiB memory bus with a register-write intercept, and the
TIA raster chip that clocks the processor at a 3:1 ratio and paints a
160 x 192 RGBA frame.

Modules:
- bus: flat memory, address map, and the `CpuBus`/`WriteHook` seams
- cartridge: raw 2 KiB / 4 KiB ROM images for the $1000 window
- console: owning context wiring bus, CPU and chip together
- cpu: 6502 core (facade + state + table + dispatch + execute modules)
- tia: color clock, WSYNC/VSYNC handling, playfield, palette, frame buffer

In tests, shared program builders are available under `crate::test_utils`.
"#]

// Core emulator modules
pub mod bus;
pub mod cartridge;
pub mod console;
pub mod cpu;
pub mod tia;

// Re-export commonly used types at the crate root for convenience.
pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError};
pub use console::Console;
pub use cpu::{Cpu, CpuSnapshot};
pub use tia::Tia;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
