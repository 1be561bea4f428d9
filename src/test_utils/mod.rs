//! Shared test utilities for placing small programs at the ROM entry.
//!
//! These helpers de-duplicate setup across the CPU, chip and console unit
//! tests. Programs are raw machine code written at `$1000`, where the program
//! counter starts after power-on.

#![allow(dead_code)]

use crate::bus::{Bus, ROM_START};
use crate::console::Console;
use crate::cpu::state::CpuState;

/// A zeroed bus with `program` at the ROM entry.
pub fn setup_bus(program: &[u8]) -> Bus {
    let mut bus = Bus::new();
    bus.load(ROM_START, program);
    bus
}

/// Power-on CPU state plus a bus holding `program`.
pub fn setup_cpu(program: &[u8]) -> (CpuState, Bus) {
    (CpuState::new(), setup_bus(program))
}

/// A console with `program` loaded at the ROM entry.
pub fn setup_console(program: &[u8]) -> Console {
    let mut console = Console::new();
    console.load_program(ROM_START, program);
    console
}

/// Append `JMP $addr` to `program` (an endless loop target for timing tests).
pub fn with_jmp(mut program: Vec<u8>, addr: u16) -> Vec<u8> {
    program.extend_from_slice(&[0x4C, (addr & 0xFF) as u8, (addr >> 8) as u8]);
    program
}
