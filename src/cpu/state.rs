/*!
state.rs - Canonical CPU architectural state (registers + flags) and
inline-friendly helpers.

Overview
========
`CpuState` is the single owner of the processor's registers, its status
flags, the remaining-cycles counter of the instruction in flight, and the
paused (RDY held low) flag. It excludes:
  - Memory and the stack cursor (owned by the bus)
  - Instruction decode / dispatch logic
Those live in the bus and dispatch modules.

Invariants
==========
- `cycles_remaining` is only ever decremented by one per tick or assigned
  from an instruction's total cycle count minus one.
- `pc` is always inside the 13-bit address space.
*/

use crate::bus::memory_map::{ROM_START, mask};
use crate::cpu::status::{StatusBits, StatusRegister};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub status: StatusRegister,
    pub cycles_remaining: u8,
    pub paused: bool,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: ROM_START,
            status: StatusRegister::new(),
            cycles_remaining: 0,
            paused: false,
        }
    }
}

impl CpuState {
    /// Power-on state: registers zeroed, PC at the ROM entry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full re-initialization.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Set PC, masked into the address space.
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = mask(v);
    }

    /// Advance PC by `delta`, wrapping inside the address space.
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.set_pc(self.pc.wrapping_add(delta));
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, mask: StatusBits) -> bool {
        self.status.contains(mask)
    }

    #[inline]
    pub fn assign_flag(&mut self, mask: StatusBits, value: bool) {
        self.status.assign(mask, value);
    }

    /// Composite helper to update ZERO + NEGATIVE from a result byte.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.status.zero = result == 0;
        self.status.negative = result & 0x80 != 0;
    }
}
