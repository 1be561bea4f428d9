/*!
core::Cpu - Canonical 6502 CPU façade wrapping `CpuState`.

Design
======
- `Cpu` stores a single field: `state: CpuState`.
- The per-tick state machine lives here: `tick_once` drains the in-flight
  instruction's remaining cycles, honours the RDY line reported by the bus,
  and only then fetches and executes the next instruction in one go.
- `step` is the instruction-granular alternative used by tests and tools.
  It ignores RDY and any in-flight cycles.

Tick algorithm
==============
1. Latch `paused` from the bus' RDY line.
2. If cycles remain, consume one and return.
3. If paused, return without touching PC or registers.
4. Execute one instruction; its total minus the fetch tick becomes the
   remaining count.
*/

use crate::bus::CpuBus;
use crate::cpu::state::CpuState;
use crate::cpu::status::StatusRegister;

/// Register snapshot for inspection and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u8,
    pub status: u8,
    pub cycles_remaining: u8,
    pub paused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
}

impl Cpu {
    /// Construct a new CPU with power‑up defaults.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
        }
    }

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Full re-initialization (PC back to the ROM entry).
    pub fn reset(&mut self) {
        self.state.reset();
    }

    // ---------------------------------------------------------------------
    // Register accessors
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> StatusRegister {
        self.state.status
    }
    pub fn cycles_remaining(&self) -> u8 {
        self.state.cycles_remaining
    }
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn set_pc(&mut self, v: u16) {
        self.state.set_pc(v);
    }

    pub fn snapshot<B: CpuBus>(&self, bus: &B) -> CpuSnapshot {
        CpuSnapshot {
            a: self.state.a,
            x: self.state.x,
            y: self.state.y,
            pc: self.state.pc,
            sp: bus.sp(),
            status: self.state.status.pack(),
            cycles_remaining: self.state.cycles_remaining,
            paused: self.state.paused,
        }
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Advance the processor by one clock tick.
    pub fn tick_once<B: CpuBus>(&mut self, bus: &mut B) {
        self.state.paused = !bus.ready();
        if self.state.cycles_remaining > 0 {
            self.state.cycles_remaining -= 1;
            return;
        }
        if self.state.paused {
            return;
        }
        let total = crate::cpu::dispatch::step(&mut self.state, bus);
        self.state.cycles_remaining = total.saturating_sub(1);
        // A store to the sync strobe takes effect as soon as it lands.
        self.state.paused = !bus.ready();
    }

    /// Advance by `n` ticks.
    pub fn tick<B: CpuBus>(&mut self, bus: &mut B, n: usize) {
        for _ in 0..n {
            self.tick_once(bus);
        }
    }

    /// Execute one whole instruction immediately and return its cycle count.
    /// Clears any in-flight cycles; RDY is not consulted.
    pub fn step<B: CpuBus>(&mut self, bus: &mut B) -> u8 {
        self.state.cycles_remaining = 0;
        crate::cpu::dispatch::step(&mut self.state, bus)
    }

    /// Run `max_instructions` whole instructions, returning the cycles spent.
    pub fn run<B: CpuBus>(&mut self, bus: &mut B, max_instructions: usize) -> u64 {
        (0..max_instructions)
            .map(|_| self.step(bus) as u64)
            .sum()
    }
}
