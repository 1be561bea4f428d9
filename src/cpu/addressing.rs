/*!
addressing.rs - Addressing modes and operand resolution (shared by dispatch)

Overview
========
Provides canonical helpers for:
- Instruction stream byte/word fetch
- Resolving an addressing mode into an `Operand` (value, address, or offset)
- Page-cross detection for the modes that can incur a penalty
- The 6502 JMP (indirect) page-wrap quirk

Scope & Responsibilities
=======================
- Pure operand resolution only. Resolution never reads the *target* of a
  memory operand; the handler decides whether to read, write, or both.
- Cycle penalties are applied by the dispatcher from `Operand::crossed`.

Caller Assumptions
==================
- PC points at the first operand byte (the opcode is already consumed).
- Operand bytes are consumed exclusively through these helpers.
*/

use crate::bus::CpuBus;
use crate::cpu::regs::CpuRegs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// True for the modes whose effective address can land on another page
    /// than its base.
    pub const fn can_cross_page(self) -> bool {
        matches!(
            self,
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
        )
    }
}

/// A resolved operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    Implied,
    Accumulator,
    Immediate(u8),
    Memory { addr: u16, crossed: bool },
    /// Signed branch displacement.
    Relative(i16),
}

impl Operand {
    #[inline]
    pub(crate) fn crossed(&self) -> bool {
        matches!(self, Operand::Memory { crossed: true, .. })
    }

    #[inline]
    pub(crate) fn address(&self) -> Option<u16> {
        match *self {
            Operand::Memory { addr, .. } => Some(addr),
            _ => None,
        }
    }
}

/// Fetch next byte from the instruction stream, incrementing PC.
pub(crate) fn fetch_byte<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u8 {
    let v = bus.read(cpu.pc());
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
pub(crate) fn fetch_word<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u16 {
    let lo = fetch_byte(cpu, bus) as u16;
    let hi = fetch_byte(cpu, bus) as u16;
    (hi << 8) | lo
}

#[inline]
pub(crate) fn page_crossed(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}

/// Resolve `mode` into an operand, consuming its operand bytes.
pub(crate) fn resolve<C: CpuRegs, B: CpuBus>(
    mode: AddressingMode,
    cpu: &mut C,
    bus: &mut B,
) -> Operand {
    match mode {
        AddressingMode::Implied => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(fetch_byte(cpu, bus)),
        AddressingMode::ZeroPage => memory(fetch_byte(cpu, bus) as u16),
        AddressingMode::ZeroPageX => memory(fetch_byte(cpu, bus).wrapping_add(cpu.x()) as u16),
        AddressingMode::ZeroPageY => memory(fetch_byte(cpu, bus).wrapping_add(cpu.y()) as u16),
        AddressingMode::Absolute => memory(fetch_word(cpu, bus)),
        AddressingMode::AbsoluteX => {
            let base = fetch_word(cpu, bus);
            indexed(base, cpu.x())
        }
        AddressingMode::AbsoluteY => {
            let base = fetch_word(cpu, bus);
            indexed(base, cpu.y())
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(cpu, bus);
            memory(read_word_indirect_bug(bus, ptr))
        }
        AddressingMode::IndirectX => {
            let zp = fetch_byte(cpu, bus).wrapping_add(cpu.x());
            memory(read_word_zp(bus, zp))
        }
        AddressingMode::IndirectY => {
            let zp = fetch_byte(cpu, bus);
            let base = read_word_zp(bus, zp);
            indexed(base, cpu.y())
        }
        AddressingMode::Relative => {
            let b = fetch_byte(cpu, bus) as i16;
            Operand::Relative((b & 127) - (b & 128))
        }
    }
}

#[inline]
fn memory(addr: u16) -> Operand {
    Operand::Memory {
        addr,
        crossed: false,
    }
}

#[inline]
fn indexed(base: u16, index: u8) -> Operand {
    let addr = base.wrapping_add(index as u16);
    Operand::Memory {
        addr,
        crossed: page_crossed(base, addr),
    }
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a 16-bit little endian pointer from zero page; the high byte wraps
/// within page zero.
#[inline]
pub(crate) fn read_word_zp<B: CpuBus>(bus: &mut B, base: u8) -> u16 {
    let lo = bus.read(base as u16) as u16;
    let hi = bus.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP (indirect) pointer read: when the pointer's low byte is 0xFF the high
/// byte comes from the start of the same page.
#[inline]
pub(crate) fn read_word_indirect_bug<B: CpuBus>(bus: &mut B, addr: u16) -> u16 {
    let lo = bus.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}
