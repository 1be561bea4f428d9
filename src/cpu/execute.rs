/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, control flow)

Purpose
=======
Centralize the side-effect logic of every instruction so the dispatch family
handlers stay thin: they resolve an operand, call one of these helpers and
write the result back.

Scope (crate-visible)
---------------------
Stack helpers:
    push_word, pop_word, php, plp, pha, pla

Loads / transfers:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs

ALU:
    adc, sbc, compare, and/ora/eor, bit
    inx/iny/dex/dey, inc_value/dec_value

Shifts / rotates (value in, value out):
    asl, lsr, rol, ror

Control flow:
    branch, jsr, rts, rti, brk

Design Notes
============
- Helpers are generic over `CpuRegs`; anything touching memory also takes a
  `CpuBus`. The stack cursor lives on the bus, so TSX/TXS go through it.
- Decimal mode is a flag only; ADC/SBC are always binary.
- Zero and negative always come from the 8-bit result written back.
*/

use crate::bus::CpuBus;
use crate::bus::memory_map::BRK_VECTOR;
use crate::cpu::addressing::page_crossed;
use crate::cpu::cycles::branch_extra;
use crate::cpu::regs::CpuRegs;
use crate::cpu::status::StatusBits;

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

/// Push a word high byte first so it pops back low byte first.
#[inline]
pub(crate) fn push_word<B: CpuBus>(bus: &mut B, v: u16) {
    bus.push((v >> 8) as u8);
    bus.push((v & 0xFF) as u8);
}

#[inline]
pub(crate) fn pop_word<B: CpuBus>(bus: &mut B) -> u16 {
    let lo = bus.pop() as u16;
    let hi = bus.pop() as u16;
    (hi << 8) | lo
}

/// PHP: pushes the packed status as is (break bit clear).
#[inline]
pub(crate) fn php<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let p = cpu.status_byte();
    bus.push(p);
}

#[inline]
pub(crate) fn plp<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let p = bus.pop();
    cpu.set_status_byte(p);
}

#[inline]
pub(crate) fn pha<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let a = cpu.a();
    bus.push(a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let v = bus.pop();
    lda(cpu, v);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldx(cpu, v);
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.a();
    ldy(cpu, v);
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.x();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    let v = cpu.y();
    lda(cpu, v);
}

#[inline]
pub(crate) fn tsx<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &B) {
    ldx(cpu, bus.sp());
}

/// TXS is the one transfer that leaves the flags alone.
#[inline]
pub(crate) fn txs<C: CpuRegs, B: CpuBus>(cpu: &C, bus: &mut B) {
    bus.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// ALU
// ---------------------------------------------------------------------------

pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, m: u8) {
    let a = cpu.a();
    let carry_in = cpu.is_flag_set(StatusBits::CARRY) as u16;
    let sum = a as u16 + m as u16 + carry_in;
    let result = sum as u8;
    cpu.update_carry(sum > 0xFF);
    cpu.update_overflow((!(a ^ m) & (a ^ result) & 0x80) != 0);
    lda(cpu, result);
}

pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, m: u8) {
    let a = cpu.a();
    let borrow = !cpu.is_flag_set(StatusBits::CARRY) as i16;
    let diff = a as i16 - m as i16 - borrow;
    let result = diff as u8;
    cpu.update_carry(diff >= 0);
    cpu.update_overflow(((a ^ m) & (a ^ result) & 0x80) != 0);
    lda(cpu, result);
}

/// CMP / CPX / CPY: flags from `reg - m`, nothing written back.
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, m: u8) {
    let diff = reg as i16 - m as i16;
    cpu.update_carry(diff >= 0);
    cpu.update_zn(diff as u8);
}

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, m: u8) {
    let v = cpu.a() & m;
    lda(cpu, v);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, m: u8) {
    let v = cpu.a() | m;
    lda(cpu, v);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, m: u8) {
    let v = cpu.a() ^ m;
    lda(cpu, v);
}

pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, m: u8) {
    let a = cpu.a();
    cpu.assign_flag(StatusBits::ZERO, a & m == 0);
    cpu.assign_flag(StatusBits::NEGATIVE, m & 0x80 != 0);
    cpu.update_overflow(m & 0x40 != 0);
}

/// INC: the 16-bit intermediate wraps 0xFF to 0x00.
#[inline]
pub(crate) fn inc_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = ((v as u16 + 1) & 0xFF) as u8;
    cpu.update_zn(r);
    r
}

/// DEC: the 16-bit intermediate wraps 0x00 to 0xFF.
#[inline]
pub(crate) fn dec_value<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = ((v as u16).wrapping_sub(1) & 0xFF) as u8;
    cpu.update_zn(r);
    r
}

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    let x = cpu.x();
    let v = inc_value(cpu, x);
    cpu.set_x(v);
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    let y = cpu.y();
    let v = inc_value(cpu, y);
    cpu.set_y(v);
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    let x = cpu.x();
    let v = dec_value(cpu, x);
    cpu.set_x(v);
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    let y = cpu.y();
    let v = dec_value(cpu, y);
    cpu.set_y(v);
}

// ---------------------------------------------------------------------------
// Shifts / Rotates
// ---------------------------------------------------------------------------

pub(crate) fn asl<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v << 1;
    cpu.update_carry(v & 0x80 != 0);
    cpu.update_zn(r);
    r
}

pub(crate) fn lsr<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let r = v >> 1;
    cpu.update_carry(v & 0x01 != 0);
    cpu.update_zn(r);
    r
}

pub(crate) fn rol<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = cpu.is_flag_set(StatusBits::CARRY) as u8;
    let r = (v << 1) | carry_in;
    cpu.update_carry(v & 0x80 != 0);
    cpu.update_zn(r);
    r
}

pub(crate) fn ror<C: CpuRegs>(cpu: &mut C, v: u8) -> u8 {
    let carry_in = (cpu.is_flag_set(StatusBits::CARRY) as u8) << 7;
    let r = (v >> 1) | carry_in;
    cpu.update_carry(v & 0x01 != 0);
    cpu.update_zn(r);
    r
}

// ---------------------------------------------------------------------------
// Control flow
// ---------------------------------------------------------------------------

/// Conditional relative branch. PC already points past the operand.
/// Returns the extra cycles (0, 1 or 2).
pub(crate) fn branch<C: CpuRegs>(cpu: &mut C, cond: bool, offset: i16) -> u8 {
    if !cond {
        return branch_extra(false, false);
    }
    let next = cpu.pc();
    let target = next.wrapping_add(offset as u16);
    cpu.set_pc(target);
    branch_extra(true, page_crossed(next, cpu.pc()))
}

/// JSR: push the address of the last operand byte, then jump.
pub(crate) fn jsr<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B, target: u16) {
    let ret = cpu.pc().wrapping_sub(1);
    push_word(bus, ret);
    cpu.set_pc(target);
}

pub(crate) fn rts<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let ret = pop_word(bus);
    cpu.set_pc(ret.wrapping_add(1));
}

pub(crate) fn rti<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    plp(cpu, bus);
    let pc = pop_word(bus);
    cpu.set_pc(pc);
}

/// BRK: skip the padding byte, push PC and status (break set), disable
/// interrupts and load the vector.
pub(crate) fn brk<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) {
    let ret = cpu.pc().wrapping_add(1);
    push_word(bus, ret);
    bus.push(cpu.status_byte() | StatusBits::BREAK.bits());
    cpu.assign_flag(StatusBits::INTERRUPT, true);
    let vector = bus.read_word(BRK_VECTOR);
    cpu.set_pc(vector);
}
