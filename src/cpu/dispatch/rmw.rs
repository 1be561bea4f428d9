/*!
rmw.rs - Read-modify-write family handler (ASL / LSR / ROL / ROR / INC / DEC)

Overview
========
Shifts and rotates operate on the accumulator or on memory; INC/DEC on
memory only. Every form reads the operand, computes the new value (flags
updated by the helper) and writes it back to the same place.

Memory forms write through the bus, so a write-hook sees the final value
once. Cycle counts are fixed in the descriptor table (no page-cross
penalty for abs,X).
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::dispatch::{read_operand, write_operand};
use crate::cpu::execute::{asl, dec_value, inc_value, lsr, rol, ror};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;

pub(super) fn handle<C: CpuRegs, B: CpuBus>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u8,
) -> bool {
    let modify: fn(&mut C, u8) -> u8 = match op {
        Operation::Asl => asl,
        Operation::Lsr => lsr,
        Operation::Rol => rol,
        Operation::Ror => ror,
        Operation::Inc => inc_value,
        Operation::Dec => dec_value,
        _ => return false,
    };
    let v = read_operand(operand, cpu, bus);
    let r = modify(cpu, v);
    write_operand(operand, cpu, bus, r);
    true
}
