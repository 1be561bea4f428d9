/*!
control_flow.rs - JMP / JSR / RTS / RTI / BRK family handler

Overview
========
- JMP abs / JMP (ind): PC <- resolved address. The indirect form reproduces
  the page-wrap quirk of the pointer read (handled in `addressing`).
- JSR: push (PC - 1) high byte first, then jump.
- RTS: pull PC, then +1.
- RTI: pull status, then PC (no +1).
- BRK: push PC + 1 and status with break set, set I, jump through the
  vector at $FFFE (masked into the address space).

No flag effects except BRK (I) and RTI (all flags).
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{brk, jsr, rti, rts};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;

pub(super) fn handle<C: CpuRegs, B: CpuBus>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u8,
) -> bool {
    match op {
        Operation::Jmp => {
            let Some(target) = operand.address() else {
                return false;
            };
            cpu.set_pc(target);
        }
        Operation::Jsr => {
            let Some(target) = operand.address() else {
                return false;
            };
            jsr(cpu, bus, target);
        }
        Operation::Rts => rts(cpu, bus),
        Operation::Rti => rti(cpu, bus),
        Operation::Brk => brk(cpu, bus),
        _ => return false,
    }
    true
}
