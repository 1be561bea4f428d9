/*!
dispatch - Orchestrator for a single 6502 instruction (fetch / decode / execute)

Overview
========
Executes exactly one instruction and reports its total cycle count:
1. Fetch the opcode at PC and advance PC by one.
2. Decode through the static descriptor table (`cpu::table`). Opcodes with
   no descriptor are handed to `finalize::unknown_opcode` (soft failure).
3. Resolve the addressing mode into an `Operand` (consumes operand bytes).
4. Compute cycles from the descriptor (base + page-cross penalty).
5. Route by operation kind to the family handlers, which execute the
   semantics and may add branch cycles.

Family handlers
===============
Each family exposes `handle(op, operand, cpu, bus, cycles) -> bool` and
returns false for operations it does not own. `Assign` operations are tried
against several families in turn, the others map to a single family:

```text
    Assign  -> load_store || arithmetic || logical || rmw
    Compare -> compare
    Branch  -> branches
    Jump    -> control_flow
    Push / Pop / Flags -> misc
```

Cycle Accounting
================
The returned total includes the fetch cycle. Callers that model per-tick
timing (`core::Cpu::tick_once`) store `total - 1` as the remaining count.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod finalize;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use crate::bus::CpuBus;
use crate::cpu::addressing::{Operand, fetch_byte, resolve};
use crate::cpu::cycles::instruction_cycles;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::{OpKind, decode};

/// Execute one instruction and return the cycles it consumed.
pub(crate) fn step<C: CpuRegs, B: CpuBus>(cpu: &mut C, bus: &mut B) -> u8 {
    let at = cpu.pc();
    let opcode = fetch_byte(cpu, bus);

    let Some(instr) = decode(opcode) else {
        return finalize::unknown_opcode(opcode, at);
    };

    let operand = resolve(instr.mode, cpu, bus);
    let mut cycles = instruction_cycles(instr, operand.crossed());
    let op = instr.op;

    let handled = match op.kind() {
        OpKind::Assign => {
            load_store::handle(op, operand, cpu, bus, &mut cycles)
                || arithmetic::handle(op, operand, cpu, bus, &mut cycles)
                || logical::handle(op, operand, cpu, bus, &mut cycles)
                || rmw::handle(op, operand, cpu, bus, &mut cycles)
        }
        OpKind::Compare => compare::handle(op, operand, cpu, bus, &mut cycles),
        OpKind::Branch => branches::handle(op, operand, cpu, bus, &mut cycles),
        OpKind::Jump => control_flow::handle(op, operand, cpu, bus, &mut cycles),
        OpKind::Push | OpKind::Pop | OpKind::Flags => {
            misc::handle(op, operand, cpu, bus, &mut cycles)
        }
    };

    finalize::finish(opcode, instr, at, handled, cycles)
}

// ---------------------------------------------------------------------------
// Operand access shared by the family handlers
// ---------------------------------------------------------------------------

/// Value an operand designates: the immediate byte, the accumulator, or the
/// byte at its effective address.
#[inline]
pub(super) fn read_operand<C: CpuRegs, B: CpuBus>(operand: Operand, cpu: &C, bus: &mut B) -> u8 {
    match operand {
        Operand::Immediate(v) => v,
        Operand::Accumulator => cpu.a(),
        Operand::Memory { addr, .. } => bus.read(addr),
        Operand::Implied | Operand::Relative(_) => 0,
    }
}

/// Store `value` where the operand points (accumulator or memory).
#[inline]
pub(super) fn write_operand<C: CpuRegs, B: CpuBus>(
    operand: Operand,
    cpu: &mut C,
    bus: &mut B,
    value: u8,
) {
    match operand {
        Operand::Accumulator => cpu.set_a(value),
        Operand::Memory { addr, .. } => bus.write(addr, value),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::Bus;
    use crate::cpu::state::CpuState;
    use crate::test_utils::setup_cpu;

    #[test]
    fn lda_immediate_is_two_cycles() {
        let (mut cpu, mut bus) = setup_cpu(&[0xA9, 0x09]);
        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert_eq!(cpu.a, 9);
        assert_eq!(cpu.pc, 0x1002);
    }

    #[test]
    fn adc_across_addressing_modes() {
        // A = 25, operand 10 -> 35 for every mode.
        let programs: [(&[u8], u8); 5] = [
            (&[0x69, 0x0A], 2),       // ADC #$0A
            (&[0x65, 0x90], 3),       // ADC $90
            (&[0x75, 0x8F], 4),       // ADC $8F,X
            (&[0x6D, 0x90, 0x00], 4), // ADC $0090
            (&[0x7D, 0x8F, 0x00], 4), // ADC $008F,X
        ];
        for (program, expected) in programs {
            let (mut cpu, mut bus) = setup_cpu(program);
            bus.write(0x0090, 10);
            cpu.a = 25;
            cpu.x = 1;
            assert_eq!(step(&mut cpu, &mut bus), expected, "{program:02x?}");
            assert_eq!(cpu.a, 35, "{program:02x?}");
        }
    }

    #[test]
    fn abs_x_page_cross_costs_one_more() {
        // ADC $00FF,X with X=1 reads $0100.
        let (mut cpu, mut bus) = setup_cpu(&[0x7D, 0xFF, 0x00]);
        bus.write(0x0100, 10);
        cpu.a = 25;
        cpu.x = 1;
        assert_eq!(step(&mut cpu, &mut bus), 5);
        assert_eq!(cpu.a, 35);
    }

    #[test]
    fn unknown_opcode_only_consumes_its_byte() {
        let (mut cpu, mut bus) = setup_cpu(&[0x02, 0xEA]);
        cpu.a = 7;
        let before = cpu;
        assert_eq!(step(&mut cpu, &mut bus), 1);
        assert_eq!(cpu.pc, 0x1001);
        assert_eq!(CpuState { pc: before.pc, ..cpu }, before);
    }

    #[test]
    fn raw_bus_can_drive_the_core() {
        let mut bus = Bus::new();
        bus.load(0x1000, &[0xE8]); // INX
        let mut cpu = CpuState::new();
        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert_eq!(cpu.x, 1);
    }
}
