/*!
branches.rs - Relative branch handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Cycle Rules
===========
Base cost: 2 cycles (from the descriptor).
Taken: +1 cycle.
Taken and the target is on a different page than the next instruction: +2.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::branch;
use crate::cpu::regs::CpuRegs;
use crate::cpu::status::StatusBits;
use crate::cpu::table::Operation;

pub(super) fn handle<C: CpuRegs, B: CpuBus>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    _bus: &mut B,
    cycles: &mut u8,
) -> bool {
    let cond = match op {
        Operation::Bpl => !cpu.is_flag_set(StatusBits::NEGATIVE),
        Operation::Bmi => cpu.is_flag_set(StatusBits::NEGATIVE),
        Operation::Bvc => !cpu.is_flag_set(StatusBits::OVERFLOW),
        Operation::Bvs => cpu.is_flag_set(StatusBits::OVERFLOW),
        Operation::Bcc => !cpu.is_flag_set(StatusBits::CARRY),
        Operation::Bcs => cpu.is_flag_set(StatusBits::CARRY),
        Operation::Bne => !cpu.is_flag_set(StatusBits::ZERO),
        Operation::Beq => cpu.is_flag_set(StatusBits::ZERO),
        _ => return false,
    };
    let Operand::Relative(offset) = operand else {
        return false;
    };
    *cycles += branch(cpu, cond, offset);
    true
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::dispatch::step;
    use crate::cpu::state::CpuState;
    use crate::test_utils::setup_cpu;

    #[test]
    fn dey_bne_loop() {
        // LDY #2 ; loop: DEY ; BNE loop
        let (mut cpu, mut bus) = setup_cpu(&[0xA0, 0x02, 0x88, 0xD0, 0xFD]);
        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert_eq!(step(&mut cpu, &mut bus), 2); // DEY -> 1
        assert_eq!(step(&mut cpu, &mut bus), 3); // taken
        assert_eq!(cpu.pc, 0x1002);
        assert_eq!(step(&mut cpu, &mut bus), 2); // DEY -> 0
        assert_eq!(step(&mut cpu, &mut bus), 2); // not taken
        assert_eq!(cpu.pc, 0x1005);
        assert_eq!(cpu.y, 0);
    }

    #[test]
    fn taken_branch_across_page_costs_four() {
        let mut bus = Bus::new();
        // BEQ +4 at $10FC; next instruction at $10FE, target $1102.
        bus.load(0x10FC, &[0xF0, 0x04]);
        let mut cpu = CpuState::new();
        cpu.pc = 0x10FC;
        cpu.status.zero = true;
        assert_eq!(step(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.pc, 0x1102);
    }

    #[test]
    fn backward_branch_across_page() {
        let mut bus = Bus::new();
        // BCC -4 at $1100; next at $1102, target $10FE.
        bus.load(0x1100, &[0x90, 0xFC]);
        let mut cpu = CpuState::new();
        cpu.pc = 0x1100;
        assert_eq!(step(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.pc, 0x10FE);
    }

    #[test]
    fn each_condition() {
        // (opcode, flag setter, expect taken)
        let cases: [(u8, fn(&mut CpuState), bool); 8] = [
            (0x10, |c| c.status.negative = false, true),
            (0x30, |c| c.status.negative = false, false),
            (0x50, |c| c.status.overflow = true, false),
            (0x70, |c| c.status.overflow = true, true),
            (0x90, |c| c.status.carry = true, false),
            (0xB0, |c| c.status.carry = true, true),
            (0xD0, |c| c.status.zero = true, false),
            (0xF0, |c| c.status.zero = true, true),
        ];
        for (opcode, set, taken) in cases {
            let (mut cpu, mut bus) = setup_cpu(&[opcode, 0x02]);
            set(&mut cpu);
            step(&mut cpu, &mut bus);
            let expected = if taken { 0x1004 } else { 0x1002 };
            assert_eq!(cpu.pc, expected, "opcode {opcode:#04x}");
        }
    }
}
