/*!
compare.rs - CMP / CPX / CPY / BIT family handler

Flag-only operations: nothing is written back to a register or to memory.

CMP/CPX/CPY: C = reg >= M, Z = reg == M, N = bit 7 of (reg - M).
BIT:         Z = (A & M) == 0, N = M bit 7, V = M bit 6.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::dispatch::read_operand;
use crate::cpu::execute::{bit, compare};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;

pub(super) fn handle<C: CpuRegs, B: CpuBus>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u8,
) -> bool {
    let reg = match op {
        Operation::Cmp => cpu.a(),
        Operation::Cpx => cpu.x(),
        Operation::Cpy => cpu.y(),
        Operation::Bit => {
            let m = read_operand(operand, cpu, bus);
            bit(cpu, m);
            return true;
        }
        _ => return false,
    };
    let m = read_operand(operand, cpu, bus);
    compare(cpu, reg, m);
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::dispatch::step;
    use crate::test_utils::setup_cpu;

    #[test]
    fn cmp_equal_less_greater() {
        // CMP #$40 ; CMP #$41 ; CMP #$3F
        let (mut cpu, mut bus) = setup_cpu(&[0xC9, 0x40, 0xC9, 0x41, 0xC9, 0x3F]);
        cpu.a = 0x40;
        step(&mut cpu, &mut bus);
        assert!(cpu.status.zero && cpu.status.carry);
        step(&mut cpu, &mut bus);
        assert!(!cpu.status.zero && !cpu.status.carry && cpu.status.negative);
        step(&mut cpu, &mut bus);
        assert!(!cpu.status.zero && cpu.status.carry && !cpu.status.negative);
        assert_eq!(cpu.a, 0x40);
    }

    #[test]
    fn cpx_cpy_memory() {
        // CPX $80 ; CPY $0081
        let (mut cpu, mut bus) = setup_cpu(&[0xE4, 0x80, 0xCC, 0x81, 0x00]);
        bus.write(0x80, 0x10);
        bus.write(0x81, 0x20);
        cpu.x = 0x10;
        cpu.y = 0x10;
        assert_eq!(step(&mut cpu, &mut bus), 3);
        assert!(cpu.status.zero);
        assert_eq!(step(&mut cpu, &mut bus), 4);
        assert!(!cpu.status.carry);
    }

    #[test]
    fn bit_zero_page() {
        let (mut cpu, mut bus) = setup_cpu(&[0x24, 0x90]);
        bus.write(0x90, 0x40);
        cpu.a = 0x01;
        step(&mut cpu, &mut bus);
        assert!(cpu.status.zero && cpu.status.overflow && !cpu.status.negative);
        assert_eq!(cpu.a, 0x01);
    }
}
