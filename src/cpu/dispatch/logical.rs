/*!
logical.rs - AND / ORA / EOR family handler

All three combine the accumulator with the operand and set Z/N from the
result. Indexed reads pay the page-cross penalty through the descriptor.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::dispatch::read_operand;
use crate::cpu::execute::{and, eor, ora};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;

pub(super) fn handle<C: CpuRegs, B: CpuBus>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u8,
) -> bool {
    let f: fn(&mut C, u8) = match op {
        Operation::And => and,
        Operation::Ora => ora,
        Operation::Eor => eor,
        _ => return false,
    };
    let m = read_operand(operand, cpu, bus);
    f(cpu, m);
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::dispatch::step;
    use crate::test_utils::setup_cpu;

    #[test]
    fn and_ora_eor() {
        // AND #$0F; ORA #$80; EOR #$8F
        let (mut cpu, mut bus) = setup_cpu(&[0x29, 0x0F, 0x09, 0x80, 0x49, 0x8F]);
        cpu.a = 0x3C;
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0x0C);
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0x8C);
        assert!(cpu.status.negative);
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0x03);
        assert!(!cpu.status.negative && !cpu.status.zero);
    }

    #[test]
    fn indirect_x_operand() {
        // AND ($7E,X) with X=2 -> pointer at $80 -> $0095
        let (mut cpu, mut bus) = setup_cpu(&[0x21, 0x7E]);
        bus.write(0x80, 0x95);
        bus.write(0x81, 0x00);
        bus.write(0x95, 0xF0);
        cpu.a = 0x0F;
        cpu.x = 2;
        assert_eq!(step(&mut cpu, &mut bus), 6);
        assert_eq!(cpu.a, 0);
        assert!(cpu.status.zero);
    }
}
