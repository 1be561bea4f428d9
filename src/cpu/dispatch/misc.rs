/*!
misc.rs - Stack push / pull, flag set / clear and NOP

Push:   PHA, PHP (packed status, break bit clear)
Pull:   PLA (Z/N), PLP (all six flags; break bit ignored)
Flags:  CLC SEC CLD SED CLI SEI CLV
NOP:    no effect beyond its cycles
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{pha, php, pla, plp};
use crate::cpu::regs::CpuRegs;
use crate::cpu::status::StatusBits;
use crate::cpu::table::Operation;

pub(super) fn handle<C: CpuRegs, B: CpuBus>(
    op: Operation,
    _operand: Operand,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u8,
) -> bool {
    match op {
        Operation::Pha => pha(cpu, bus),
        Operation::Php => php(cpu, bus),
        Operation::Pla => pla(cpu, bus),
        Operation::Plp => plp(cpu, bus),
        Operation::Clc => cpu.assign_flag(StatusBits::CARRY, false),
        Operation::Sec => cpu.assign_flag(StatusBits::CARRY, true),
        Operation::Cld => cpu.assign_flag(StatusBits::DECIMAL, false),
        Operation::Sed => cpu.assign_flag(StatusBits::DECIMAL, true),
        Operation::Cli => cpu.assign_flag(StatusBits::INTERRUPT, false),
        Operation::Sei => cpu.assign_flag(StatusBits::INTERRUPT, true),
        Operation::Clv => cpu.assign_flag(StatusBits::OVERFLOW, false),
        Operation::Nop => {}
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::dispatch::step;
    use crate::test_utils::setup_cpu;

    #[test]
    fn pha_pla_round_trip() {
        // PHA ; LDA #$00 ; PLA
        let (mut cpu, mut bus) = setup_cpu(&[0x48, 0xA9, 0x00, 0x68]);
        cpu.a = 0x99;
        assert_eq!(step(&mut cpu, &mut bus), 3);
        assert_eq!(bus.read(0x00FF), 0x99);
        step(&mut cpu, &mut bus);
        assert_eq!(step(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.a, 0x99);
        assert!(cpu.status.negative);
        assert_eq!(bus.sp(), 0xFF);
    }

    #[test]
    fn flag_instructions() {
        // SEC ; SED ; SEI ; CLC ; CLD ; CLI
        let (mut cpu, mut bus) = setup_cpu(&[0x38, 0xF8, 0x78, 0x18, 0xD8, 0x58]);
        for _ in 0..3 {
            assert_eq!(step(&mut cpu, &mut bus), 2);
        }
        assert_eq!(cpu.status.pack(), 0x0D);
        for _ in 0..3 {
            step(&mut cpu, &mut bus);
        }
        assert_eq!(cpu.status.pack(), 0x00);
    }

    #[test]
    fn clv_and_nop() {
        let (mut cpu, mut bus) = setup_cpu(&[0xB8, 0xEA]);
        cpu.status.overflow = true;
        step(&mut cpu, &mut bus);
        assert!(!cpu.status.overflow);
        let before = cpu;
        assert_eq!(step(&mut cpu, &mut bus), 2);
        assert_eq!(cpu.pc, before.pc + 1);
        assert_eq!(cpu.status, before.status);
    }

    #[test]
    fn php_plp_preserve_decimal() {
        // SED ; PHP ; CLD ; PLP
        let (mut cpu, mut bus) = setup_cpu(&[0xF8, 0x08, 0xD8, 0x28]);
        step(&mut cpu, &mut bus);
        step(&mut cpu, &mut bus);
        assert_eq!(bus.read(0x00FF), 0x08);
        step(&mut cpu, &mut bus);
        assert!(!cpu.status.decimal);
        step(&mut cpu, &mut bus);
        assert!(cpu.status.decimal);
    }
}
