/*!
load_store.rs - Load / store / register-transfer family handler

Overview
========
Loads (set Z/N):        LDA, LDX, LDY
Stores (no flags):      STA, STX, STY
Transfers:              TAX, TAY, TXA, TYA, TSX (set Z/N), TXS (no flags)

Page-cross penalties for indexed loads are already folded into `*cycles` by
the dispatcher from the descriptor's modifier; stores carry a fixed count.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::dispatch::{read_operand, write_operand};
use crate::cpu::execute::{lda, ldx, ldy, tax, tay, tsx, txa, txs, tya};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Operation;

/// Returns false if `op` is not a load, store or transfer.
pub(super) fn handle<C: CpuRegs, B: CpuBus>(
    op: Operation,
    operand: Operand,
    cpu: &mut C,
    bus: &mut B,
    _cycles: &mut u8,
) -> bool {
    match op {
        Operation::Lda => {
            let v = read_operand(operand, cpu, bus);
            lda(cpu, v);
        }
        Operation::Ldx => {
            let v = read_operand(operand, cpu, bus);
            ldx(cpu, v);
        }
        Operation::Ldy => {
            let v = read_operand(operand, cpu, bus);
            ldy(cpu, v);
        }
        Operation::Sta => {
            let v = cpu.a();
            write_operand(operand, cpu, bus, v);
        }
        Operation::Stx => {
            let v = cpu.x();
            write_operand(operand, cpu, bus, v);
        }
        Operation::Sty => {
            let v = cpu.y();
            write_operand(operand, cpu, bus, v);
        }
        Operation::Tax => tax(cpu),
        Operation::Tay => tay(cpu),
        Operation::Txa => txa(cpu),
        Operation::Tya => tya(cpu),
        Operation::Tsx => tsx(cpu, bus),
        Operation::Txs => txs(cpu, bus),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::dispatch::step;
    use crate::test_utils::setup_cpu;

    #[test]
    fn indexed_load_page_cross() {
        // LDA $10F0,Y with Y=0x20 -> $1110
        let (mut cpu, mut bus) = setup_cpu(&[0xB9, 0xF0, 0x10]);
        bus.write(0x1110, 0x80);
        cpu.y = 0x20;
        assert_eq!(step(&mut cpu, &mut bus), 5);
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.status.negative);
    }

    #[test]
    fn store_never_pays_page_cross() {
        // STA $00FF,X with X=1
        let (mut cpu, mut bus) = setup_cpu(&[0x9D, 0xFF, 0x00]);
        cpu.a = 0x42;
        cpu.x = 1;
        assert_eq!(step(&mut cpu, &mut bus), 5);
        assert_eq!(bus.read(0x0100), 0x42);
    }

    #[test]
    fn stores_leave_flags_alone() {
        let (mut cpu, mut bus) = setup_cpu(&[0x86, 0x80, 0x84, 0x81]); // STX $80; STY $81
        cpu.x = 0;
        cpu.y = 0x90;
        let before = cpu.status;
        step(&mut cpu, &mut bus);
        step(&mut cpu, &mut bus);
        assert_eq!(bus.read(0x80), 0);
        assert_eq!(bus.read(0x81), 0x90);
        assert_eq!(cpu.status, before);
    }

    #[test]
    fn ldx_zero_page_y_wraps() {
        // LDX $F0,Y with Y=0x20 -> $0010
        let (mut cpu, mut bus) = setup_cpu(&[0xB6, 0xF0]);
        bus.write(0x0010, 0x00);
        cpu.y = 0x20;
        cpu.x = 5;
        assert_eq!(step(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.x, 0);
        assert!(cpu.status.zero);
    }

    #[test]
    fn transfers() {
        // TAX; TXS; TSX; TYA
        let (mut cpu, mut bus) = setup_cpu(&[0xAA, 0x9A, 0xBA, 0x98]);
        cpu.a = 0x7F;
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.x, 0x7F);
        step(&mut cpu, &mut bus);
        assert_eq!(bus.sp(), 0x7F);
        cpu.x = 0;
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.x, 0x7F);
        step(&mut cpu, &mut bus);
        assert_eq!(cpu.a, 0);
        assert!(cpu.status.zero);
    }
}
