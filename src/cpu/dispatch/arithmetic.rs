/*!
arithmetic.rs - ADC / SBC and register increment / decrement

ADC and SBC read their operand through any of the eight ALU addressing modes;
INX/INY/DEX/DEY are implied. Decimal mode is not modelled.
*/

use crate::bus::CpuBus;
use crate::cpu::addressing::Operand;
use crate::cpu::dispatch::read_operand;
use crate::cpu::execute::{adc, dex, dey, inx, iny, sbc};
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
        Operation::Adc => {
            let m = read_operand(operand, cpu, bus);
            adc(cpu, m);
        }
        Operation::Sbc => {
            let m = read_operand(operand, cpu, bus);
            sbc(cpu, m);
        }
        Operation::Inx => inx(cpu),
        Operation::Iny => iny(cpu),
        Operation::Dex => dex(cpu),
        Operation::Dey => dey(cpu),
        _ => return false,
    }
    true
}
