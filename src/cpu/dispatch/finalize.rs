/*!
finalize.rs - Instruction finalization and unknown-opcode handling.

Overview
========
- `finish`: emits the per-instruction trace line and returns the total cycle
  count the dispatcher computed.
- `unknown_opcode`: soft failure for bytes with no descriptor. The opcode
  byte stays consumed, nothing else changes, and the step costs one cycle so
  the next tick fetches again.

Logging
=======
Unknown opcodes are reported at `warn`; every executed instruction at
`trace` (enable with `RUST_LOG=arvcs=trace`).
*/

use crate::cpu::table::Instruction;

/// Cycles charged for an opcode byte with no descriptor.
pub(crate) const UNKNOWN_OPCODE_CYCLES: u8 = 1;

pub(crate) fn finish(opcode: u8, instr: &Instruction, at: u16, handled: bool, cycles: u8) -> u8 {
    if !handled {
        log::warn!(
            "{} at {:#06x}: no handler for {:?} addressing",
            instr.mnemonic(),
            at,
            instr.mode
        );
    }
    log::trace!(
        "{:#06x}  {:02X}  {} {:?} ({} cycles)",
        at,
        opcode,
        instr.mnemonic(),
        instr.mode,
        cycles
    );
    cycles
}

pub(crate) fn unknown_opcode(opcode: u8, at: u16) -> u8 {
    log::warn!("unknown opcode {opcode:#04x} at {at:#06x}; skipped");
    UNKNOWN_OPCODE_CYCLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::table::decode;

    #[test]
    fn unknown_costs_one_cycle() {
        assert_eq!(unknown_opcode(0xFF, 0x1000), 1);
    }

    #[test]
    fn finish_passes_cycles_through() {
        let nop = decode(0xEA).unwrap();
        assert_eq!(finish(0xEA, nop, 0x1000, true, 2), 2);
    }
}
