/*!
cycles.rs - Cycle timing helpers for the 6502 CPU core.

Purpose
=======
Provides:
  - `instruction_cycles(instr, crossed)` : base cycles from the descriptor
                                           plus the page-cross penalty when the
                                           descriptor asks for it.
  - `branch_extra(taken, crossed)`       : 0 / 1 / 2 extra cycles for a
                                           relative branch.

Scope
=====
Pure arithmetic over descriptor data. The dispatcher owns the decision of
when an operand crossed a page and whether a branch was taken.
*/

use crate::cpu::table::{CycleModifier, Instruction};

/// Cycles for an executed instruction before any branch adjustment.
#[inline]
pub(crate) fn instruction_cycles(instr: &Instruction, crossed: bool) -> u8 {
    match instr.modifier {
        CycleModifier::PageCrossing if crossed => instr.cycles + 1,
        _ => instr.cycles,
    }
}

/// Extra cycles of a relative branch: +1 when taken, +1 more when the target
/// lies on a different page than the following instruction.
#[inline]
pub(crate) fn branch_extra(taken: bool, crossed: bool) -> u8 {
    match (taken, crossed) {
        (false, _) => 0,
        (true, false) => 1,
        (true, true) => 2,
    }
}
