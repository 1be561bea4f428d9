/*!
regs.rs - CpuRegs trait: the register + flag interface the execution and
dispatch helpers are written against.

The trait deliberately excludes bus access, stack operations and fetches;
those take an explicit `&mut impl CpuBus` at the call site so a handler never
holds more borrows than it needs.

Helpers are generic (`fn op<C: CpuRegs>(cpu: &mut C)`), so everything is
statically dispatched.
*/

use crate::cpu::state::CpuState;
use crate::cpu::status::StatusBits;

pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn pc(&self) -> u16;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);

    /// Advance PC by `delta` (wrapping inside the address space).
    fn advance_pc(&mut self, delta: u16);

    #[inline]
    fn advance_pc_one(&mut self) {
        self.advance_pc(1);
    }

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    fn is_flag_set(&self, mask: StatusBits) -> bool;
    fn assign_flag(&mut self, mask: StatusBits, value: bool);

    /// Packed status byte (break bit clear).
    fn status_byte(&self) -> u8;
    /// Restore all flags from a packed status byte.
    fn set_status_byte(&mut self, v: u8);

    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(StatusBits::ZERO, result == 0);
        self.assign_flag(StatusBits::NEGATIVE, (result & 0x80) != 0);
    }

    #[inline]
    fn update_carry(&mut self, carry: bool) {
        self.assign_flag(StatusBits::CARRY, carry);
    }

    #[inline]
    fn update_overflow(&mut self, overflow: bool) {
        self.assign_flag(StatusBits::OVERFLOW, overflow);
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        CpuState::set_pc(self, v);
    }

    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        CpuState::advance_pc(self, delta);
    }

    #[inline]
    fn is_flag_set(&self, mask: StatusBits) -> bool {
        CpuState::is_flag_set(self, mask)
    }

    #[inline]
    fn assign_flag(&mut self, mask: StatusBits, value: bool) {
        CpuState::assign_flag(self, mask, value);
    }

    #[inline]
    fn status_byte(&self) -> u8 {
        self.status.pack()
    }

    #[inline]
    fn set_status_byte(&mut self, v: u8) {
        self.status.unpack(v);
    }
}
