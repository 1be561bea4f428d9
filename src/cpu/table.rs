/*!
table.rs - Static instruction descriptor table (256 entries).

Purpose
=======
Maps every opcode byte to an `Instruction` descriptor: the operation, the
addressing mode, the base cycle count and the cycle modifier. The dispatcher
consumes this as plain data; there is no per-opcode code.

Design
------
- Table: `[Option<Instruction>; 256]`; `None` marks an opcode outside the
  documented instruction set (151 documented opcodes are present).
- Each `Operation` declares its operation kind (which generic handler family
  executes it) and the set of status flags it may modify.
- `validate()` checks the table for malformed entries. It runs once when a
  console is constructed, before any tick.
*/

use thiserror::Error;

use crate::cpu::addressing::AddressingMode;
use crate::cpu::status::StatusBits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

/// Generic execution family an operation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Computes a value and writes it to a register or memory.
    Assign,
    /// Updates flags only (CMP/CPX/CPY/BIT).
    Compare,
    Branch,
    /// Sets the program counter (JMP/JSR/RTS/RTI/BRK).
    Jump,
    Push,
    Pop,
    /// Flag set/clear and NOP.
    Flags,
}

impl Operation {
    pub const fn mnemonic(self) -> &'static str {
        use Operation::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }

    pub const fn kind(self) -> OpKind {
        use Operation::*;
        match self {
            Cmp | Cpx | Cpy | Bit => OpKind::Compare,
            Bcc | Bcs | Beq | Bmi | Bne | Bpl | Bvc | Bvs => OpKind::Branch,
            Jmp | Jsr | Rts | Rti | Brk => OpKind::Jump,
            Pha | Php => OpKind::Push,
            Pla | Plp => OpKind::Pop,
            Clc | Cld | Cli | Clv | Sec | Sed | Sei | Nop => OpKind::Flags,
            _ => OpKind::Assign,
        }
    }

    /// Status flags this operation may modify.
    pub const fn affected_flags(self) -> StatusBits {
        use Operation::*;
        const NZ: StatusBits = StatusBits::NEGATIVE.union(StatusBits::ZERO);
        const NZC: StatusBits = NZ.union(StatusBits::CARRY);
        match self {
            Adc | Sbc => NZC.union(StatusBits::OVERFLOW),
            Asl | Lsr | Rol | Ror | Cmp | Cpx | Cpy => NZC,
            Bit => NZ.union(StatusBits::OVERFLOW),
            And | Ora | Eor | Lda | Ldx | Ldy | Tax | Tay | Tsx | Txa | Tya | Inc | Inx | Iny
            | Dec | Dex | Dey | Pla => NZ,
            Clc | Sec => StatusBits::CARRY,
            Cld | Sed => StatusBits::DECIMAL,
            Cli | Sei | Brk => StatusBits::INTERRUPT,
            Clv => StatusBits::OVERFLOW,
            Plp | Rti => StatusBits::FLAGS,
            _ => StatusBits::empty(),
        }
    }
}

/// Extra-cycle rule attached to an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleModifier {
    Fixed,
    /// +1 when the indexed effective address crosses a page.
    PageCrossing,
    /// +1 when taken, +1 more when the target is on another page.
    BranchTaken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub op: Operation,
    pub mode: AddressingMode,
    pub cycles: u8,
    pub modifier: CycleModifier,
}

impl Instruction {
    pub const fn mnemonic(&self) -> &'static str {
        self.op.mnemonic()
    }

    /// Total length in bytes, opcode included.
    pub const fn len(&self) -> u16 {
        1 + self.mode.operand_len()
    }

    pub const fn affected_flags(&self) -> StatusBits {
        self.op.affected_flags()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("opcode {opcode:#04x} ({mnemonic}) has a zero cycle count")]
    ZeroCycles { opcode: u8, mnemonic: &'static str },
    #[error("opcode {opcode:#04x} ({mnemonic}) uses a branch modifier with {mode:?} addressing")]
    BranchModifier {
        opcode: u8,
        mnemonic: &'static str,
        mode: AddressingMode,
    },
    #[error("opcode {opcode:#04x} ({mnemonic}) has a page-crossing modifier on {mode:?}, which cannot cross pages")]
    PageCrossModifier {
        opcode: u8,
        mnemonic: &'static str,
        mode: AddressingMode,
    },
    #[error("opcode {opcode:#04x} ({mnemonic}) is a branch without relative addressing")]
    BranchMode { opcode: u8, mnemonic: &'static str },
}

/// Look up the descriptor for `opcode`.
#[inline]
pub fn decode(opcode: u8) -> Option<&'static Instruction> {
    INSTRUCTIONS[opcode as usize].as_ref()
}

/// Validate the built-in table.
pub fn validate() -> Result<(), TableError> {
    validate_entries(&INSTRUCTIONS)
}

/// Validate an arbitrary descriptor table.
pub fn validate_entries(table: &[Option<Instruction>; 256]) -> Result<(), TableError> {
    for (opcode, entry) in table.iter().enumerate() {
        let Some(instr) = entry else { continue };
        let opcode = opcode as u8;
        let mnemonic = instr.mnemonic();
        if instr.cycles == 0 {
            return Err(TableError::ZeroCycles { opcode, mnemonic });
        }
        let relative = instr.mode == AddressingMode::Relative;
        match instr.modifier {
            CycleModifier::BranchTaken if !relative => {
                return Err(TableError::BranchModifier {
                    opcode,
                    mnemonic,
                    mode: instr.mode,
                });
            }
            CycleModifier::PageCrossing if !instr.mode.can_cross_page() => {
                return Err(TableError::PageCrossModifier {
                    opcode,
                    mnemonic,
                    mode: instr.mode,
                });
            }
            _ => {}
        }
        if instr.op.kind() == OpKind::Branch && !relative {
            return Err(TableError::BranchMode { opcode, mnemonic });
        }
    }
    Ok(())
}

const fn entry(
    op: Operation,
    mode: AddressingMode,
    cycles: u8,
    modifier: CycleModifier,
) -> Option<Instruction> {
    Some(Instruction {
        op,
        mode,
        cycles,
        modifier,
    })
}

// ------------------------------------------
// Descriptor Table (256 entries)
// ------------------------------------------

pub static INSTRUCTIONS: [Option<Instruction>; 256] = {
    use AddressingMode::*;
    use CycleModifier::*;
    use Operation::*;

    let mut t: [Option<Instruction>; 256] = [None; 256];

    // ADC
    t[0x69] = entry(Adc, Immediate, 2, Fixed);
    t[0x65] = entry(Adc, ZeroPage, 3, Fixed);
    t[0x75] = entry(Adc, ZeroPageX, 4, Fixed);
    t[0x6D] = entry(Adc, Absolute, 4, Fixed);
    t[0x7D] = entry(Adc, AbsoluteX, 4, PageCrossing);
    t[0x79] = entry(Adc, AbsoluteY, 4, PageCrossing);
    t[0x61] = entry(Adc, IndirectX, 6, Fixed);
    t[0x71] = entry(Adc, IndirectY, 5, PageCrossing);

    // AND
    t[0x29] = entry(And, Immediate, 2, Fixed);
    t[0x25] = entry(And, ZeroPage, 3, Fixed);
    t[0x35] = entry(And, ZeroPageX, 4, Fixed);
    t[0x2D] = entry(And, Absolute, 4, Fixed);
    t[0x3D] = entry(And, AbsoluteX, 4, PageCrossing);
    t[0x39] = entry(And, AbsoluteY, 4, PageCrossing);
    t[0x21] = entry(And, IndirectX, 6, Fixed);
    t[0x31] = entry(And, IndirectY, 5, PageCrossing);

    // ASL
    t[0x0A] = entry(Asl, Accumulator, 2, Fixed);
    t[0x06] = entry(Asl, ZeroPage, 5, Fixed);
    t[0x16] = entry(Asl, ZeroPageX, 6, Fixed);
    t[0x0E] = entry(Asl, Absolute, 6, Fixed);
    t[0x1E] = entry(Asl, AbsoluteX, 7, Fixed);

    // Branches
    t[0x90] = entry(Bcc, Relative, 2, BranchTaken);
    t[0xB0] = entry(Bcs, Relative, 2, BranchTaken);
    t[0xF0] = entry(Beq, Relative, 2, BranchTaken);
    t[0x30] = entry(Bmi, Relative, 2, BranchTaken);
    t[0xD0] = entry(Bne, Relative, 2, BranchTaken);
    t[0x10] = entry(Bpl, Relative, 2, BranchTaken);
    t[0x50] = entry(Bvc, Relative, 2, BranchTaken);
    t[0x70] = entry(Bvs, Relative, 2, BranchTaken);

    // BIT
    t[0x24] = entry(Bit, ZeroPage, 3, Fixed);
    t[0x2C] = entry(Bit, Absolute, 4, Fixed);

    // BRK
    t[0x00] = entry(Brk, Implied, 7, Fixed);

    // Flag clear
    t[0x18] = entry(Clc, Implied, 2, Fixed);
    t[0xD8] = entry(Cld, Implied, 2, Fixed);
    t[0x58] = entry(Cli, Implied, 2, Fixed);
    t[0xB8] = entry(Clv, Implied, 2, Fixed);

    // CMP
    t[0xC9] = entry(Cmp, Immediate, 2, Fixed);
    t[0xC5] = entry(Cmp, ZeroPage, 3, Fixed);
    t[0xD5] = entry(Cmp, ZeroPageX, 4, Fixed);
    t[0xCD] = entry(Cmp, Absolute, 4, Fixed);
    t[0xDD] = entry(Cmp, AbsoluteX, 4, PageCrossing);
    t[0xD9] = entry(Cmp, AbsoluteY, 4, PageCrossing);
    t[0xC1] = entry(Cmp, IndirectX, 6, Fixed);
    t[0xD1] = entry(Cmp, IndirectY, 5, PageCrossing);

    // CPX / CPY
    t[0xE0] = entry(Cpx, Immediate, 2, Fixed);
    t[0xE4] = entry(Cpx, ZeroPage, 3, Fixed);
    t[0xEC] = entry(Cpx, Absolute, 4, Fixed);
    t[0xC0] = entry(Cpy, Immediate, 2, Fixed);
    t[0xC4] = entry(Cpy, ZeroPage, 3, Fixed);
    t[0xCC] = entry(Cpy, Absolute, 4, Fixed);

    // DEC / DEX / DEY
    t[0xC6] = entry(Dec, ZeroPage, 5, Fixed);
    t[0xD6] = entry(Dec, ZeroPageX, 6, Fixed);
    t[0xCE] = entry(Dec, Absolute, 6, Fixed);
    t[0xDE] = entry(Dec, AbsoluteX, 7, Fixed);
    t[0xCA] = entry(Dex, Implied, 2, Fixed);
    t[0x88] = entry(Dey, Implied, 2, Fixed);

    // EOR
    t[0x49] = entry(Eor, Immediate, 2, Fixed);
    t[0x45] = entry(Eor, ZeroPage, 3, Fixed);
    t[0x55] = entry(Eor, ZeroPageX, 4, Fixed);
    t[0x4D] = entry(Eor, Absolute, 4, Fixed);
    t[0x5D] = entry(Eor, AbsoluteX, 4, PageCrossing);
    t[0x59] = entry(Eor, AbsoluteY, 4, PageCrossing);
    t[0x41] = entry(Eor, IndirectX, 6, Fixed);
    t[0x51] = entry(Eor, IndirectY, 5, PageCrossing);

    // INC / INX / INY
    t[0xE6] = entry(Inc, ZeroPage, 5, Fixed);
    t[0xF6] = entry(Inc, ZeroPageX, 6, Fixed);
    t[0xEE] = entry(Inc, Absolute, 6, Fixed);
    t[0xFE] = entry(Inc, AbsoluteX, 7, Fixed);
    t[0xE8] = entry(Inx, Implied, 2, Fixed);
    t[0xC8] = entry(Iny, Implied, 2, Fixed);

    // Jumps / subroutines / returns
    t[0x4C] = entry(Jmp, Absolute, 3, Fixed);
    t[0x6C] = entry(Jmp, Indirect, 5, Fixed);
    t[0x20] = entry(Jsr, Absolute, 6, Fixed);
    t[0x60] = entry(Rts, Implied, 6, Fixed);
    t[0x40] = entry(Rti, Implied, 6, Fixed);

    // LDA
    t[0xA9] = entry(Lda, Immediate, 2, Fixed);
    t[0xA5] = entry(Lda, ZeroPage, 3, Fixed);
    t[0xB5] = entry(Lda, ZeroPageX, 4, Fixed);
    t[0xAD] = entry(Lda, Absolute, 4, Fixed);
    t[0xBD] = entry(Lda, AbsoluteX, 4, PageCrossing);
    t[0xB9] = entry(Lda, AbsoluteY, 4, PageCrossing);
    t[0xA1] = entry(Lda, IndirectX, 6, Fixed);
    t[0xB1] = entry(Lda, IndirectY, 5, PageCrossing);

    // LDX
    t[0xA2] = entry(Ldx, Immediate, 2, Fixed);
    t[0xA6] = entry(Ldx, ZeroPage, 3, Fixed);
    t[0xB6] = entry(Ldx, ZeroPageY, 4, Fixed);
    t[0xAE] = entry(Ldx, Absolute, 4, Fixed);
    t[0xBE] = entry(Ldx, AbsoluteY, 4, PageCrossing);

    // LDY
    t[0xA0] = entry(Ldy, Immediate, 2, Fixed);
    t[0xA4] = entry(Ldy, ZeroPage, 3, Fixed);
    t[0xB4] = entry(Ldy, ZeroPageX, 4, Fixed);
    t[0xAC] = entry(Ldy, Absolute, 4, Fixed);
    t[0xBC] = entry(Ldy, AbsoluteX, 4, PageCrossing);

    // LSR
    t[0x4A] = entry(Lsr, Accumulator, 2, Fixed);
    t[0x46] = entry(Lsr, ZeroPage, 5, Fixed);
    t[0x56] = entry(Lsr, ZeroPageX, 6, Fixed);
    t[0x4E] = entry(Lsr, Absolute, 6, Fixed);
    t[0x5E] = entry(Lsr, AbsoluteX, 7, Fixed);

    // NOP
    t[0xEA] = entry(Nop, Implied, 2, Fixed);

    // ORA
    t[0x09] = entry(Ora, Immediate, 2, Fixed);
    t[0x05] = entry(Ora, ZeroPage, 3, Fixed);
    t[0x15] = entry(Ora, ZeroPageX, 4, Fixed);
    t[0x0D] = entry(Ora, Absolute, 4, Fixed);
    t[0x1D] = entry(Ora, AbsoluteX, 4, PageCrossing);
    t[0x19] = entry(Ora, AbsoluteY, 4, PageCrossing);
    t[0x01] = entry(Ora, IndirectX, 6, Fixed);
    t[0x11] = entry(Ora, IndirectY, 5, PageCrossing);

    // Stack
    t[0x48] = entry(Pha, Implied, 3, Fixed);
    t[0x08] = entry(Php, Implied, 3, Fixed);
    t[0x68] = entry(Pla, Implied, 4, Fixed);
    t[0x28] = entry(Plp, Implied, 4, Fixed);

    // ROL / ROR
    t[0x2A] = entry(Rol, Accumulator, 2, Fixed);
    t[0x26] = entry(Rol, ZeroPage, 5, Fixed);
    t[0x36] = entry(Rol, ZeroPageX, 6, Fixed);
    t[0x2E] = entry(Rol, Absolute, 6, Fixed);
    t[0x3E] = entry(Rol, AbsoluteX, 7, Fixed);
    t[0x6A] = entry(Ror, Accumulator, 2, Fixed);
    t[0x66] = entry(Ror, ZeroPage, 5, Fixed);
    t[0x76] = entry(Ror, ZeroPageX, 6, Fixed);
    t[0x6E] = entry(Ror, Absolute, 6, Fixed);
    t[0x7E] = entry(Ror, AbsoluteX, 7, Fixed);

    // SBC
    t[0xE9] = entry(Sbc, Immediate, 2, Fixed);
    t[0xE5] = entry(Sbc, ZeroPage, 3, Fixed);
    t[0xF5] = entry(Sbc, ZeroPageX, 4, Fixed);
    t[0xED] = entry(Sbc, Absolute, 4, Fixed);
    t[0xFD] = entry(Sbc, AbsoluteX, 4, PageCrossing);
    t[0xF9] = entry(Sbc, AbsoluteY, 4, PageCrossing);
    t[0xE1] = entry(Sbc, IndirectX, 6, Fixed);
    t[0xF1] = entry(Sbc, IndirectY, 5, PageCrossing);

    // Flag set
    t[0x38] = entry(Sec, Implied, 2, Fixed);
    t[0xF8] = entry(Sed, Implied, 2, Fixed);
    t[0x78] = entry(Sei, Implied, 2, Fixed);

    // Stores
    t[0x85] = entry(Sta, ZeroPage, 3, Fixed);
    t[0x95] = entry(Sta, ZeroPageX, 4, Fixed);
    t[0x8D] = entry(Sta, Absolute, 4, Fixed);
    t[0x9D] = entry(Sta, AbsoluteX, 5, Fixed);
    t[0x99] = entry(Sta, AbsoluteY, 5, Fixed);
    t[0x81] = entry(Sta, IndirectX, 6, Fixed);
    t[0x91] = entry(Sta, IndirectY, 6, Fixed);
    t[0x86] = entry(Stx, ZeroPage, 3, Fixed);
    t[0x96] = entry(Stx, ZeroPageY, 4, Fixed);
    t[0x8E] = entry(Stx, Absolute, 4, Fixed);
    t[0x84] = entry(Sty, ZeroPage, 3, Fixed);
    t[0x94] = entry(Sty, ZeroPageX, 4, Fixed);
    t[0x8C] = entry(Sty, Absolute, 4, Fixed);

    // Transfers
    t[0xAA] = entry(Tax, Implied, 2, Fixed);
    t[0xA8] = entry(Tay, Implied, 2, Fixed);
    t[0xBA] = entry(Tsx, Implied, 2, Fixed);
    t[0x8A] = entry(Txa, Implied, 2, Fixed);
    t[0x9A] = entry(Txs, Implied, 2, Fixed);
    t[0x98] = entry(Tya, Implied, 2, Fixed);

    t
};
