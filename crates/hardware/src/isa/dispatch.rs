//! Opcode Dispatch Table.
//!
//! Every supported instruction belongs to exactly one [`Family`], selected by
//! the opcode alone. Within a family the function codes pick a concrete
//! [`Op`]. Resolution is a pair of exhaustive matches; any combination that
//! is not listed yields `None` and is handled by the CPU's
//! unknown-instruction policy.

use std::fmt;

use crate::isa::instruction::Decoded;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Instruction-format family, keyed by opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Register-register arithmetic (`OP_REG`); resolved by funct3 then funct7.
    RegReg,
    /// Register-immediate, load, and jump-register (`OP_IMM`, `OP_LOAD`,
    /// `OP_JALR`); resolved by funct3.
    RegImm,
    /// Store (`OP_STORE`); resolved by funct3.
    Store,
    /// Conditional branch (`OP_BRANCH`); resolved by funct3.
    Branch,
    /// Unconditional jump (`OP_JAL`); resolved by opcode alone.
    Jump,
}

impl Family {
    /// Classifies an opcode, or returns `None` if no family claims it.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_REG => Some(Self::RegReg),
            opcodes::OP_LOAD | opcodes::OP_IMM | opcodes::OP_JALR => Some(Self::RegImm),
            opcodes::OP_STORE => Some(Self::Store),
            opcodes::OP_BRANCH => Some(Self::Branch),
            opcodes::OP_JAL => Some(Self::Jump),
            _ => None,
        }
    }
}

/// The closed set of operations the simulator executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// `rd = rs1 + rs2`
    Add,
    /// `rd = rs1 - rs2`
    Sub,
    /// `rd = rs1 << rs2`
    Sll,
    /// `rd = (rs1 < rs2)` signed
    Slt,
    /// `rd = (rs1 < rs2)` unsigned
    Sltu,
    /// `rd = rs1 ^ rs2`
    Xor,
    /// `rd = rs1 >> rs2` logical
    Srl,
    /// `rd = rs1 >> rs2` arithmetic
    Sra,
    /// `rd = rs1 | rs2`
    Or,
    /// `rd = rs1 & rs2`
    And,
    /// `rd = mem[(rs1 + imm) / 4]`
    Lw,
    /// `rd = rs1 + imm`
    Addi,
    /// `rd = pc + 4; pc = (rs1 + imm) & !1`
    Jalr,
    /// `mem[(rs1 + imm) / 4] = rs2`
    Sw,
    /// `if rs1 == rs2 { pc += imm }`
    Beq,
    /// `if rs1 != rs2 { pc += imm }`
    Bne,
    /// `rd = pc + 4; pc += imm`
    Jal,
}

impl Op {
    /// Every operation, in dispatch-table order.
    pub const ALL: [Self; 17] = [
        Self::Add,
        Self::Sub,
        Self::Sll,
        Self::Slt,
        Self::Sltu,
        Self::Xor,
        Self::Srl,
        Self::Sra,
        Self::Or,
        Self::And,
        Self::Lw,
        Self::Addi,
        Self::Jalr,
        Self::Sw,
        Self::Beq,
        Self::Bne,
        Self::Jal,
    ];

    /// The family this operation belongs to.
    pub const fn family(self) -> Family {
        match self {
            Self::Add
            | Self::Sub
            | Self::Sll
            | Self::Slt
            | Self::Sltu
            | Self::Xor
            | Self::Srl
            | Self::Sra
            | Self::Or
            | Self::And => Family::RegReg,
            Self::Lw | Self::Addi | Self::Jalr => Family::RegImm,
            Self::Sw => Family::Store,
            Self::Beq | Self::Bne => Family::Branch,
            Self::Jal => Family::Jump,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Lw => "lw",
            Self::Addi => "addi",
            Self::Jalr => "jalr",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Jal => "jal",
        }
    }

    /// Whether the operation writes `rd`.
    pub const fn writes_rd(self) -> bool {
        !matches!(self, Self::Sw | Self::Beq | Self::Bne)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Resolves decoded fields to an operation.
///
/// Returns `None` when the opcode, funct3, or funct7 has no table entry.
pub const fn resolve(d: &Decoded) -> Option<Op> {
    let Some(family) = Family::from_opcode(d.opcode) else {
        return None;
    };

    match family {
        Family::RegReg => match (d.funct3, d.funct7) {
            (funct3::ADD_SUB, funct7::DEFAULT) => Some(Op::Add),
            (funct3::ADD_SUB, funct7::SUB) => Some(Op::Sub),
            (funct3::SLL, funct7::DEFAULT) => Some(Op::Sll),
            (funct3::SLT, funct7::DEFAULT) => Some(Op::Slt),
            (funct3::SLTU, funct7::DEFAULT) => Some(Op::Sltu),
            (funct3::XOR, funct7::DEFAULT) => Some(Op::Xor),
            (funct3::SRL_SRA, funct7::DEFAULT) => Some(Op::Srl),
            (funct3::SRL_SRA, funct7::SRA) => Some(Op::Sra),
            (funct3::OR, funct7::DEFAULT) => Some(Op::Or),
            (funct3::AND, funct7::DEFAULT) => Some(Op::And),
            _ => None,
        },
        Family::RegImm => match (d.opcode, d.funct3) {
            (opcodes::OP_LOAD, funct3::LW) => Some(Op::Lw),
            (opcodes::OP_IMM, funct3::ADDI) => Some(Op::Addi),
            (opcodes::OP_JALR, funct3::JALR) => Some(Op::Jalr),
            _ => None,
        },
        Family::Store => match d.funct3 {
            funct3::SW => Some(Op::Sw),
            _ => None,
        },
        Family::Branch => match d.funct3 {
            funct3::BEQ => Some(Op::Beq),
            funct3::BNE => Some(Op::Bne),
            _ => None,
        },
        Family::Jump => Some(Op::Jal),
    }
}
