//! Single-Cycle Execution.
//!
//! This module implements the one step the machine knows how to take. It
//! performs the following:
//! 1. **Decode and Dispatch:** Splits the word into fields and resolves the operation.
//! 2. **Execute:** Mutates registers and memory per the operation's semantics.
//! 3. **PC Update:** Advances by 4 unless a taken branch or jump redirects it.
//! 4. **Observability:** Records statistics and emits tracing events.

use tracing::{debug, warn};

use super::Cpu;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::{Result, SimError};
use crate::config::UnknownInstructionPolicy;
use crate::core::arch::ArchState;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::decode::decode;
use crate::isa::disasm::format_op;
use crate::isa::dispatch::{Op, resolve};
use crate::isa::instruction::Decoded;

/// How an executed instruction leaves the program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PcUpdate {
    /// Default advance: `pc += 4`.
    Advance,
    /// The operation overrode the PC with this target; the default advance is skipped.
    Redirect(i32),
}

/// Record of one retired instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// PC the instruction executed at.
    pub pc: i32,
    /// Raw instruction word.
    pub raw: u32,
    /// Resolved operation, or `None` for an ignored unrecognized word.
    pub op: Option<Op>,
    /// Effect on the program counter.
    pub pc_update: PcUpdate,
}

impl Cpu {
    /// Decodes and executes one instruction word.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnrecognizedInstruction`] if the word is absent from
    /// the dispatch table and the policy is [`UnknownInstructionPolicy::Strict`].
    /// The state is left untouched in that case.
    pub fn step(&mut self, inst: u32) -> Result<Retired> {
        let pc = self.state.pc;
        let d = decode(inst);

        let Some(op) = resolve(&d) else {
            return self.unrecognized(pc, inst);
        };

        if self.trace {
            debug!(pc, raw = %format!("{inst:#010x}"), "{}", format_op(op, &d));
        }

        let pc_update = execute(&mut self.state, op, &d);
        self.stats.record(op, pc_update);

        Ok(Retired {
            pc,
            raw: inst,
            op: Some(op),
            pc_update,
        })
    }

    fn unrecognized(&mut self, pc: i32, raw: u32) -> Result<Retired> {
        match self.unknown_policy {
            UnknownInstructionPolicy::Strict => Err(SimError::UnrecognizedInstruction { pc, raw }),
            UnknownInstructionPolicy::Ignore => {
                warn!(pc, raw = %format!("{raw:#010x}"), "unrecognized instruction ignored");
                self.state.pc = pc.wrapping_add(INSTRUCTION_SIZE);
                self.stats.record_unrecognized();
                Ok(Retired {
                    pc,
                    raw,
                    op: None,
                    pc_update: PcUpdate::Advance,
                })
            }
        }
    }
}

/// Executes a resolved operation against the architectural state.
///
/// Register and memory writes happen first, then the program counter is
/// updated: `pc + 4` for [`PcUpdate::Advance`], the target for
/// [`PcUpdate::Redirect`]. Source registers are read before `rd` is written,
/// so `rd == rs1` behaves as expected.
///
/// # Arguments
///
/// * `state` - The architectural state to mutate.
/// * `op`    - The resolved operation.
/// * `d`     - The decoded instruction fields.
///
/// # Returns
///
/// How the program counter was updated.
pub fn execute(state: &mut ArchState, op: Op, d: &Decoded) -> PcUpdate {
    let pc = state.pc;
    let rs1 = state.regs.read(d.rs1);
    let rs2 = state.regs.read(d.rs2);

    let update = match op {
        Op::Add => reg_reg(state, d, AluOp::Add, rs1, rs2),
        Op::Sub => reg_reg(state, d, AluOp::Sub, rs1, rs2),
        Op::Sll => reg_reg(state, d, AluOp::Sll, rs1, rs2),
        Op::Slt => reg_reg(state, d, AluOp::Slt, rs1, rs2),
        Op::Sltu => reg_reg(state, d, AluOp::Sltu, rs1, rs2),
        Op::Xor => reg_reg(state, d, AluOp::Xor, rs1, rs2),
        Op::Srl => reg_reg(state, d, AluOp::Srl, rs1, rs2),
        Op::Sra => reg_reg(state, d, AluOp::Sra, rs1, rs2),
        Op::Or => reg_reg(state, d, AluOp::Or, rs1, rs2),
        Op::And => reg_reg(state, d, AluOp::And, rs1, rs2),

        Op::Addi => reg_reg(state, d, AluOp::Add, rs1, d.imm),
        Op::Lw => {
            let val = state.mem.load(rs1.wrapping_add(d.imm));
            state.regs.write(d.rd, val);
            PcUpdate::Advance
        }
        Op::Jalr => {
            let target = rs1.wrapping_add(d.imm) & !1;
            state.regs.write(d.rd, pc.wrapping_add(INSTRUCTION_SIZE));
            PcUpdate::Redirect(target)
        }

        Op::Sw => {
            state.mem.store(rs1.wrapping_add(d.imm), rs2);
            PcUpdate::Advance
        }

        Op::Beq => branch(pc, d, rs1 == rs2),
        Op::Bne => branch(pc, d, rs1 != rs2),

        Op::Jal => {
            state.regs.write(d.rd, pc.wrapping_add(INSTRUCTION_SIZE));
            PcUpdate::Redirect(pc.wrapping_add(d.imm))
        }
    };

    state.pc = match update {
        PcUpdate::Advance => pc.wrapping_add(INSTRUCTION_SIZE),
        PcUpdate::Redirect(target) => target,
    };
    update
}

/// Writes `op(a, b)` to `rd`.
const fn reg_reg(state: &mut ArchState, d: &Decoded, op: AluOp, a: i32, b: i32) -> PcUpdate {
    state.regs.write(d.rd, Alu::execute(op, a, b));
    PcUpdate::Advance
}

/// Redirects to `pc + imm` when `taken`.
const fn branch(pc: i32, d: &Decoded, taken: bool) -> PcUpdate {
    if taken {
        PcUpdate::Redirect(pc.wrapping_add(d.imm))
    } else {
        PcUpdate::Advance
    }
}
