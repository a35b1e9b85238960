//! Simulation statistics collection and reporting.
//!
//! This module tracks what the simulator retired. It provides:
//! 1. **Instruction count:** Total retired instructions, including ignored words.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Control flow:** How many conditional branches were taken.

use std::fmt;

use crate::core::cpu::PcUpdate;
use crate::isa::dispatch::{Family, Op};

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instruction words retired (recognized or not).
    pub instructions_retired: u64,

    /// Count of register-register and `addi` instructions retired.
    pub inst_alu: u64,
    /// Count of `lw` instructions retired.
    pub inst_load: u64,
    /// Count of `sw` instructions retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of `jal`/`jalr` instructions retired.
    pub inst_jump: u64,
    /// Count of unrecognized words retired as no-ops.
    pub inst_unrecognized: u64,

    /// Conditional branches whose condition held.
    pub branches_taken: u64,
}

impl SimStats {
    /// Records a retired operation and its effect on the PC.
    pub const fn record(&mut self, op: Op, pc_update: PcUpdate) {
        self.instructions_retired += 1;
        match (op.family(), op) {
            (Family::RegReg, _) | (_, Op::Addi) => self.inst_alu += 1,
            (_, Op::Lw) => self.inst_load += 1,
            (_, Op::Jalr) | (Family::Jump, _) => self.inst_jump += 1,
            (Family::Store, _) => self.inst_store += 1,
            (Family::Branch, _) => {
                self.inst_branch += 1;
                if matches!(pc_update, PcUpdate::Redirect(_)) {
                    self.branches_taken += 1;
                }
            }
            (Family::RegImm, _) => {}
        }
    }

    /// Records an unrecognized word that was skipped.
    pub const fn record_unrecognized(&mut self) {
        self.instructions_retired += 1;
        self.inst_unrecognized += 1;
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
            ("op.unrecognized", self.inst_unrecognized),
        ] {
            writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        write!(f, "----------------------------------------------------------")
    }
}
