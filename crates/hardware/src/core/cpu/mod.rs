//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure. It coordinates:
//! 1. **State Management:** Owns the architectural state (PC, registers, memory).
//! 2. **Policy:** Applies the configured handling of unrecognized instructions.
//! 3. **Observability:** Collects statistics and emits per-step trace events.

/// Single-cycle step and the execution engine.
pub mod execution;

use crate::config::{Config, UnknownInstructionPolicy};
use crate::core::arch::ArchState;
use crate::stats::SimStats;

pub use execution::{PcUpdate, Retired, execute};

/// Main CPU structure containing all processor state.
///
/// Each call to [`Cpu::step`] fetches nothing: the caller supplies the
/// instruction word, and the CPU decodes, executes, and retires it in one
/// atomic step.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Program counter, registers, and memory.
    pub state: ArchState,
    /// Retired-instruction statistics.
    pub stats: SimStats,
    /// Emit a disassembled `debug` event for every step.
    pub trace: bool,
    /// Handling of words absent from the dispatch table.
    pub unknown_policy: UnknownInstructionPolicy,
}

impl Cpu {
    /// Creates a CPU in the reset state described by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            state: ArchState::new(config),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            unknown_policy: config.general.unknown_instruction,
        }
    }

    /// Current program counter.
    #[inline]
    pub const fn pc(&self) -> i32 {
        self.state.pc
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
