//! Architectural State.
//!
//! The single mutable object every operation acts on. It is created once per
//! run and handed to the execution engine by `&mut`; nothing in the crate
//! holds it globally.

use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::arch::memory::WordMemory;

/// Program counter, register file, and memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchState {
    /// Program counter (byte address of the next instruction).
    pub pc: i32,
    /// General-purpose registers.
    pub regs: Gpr,
    /// Word-addressed memory.
    pub mem: WordMemory,
}

impl ArchState {
    /// Builds the reset state described by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            pc: config.general.start_pc,
            regs: Gpr::new(config.state.stack_pointer_reset),
            mem: WordMemory::new(config.state.prefilled_words),
        }
    }
}

impl Default for ArchState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
