//! Architectural state.
//!
//! This module contains the programmer-visible machine state:
//! 1. **GPRs:** The 32-entry general-purpose register file.
//! 2. **Memory:** The sparse word-addressed memory store.
//! 3. **State:** The tuple (PC, registers, memory) every operation acts on.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Sparse word-addressed memory.
pub mod memory;

/// Program counter, register file, and memory bundled together.
pub mod state;

pub use gpr::Gpr;
pub use memory::WordMemory;
pub use state::ArchState;
