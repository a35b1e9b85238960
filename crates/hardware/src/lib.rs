//! Single-cycle RISC-V subset simulator library.
//!
//! This crate implements an instruction-set simulator for a fixed subset of
//! RV32I with the following:
//! 1. **ISA:** Field extraction, decoding, and a closed dispatch table for 17 operations.
//! 2. **Core:** Architectural state (PC, 32 registers, sparse word memory) and the execution engine.
//! 3. **Simulation:** Instruction-stream loader, trace and memory-dump reporting, run loop.
//! 4. **Configuration and statistics:** JSON overrides and retired-instruction mix.

/// Common types and constants (reset values, report layout, errors).
pub mod common;
/// Simulator configuration (defaults and override structures).
pub mod config;
/// CPU core (architectural state, ALU, execution engine).
pub mod core;
/// Instruction set (fields, decode, dispatch, disassembly, ABI names).
pub mod isa;
/// Loader, reporter, and run loop.
pub mod sim;
/// Retired-instruction statistics.
pub mod stats;

/// Crate-wide error type.
pub use crate::common::{Result, SimError};
/// Root configuration type; use `Config::default()` or load JSON overrides.
pub use crate::config::Config;
/// CPU type; holds architectural state and statistics.
pub use crate::core::Cpu;
/// Run loop over an instruction stream.
pub use crate::sim::Simulator;
