//! Simulation driver and program I/O.
//!
//! Provides the loader that turns an instruction file into words, the
//! reporter that renders the per-step trace and final memory dump, and the
//! simulator that ties them to the CPU.

/// Instruction-stream loading and validation.
pub mod loader;

/// Trace-line and memory-dump formatting.
pub mod report;

/// Run loop over an instruction stream.
pub mod simulator;

pub use simulator::Simulator;
