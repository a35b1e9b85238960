//! Core processor implementation.
//!
//! This module contains the architectural state, the execution units, and
//! the CPU that decodes and executes one instruction per step.

/// Architectural state (register file, memory, program counter).
pub mod arch;

/// CPU core: single-cycle step and execution engine.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
