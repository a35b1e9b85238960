//! Execution units and functional components.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
