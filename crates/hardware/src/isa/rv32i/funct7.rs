//! Function codes (funct7, bits 31-25).
//!
//! Used by register-register instructions to distinguish operations that
//! share the same `funct3` (ADD vs SUB, SRL vs SRA).

/// Default operation (ADD, SRL, and every other register-register op).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation: SUB.
pub const SUB: u32 = 0b0100000;
/// Alternate operation: SRA.
pub const SRA: u32 = 0b0100000;
