//! Function codes (funct3, bits 14-12).
//!
//! The `funct3` field distinguishes between instructions sharing the same
//! major opcode (e.g., BEQ vs BNE, ADD vs SLT).

/// Load Word.
pub const LW: u32 = 0b010;

/// Add Immediate.
pub const ADDI: u32 = 0b000;

/// Jump and Link Register.
pub const JALR: u32 = 0b000;

/// Store Word.
pub const SW: u32 = 0b010;

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;

/// Add / Subtract.
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical.
pub const SLL: u32 = 0b001;
/// Set Less Than (signed).
pub const SLT: u32 = 0b010;
/// Set Less Than Unsigned.
pub const SLTU: u32 = 0b011;
/// Bitwise XOR.
pub const XOR: u32 = 0b100;
/// Shift Right Logical / Arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;
