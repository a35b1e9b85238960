//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). The shift amount is the value of the second
//! operand masked to its low 5 bits (0–31).

use super::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (low 5 bits used, upper bits ignored).
///
/// # Returns
///
/// The shifted value, or `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let shamt = b as u32 & SHAMT_MASK;
    match op {
        AluOp::Sll => a.wrapping_shl(shamt),
        AluOp::Srl => (a as u32).wrapping_shr(shamt) as i32,
        AluOp::Sra => a >> shamt,
        _ => 0,
    }
}
