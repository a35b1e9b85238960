//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap on overflow; registers are 32 bits wide and
//! carries out of bit 31 are discarded.

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
