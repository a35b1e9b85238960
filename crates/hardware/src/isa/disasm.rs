//! Instruction Disassembler.
//!
//! Converts an instruction word into a human-readable mnemonic string for
//! debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rvstep_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00293); // ADDI x5, x0, 10
//! assert_eq!(text, "addi t0, zero, 10");
//! ```
//!
//! Immediates are printed as the simulator interprets them, i.e. the uniform
//! bits 31..20 field, so stores and branches may not match what a standard
//! assembler would print for the same word.

use crate::isa::abi::name;
use crate::isa::decode::decode;
use crate::isa::dispatch::{Family, Op, resolve};
use crate::isa::instruction::Decoded;

/// Disassembles a 32-bit instruction word into a human-readable string.
///
/// Returns `"unknown"` for words that the dispatch table does not resolve.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    resolve(&d).map_or_else(|| "unknown".to_string(), |op| format_op(op, &d))
}

/// Formats an already-resolved operation with its operands.
pub fn format_op(op: Op, d: &Decoded) -> String {
    let m = op.mnemonic();
    match op {
        Op::Lw | Op::Jalr => format!("{m} {}, {}({})", name(d.rd), d.imm, name(d.rs1)),
        Op::Addi => format!("{m} {}, {}, {}", name(d.rd), name(d.rs1), d.imm),
        Op::Sw => format!("{m} {}, {}({})", name(d.rs2), d.imm, name(d.rs1)),
        Op::Beq | Op::Bne => format!("{m} {}, {}, {}", name(d.rs1), name(d.rs2), d.imm),
        Op::Jal => format!("{m} {}, {}", name(d.rd), d.imm),
        _ => {
            debug_assert_eq!(op.family(), Family::RegReg);
            format!("{m} {}, {}, {}", name(d.rd), name(d.rs1), name(d.rs2))
        }
    }
}
