//! Instruction Decoder.
//!
//! Instructions arrive as text: exactly 32 characters of `0`/`1`, most
//! significant bit first. This module converts that text into a `u32` word
//! and splits the word into its [`Decoded`] fields.

use crate::common::MalformedReason;
use crate::common::constants::INSTRUCTION_WIDTH;
use crate::isa::instruction::{Decoded, InstructionBits};

/// Converts a textual instruction into its 32-bit encoding.
///
/// The caller is expected to have trimmed surrounding whitespace. Anything
/// other than exactly 32 binary digits is rejected.
///
/// # Arguments
///
/// * `text` - The instruction, most significant bit first.
///
/// # Returns
///
/// The encoded word.
///
/// # Errors
///
/// [`MalformedReason::WrongLength`] unless the text is exactly 32 characters,
/// otherwise [`MalformedReason::InvalidDigit`] for the first non-binary one.
pub fn parse_word(text: &str) -> Result<u32, MalformedReason> {
    let len = text.chars().count();
    if len != INSTRUCTION_WIDTH {
        return Err(MalformedReason::WrongLength(len));
    }

    text.chars()
        .enumerate()
        .try_fold(0u32, |word, (idx, ch)| match ch {
            '0' => Ok(word << 1),
            '1' => Ok((word << 1) | 1),
            found => Err(MalformedReason::InvalidDigit {
                column: idx + 1,
                found,
            }),
        })
}

/// Decodes an instruction word into its component fields.
///
/// Field positions are fixed; nothing here depends on the opcode. In
/// particular the immediate is always bits 31..20, sign-extended.
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: inst.imm(),
    }
}
