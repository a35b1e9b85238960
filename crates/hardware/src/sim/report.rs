//! State Reporter.
//!
//! Renders the architectural state in the two textual forms the simulator
//! emits:
//! 1. **Trace line:** After every instruction, `0b<pc> 0b<x0> … 0b<x31>`.
//! 2. **Memory dump:** After the last instruction, one `0x<ADDR>:0b<value>`
//!    line per word, starting at the configured base address.
//!
//! Values are printed as 32-bit two's complement, so negative registers show
//! their full bit pattern.

use std::io::{self, Write};

use crate::common::constants::WORD_BYTES;
use crate::config::ReportConfig;
use crate::core::arch::ArchState;

/// Formats a register-width value as `0b` followed by exactly 32 digits.
pub fn bin32(val: i32) -> String {
    format!("0b{:032b}", val as u32)
}

/// Formats the program counter followed by all 32 registers, space-separated.
pub fn trace_line(state: &ArchState) -> String {
    std::iter::once(state.pc)
        .chain(state.regs.as_slice().iter().copied())
        .map(bin32)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats one memory-dump line per reported word.
pub fn memory_dump<'a>(
    state: &'a ArchState,
    report: &'a ReportConfig,
) -> impl Iterator<Item = String> + 'a {
    (0..report.memory_dump_words).map(move |idx| {
        let addr = report
            .memory_dump_base
            .wrapping_add((idx as u32).wrapping_mul(WORD_BYTES as u32));
        let val = state.mem.read_word(idx as i32);
        format!("0x{addr:08X}:{}", bin32(val))
    })
}

/// Writes the trace line for `state`, newline-terminated.
///
/// # Errors
///
/// Any error from the sink.
pub fn write_trace_line<W: Write>(out: &mut W, state: &ArchState) -> io::Result<()> {
    writeln!(out, "{}", trace_line(state))
}

/// Writes the memory dump for `state`, one newline-terminated line per word.
///
/// # Errors
///
/// The first error from the sink; later lines are not attempted.
pub fn write_memory_dump<W: Write>(
    out: &mut W,
    state: &ArchState,
    report: &ReportConfig,
) -> io::Result<()> {
    memory_dump(state, report).try_for_each(|line| writeln!(out, "{line}"))
}
