//! Global System Constants.
//!
//! This module defines constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Encoding width and program-counter step.
//! 2. **State Constants:** Register count, memory word size, reset values.
//! 3. **Report Constants:** Layout of the final memory dump.

/// Number of binary digits in one textual instruction.
pub const INSTRUCTION_WIDTH: usize = 32;

/// Size of an instruction in bytes; the default program-counter advance.
pub const INSTRUCTION_SIZE: i32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Size of a memory word in bytes. Byte addresses are divided by this to
/// obtain the word index used by the memory store.
pub const WORD_BYTES: i32 = 4;

/// Reset value of the stack pointer (`x2`).
pub const STACK_POINTER_RESET: i32 = 380;

/// Number of memory words (indices `0..N`) present at reset.
pub const PREFILLED_WORDS: usize = 32;

/// Address printed for word index 0 in the final memory dump.
pub const MEMORY_DUMP_BASE: u32 = 0x0001_0000;

/// Number of memory words printed in the final memory dump.
pub const MEMORY_DUMP_WORDS: usize = 32;
