//! General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`x0`-`x31`).
//! 2. **Reset:** Initializes every register to zero except the stack pointer.
//!
//! Unlike the architecture it models, `x0` is an ordinary register here:
//! writes to it are kept and read back.

use crate::common::constants::{NUM_REGISTERS, STACK_POINTER_RESET};
use crate::isa::abi::REG_SP;

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a register file with every register zero except `x2`, which
    /// holds `stack_pointer`.
    ///
    /// # Arguments
    ///
    /// * `stack_pointer` - Reset value of the stack pointer.
    pub const fn new(stack_pointer: i32) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[REG_SP] = stack_pointer;
        Self { regs }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline]
    pub const fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a value to a general-purpose register, including `x0`.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx] = val;
    }

    /// All registers in index order.
    pub const fn as_slice(&self) -> &[i32; NUM_REGISTERS] {
        &self.regs
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new(STACK_POINTER_RESET)
    }
}
