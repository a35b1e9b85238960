//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the [`Decoded`] record for the
//! 32-bit instruction words the simulator executes.
//!
//! Bit positions below are architectural (bit 31 is the first character of
//! the textual form, bit 0 the last).

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit shift for the destination register field.
const RD_SHIFT: u32 = 7;
/// Bit shift for the funct3 field.
const FUNCT3_SHIFT: u32 = 12;
/// Bit shift for the first source register field.
const RS1_SHIFT: u32 = 15;
/// Bit shift for the second source register field.
const RS2_SHIFT: u32 = 20;
/// Bit shift for the funct7 field.
const FUNCT7_SHIFT: u32 = 25;
/// Bit shift for the immediate field (bits 20-31).
const IMM_SHIFT: u32 = 20;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the 12-bit immediate (bits 20-31), sign-extended.
    ///
    /// The same field is used for every instruction family, including
    /// stores, branches, and `jal`. Only the I-type layout is honoured.
    fn imm(&self) -> i32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }

    /// Arithmetic shift of the whole word keeps bit 31 as the sign, which is
    /// exactly `unsigned(top12) - 4096` when the top bit is set.
    #[inline(always)]
    fn imm(&self) -> i32 {
        (*self as i32) >> IMM_SHIFT
    }
}

/// Decoded instruction structure containing all extracted fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Sign-extended 12-bit immediate.
    pub imm: i32,
}
