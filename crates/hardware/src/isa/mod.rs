//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code tables, field extraction, the
//! decoder, the dispatch table mapping decoded words to operations, and a
//! small disassembler used for diagnostics.

/// Application Binary Interface (ABI) register names.
pub mod abi;

/// Text-to-word conversion and field decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode dispatch table: instruction families and the closed operation set.
pub mod dispatch;

/// Instruction field extraction utilities and the `Decoded` record.
pub mod instruction;

/// Base integer subset opcodes and function codes.
pub mod rv32i;
