//! Error definitions.
//!
//! Every failure the simulator can report is a [`SimError`]. Individual
//! operations never fail; errors come from the input (a missing file, a line
//! that is not an instruction, an opcode outside the dispatch table under the
//! strict policy), the configuration, or the output sink.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while loading, decoding, or running a program.
#[derive(Debug, Error)]
pub enum SimError {
    /// The instruction file does not exist.
    #[error("File {} not found.", path.display())]
    InputNotFound {
        /// Path as given by the caller.
        path: PathBuf,
    },

    /// Reading the input or writing the trace failed.
    #[error("{context}: {source}")]
    Io {
        /// What the simulator was doing when the error occurred.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line of the instruction stream is not exactly 32 binary digits.
    #[error("line {line}: malformed instruction: {reason}")]
    MalformedInstruction {
        /// 1-based line number within the instruction stream.
        line: usize,
        /// Why the line was rejected.
        reason: MalformedReason,
    },

    /// The opcode/funct3/funct7 combination is absent from the dispatch table.
    ///
    /// Only raised under [`UnknownInstructionPolicy::Strict`](crate::config::UnknownInstructionPolicy::Strict);
    /// the default policy treats such words as a no-op that still advances the PC.
    #[error("unrecognized instruction {raw:#010x} at pc {pc:#x}")]
    UnrecognizedInstruction {
        /// Program counter of the offending instruction.
        pc: i32,
        /// Raw instruction word.
        raw: u32,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Builds a closure mapping an [`io::Error`] into [`SimError::Io`] with `context`.
    pub fn io(context: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }
}

/// Reason a textual instruction was rejected by the decoder.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MalformedReason {
    /// The trimmed line does not contain exactly 32 characters.
    #[error("expected 32 binary digits, found {0} characters")]
    WrongLength(usize),

    /// A character other than `0` or `1` was found.
    #[error("unexpected character {found:?} at column {column}")]
    InvalidDigit {
        /// 1-based column of the offending character.
        column: usize,
        /// The offending character.
        found: char,
    },
}
