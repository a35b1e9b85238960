//! Instruction Stream Loader.
//!
//! This module reads the textual instruction stream. It performs:
//! 1. **File access:** Opens the instruction file, reporting a missing file distinctly.
//! 2. **Line splitting:** Yields one instruction per line, trimming surrounding whitespace.
//! 3. **Validation:** Rejects any line that is not exactly 32 binary digits,
//!    naming its 1-based line number.
//!
//! Lines are converted lazily so a run can stream a file of any length and
//! stop at the first malformed line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::common::{Result, SimError};
use crate::isa::decode::parse_word;

/// Lazily parsed instruction stream over any buffered reader.
#[derive(Debug)]
pub struct Program<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Program<R> {
    /// Wraps a reader; nothing is read until the first call to `next`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Program<R> {
    type Item = Result<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.line += 1;
        let line = self.line;
        Some(
            text.map_err(SimError::io(format!("reading line {line}")))
                .and_then(|text| parse_line(line, &text)),
        )
    }
}

/// Opens an instruction file for streaming.
///
/// # Errors
///
/// [`SimError::InputNotFound`] if `path` does not exist, [`SimError::Io`]
/// for any other failure to open it.
pub fn open_program(path: &Path) -> Result<Program<BufReader<File>>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SimError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => SimError::Io {
            context: format!("opening {}", path.display()),
            source,
        },
    })?;
    Ok(Program::new(BufReader::new(file)))
}

/// Reads and validates a whole instruction file.
///
/// # Errors
///
/// As [`open_program`], plus the first malformed line.
pub fn load_program(path: &Path) -> Result<Vec<u32>> {
    open_program(path)?.collect()
}

/// Validates an in-memory instruction listing.
///
/// # Errors
///
/// [`SimError::MalformedInstruction`] for the first malformed line.
pub fn parse_program(text: &str) -> Result<Vec<u32>> {
    Program::new(text.as_bytes()).collect()
}

/// Converts one line of the stream, trimming surrounding whitespace.
///
/// # Arguments
///
/// * `line` - 1-based line number, used in the error.
/// * `text` - The raw line.
///
/// # Errors
///
/// [`SimError::MalformedInstruction`] carrying `line` and the reason.
pub fn parse_line(line: usize, text: &str) -> Result<u32> {
    parse_word(text.trim()).map_err(|reason| SimError::MalformedInstruction { line, reason })
}
