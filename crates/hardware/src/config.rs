//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Reset values and report layout of the reference machine.
//! 2. **Structures:** Sections for general behaviour, machine state, and the report.
//! 3. **Enums:** The policy applied to words the dispatch table does not recognise.
//!
//! `Config::default()` reproduces the reference machine exactly. Overrides are
//! supplied as JSON; every field is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Program counter at reset.
    pub const START_PC: i32 = 0;

    /// Stack pointer (`x2`) at reset.
    pub const STACK_POINTER_RESET: i32 = constants::STACK_POINTER_RESET;

    /// Memory words present (and zeroed) at reset.
    pub const PREFILLED_WORDS: usize = constants::PREFILLED_WORDS;

    /// Address printed for word 0 in the memory dump.
    pub const MEMORY_DUMP_BASE: u32 = constants::MEMORY_DUMP_BASE;

    /// Words printed in the memory dump.
    pub const MEMORY_DUMP_WORDS: usize = constants::MEMORY_DUMP_WORDS;
}

/// What to do with an instruction word that no dispatch-table entry matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum UnknownInstructionPolicy {
    /// Treat the word as a no-op that still advances the PC by 4.
    #[default]
    Ignore,
    /// Abort the run with [`SimError::UnrecognizedInstruction`].
    Strict,
}

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use rvstep_core::config::{Config, UnknownInstructionPolicy};
///
/// let json = r#"{
///     "general": { "unknown_instruction": "Strict" },
///     "report": { "memory_dump_words": 8 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.unknown_instruction, UnknownInstructionPolicy::Strict);
/// assert_eq!(config.report.memory_dump_words, 8);
/// assert_eq!(config.state.stack_pointer_reset, 380);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Architectural state at reset
    #[serde(default)]
    pub state: StateConfig,
    /// Final memory dump layout
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] if the document is not valid JSON or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`SimError::Io`] if the file cannot be read, [`SimError::Config`] if
    /// it does not parse.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(SimError::io(format!("reading config {}", path.display())))?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a disassembled `debug` event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    ///
    /// The reference machine resets to 0; any other value leaves that
    /// machine and changes every trace line.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: i32,

    /// Handling of words absent from the dispatch table.
    #[serde(default)]
    pub unknown_instruction: UnknownInstructionPolicy,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> i32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            unknown_instruction: UnknownInstructionPolicy::default(),
        }
    }
}

/// Reset values of the architectural state.
#[derive(Debug, Clone, Deserialize)]
pub struct StateConfig {
    /// Value of `x2` at reset.
    ///
    /// The reference machine always resets `x2` to 380; overriding it leaves
    /// that machine.
    #[serde(default = "StateConfig::default_stack_pointer_reset")]
    pub stack_pointer_reset: i32,

    /// Number of memory words (indices `0..n`) materialised at reset.
    #[serde(default = "StateConfig::default_prefilled_words")]
    pub prefilled_words: usize,
}

impl StateConfig {
    const fn default_stack_pointer_reset() -> i32 {
        defaults::STACK_POINTER_RESET
    }

    const fn default_prefilled_words() -> usize {
        defaults::PREFILLED_WORDS
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            stack_pointer_reset: defaults::STACK_POINTER_RESET,
            prefilled_words: defaults::PREFILLED_WORDS,
        }
    }
}

/// Layout of the memory dump written after the last instruction.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Address printed for word index 0; each following word adds 4.
    #[serde(default = "ReportConfig::default_memory_dump_base")]
    pub memory_dump_base: u32,

    /// Number of words (starting at index 0) to print.
    #[serde(default = "ReportConfig::default_memory_dump_words")]
    pub memory_dump_words: usize,
}

impl ReportConfig {
    const fn default_memory_dump_base() -> u32 {
        defaults::MEMORY_DUMP_BASE
    }

    const fn default_memory_dump_words() -> usize {
        defaults::MEMORY_DUMP_WORDS
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            memory_dump_base: defaults::MEMORY_DUMP_BASE,
            memory_dump_words: defaults::MEMORY_DUMP_WORDS,
        }
    }
}
