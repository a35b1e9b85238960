//! # Loader Tests
//!
//! Reading instruction files and validating each line.

use std::io::Write;

use rvstep_core::common::{MalformedReason, SimError};
use rvstep_core::sim::loader;
use tempfile::NamedTempFile;

use crate::common::builder::instruction::{InstructionBuilder as I, program_text};

/// Helper function to create a temporary instruction file.
fn create_temp_program(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_program_success() {
    let words = [I::new().addi(5, 0, 10).build(), I::new().jal(0, 0).build()];
    let file = create_temp_program(&program_text(&words));
    assert_eq!(loader::load_program(file.path()).unwrap(), words);
}

#[test]
fn test_load_program_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = loader::load_program(&path).unwrap_err();
    assert!(matches!(err, SimError::InputNotFound { path: p } if p == path));
}

#[test]
fn test_load_program_empty_file() {
    let file = create_temp_program("");
    assert!(loader::load_program(file.path()).unwrap().is_empty());
}

#[test]
fn test_parse_program_trims_whitespace_and_crlf() {
    let text = "  00000000101000000000001010010011\t\r\n00000000000000000000000000000000";
    assert_eq!(loader::parse_program(text).unwrap(), vec![0x00A0_0293, 0]);
}

#[test]
fn test_parse_program_reports_line_number() {
    let text = format!("{}\n{}\n0101\n", "0".repeat(32), "1".repeat(32));
    let err = loader::parse_program(&text).unwrap_err();
    assert!(matches!(
        err,
        SimError::MalformedInstruction {
            line: 3,
            reason: MalformedReason::WrongLength(4)
        }
    ));
}

#[test]
fn test_parse_program_blank_line_is_malformed() {
    let text = format!("{}\n\n", "0".repeat(32));
    let err = loader::parse_program(&text).unwrap_err();
    assert!(matches!(
        err,
        SimError::MalformedInstruction {
            line: 2,
            reason: MalformedReason::WrongLength(0)
        }
    ));
}

#[test]
fn test_program_iterator_yields_until_first_error() {
    let text = format!("{}\nnot binary\n{}\n", "0".repeat(32), "1".repeat(32));
    let results: Vec<_> = loader::Program::new(text.as_bytes()).collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}
