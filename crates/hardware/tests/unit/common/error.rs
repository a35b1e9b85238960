//! # Error Tests
//!
//! User-visible messages for every `SimError` variant.

use std::io;
use std::path::PathBuf;

use rvstep_core::common::{MalformedReason, SimError};

#[test]
fn test_input_not_found_message() {
    let err = SimError::InputNotFound {
        path: PathBuf::from("prog.txt"),
    };
    assert_eq!(err.to_string(), "File prog.txt not found.");
}

#[test]
fn test_malformed_wrong_length_message() {
    let err = SimError::MalformedInstruction {
        line: 3,
        reason: MalformedReason::WrongLength(31),
    };
    assert_eq!(
        err.to_string(),
        "line 3: malformed instruction: expected 32 binary digits, found 31 characters"
    );
}

#[test]
fn test_malformed_invalid_digit_message() {
    let err = SimError::MalformedInstruction {
        line: 1,
        reason: MalformedReason::InvalidDigit {
            column: 7,
            found: '2',
        },
    };
    assert_eq!(
        err.to_string(),
        "line 1: malformed instruction: unexpected character '2' at column 7"
    );
}

#[test]
fn test_unrecognized_message() {
    let err = SimError::UnrecognizedInstruction {
        pc: 8,
        raw: 0x0000_007f,
    };
    assert_eq!(err.to_string(), "unrecognized instruction 0x0000007f at pc 0x8");
}

#[test]
fn test_io_helper_keeps_context_and_source() {
    let err = SimError::io("writing trace")(io::Error::other("disk full"));
    assert_eq!(err.to_string(), "writing trace: disk full");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_config_error_from_serde() {
    let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = SimError::from(serde_err);
    assert!(matches!(err, SimError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration: "));
}
