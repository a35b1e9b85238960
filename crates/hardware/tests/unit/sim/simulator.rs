//! # Simulator Tests
//!
//! The run loop from words or files to the full textual report.

use std::fs;

use pretty_assertions::assert_eq;
use rvstep_core::Simulator;
use rvstep_core::common::SimError;
use rvstep_core::config::{Config, UnknownInstructionPolicy};
use rvstep_core::sim::loader;

use crate::common::builder::instruction::{InstructionBuilder as I, program_text};

fn sample_program() -> Vec<u32> {
    vec![
        I::new().addi(5, 0, 10).build(),
        I::new().addi(6, 0, -3).build(),
        I::new().add(7, 5, 6).build(),
        I::new().sw(7, 0).build(),
        I::new().beq(0, 8).build(),
        I::new().addi(9, 0, 1).build(),
        I::new().lw(10, 0, 28).build(),
    ]
}

fn run_to_string(config: &Config, words: &[u32]) -> (Simulator, String) {
    let mut sim = Simulator::new(config);
    let mut out = Vec::new();
    let _ = sim.run(words.iter().copied().map(Ok), &mut out).unwrap();
    (sim, String::from_utf8(out).unwrap())
}

#[test]
fn test_empty_program_dumps_zero_memory() {
    let (_, text) = run_to_string(&Config::default(), &[]);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("0x{:08X}:0b{}", 0x0001_0000 + i * 4, "0".repeat(32)));
    }
}

#[test]
fn test_run_emits_one_trace_line_per_instruction() {
    let program = sample_program();
    let (sim, text) = run_to_string(&Config::default(), &program);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), program.len() + 32);
    assert!(lines[..program.len()].iter().all(|l| l.starts_with("0b")));
    assert!(lines[program.len()..].iter().all(|l| l.starts_with("0x")));

    // sw x7 -> word (0 + 7) / 4 = 1; lw x10 reads word 28 / 4 = 7.
    assert_eq!(sim.cpu.state.mem.read_word(1), 7);
    assert_eq!(sim.cpu.state.regs.read(10), 0);
    // beq x0, x8 is taken (both zero), pc 16 -> 24. The stream continues
    // with the next line regardless of the pc.
    assert_eq!(sim.cpu.stats.branches_taken, 1);
    assert_eq!(sim.cpu.state.regs.read(9), 1);
    assert_eq!(sim.cpu.pc(), 32);
    assert_eq!(lines[program.len() + 1], "0x00010004:0b00000000000000000000000000000111");
}

#[test]
fn test_run_is_deterministic() {
    let program = sample_program();
    let (_, first) = run_to_string(&Config::default(), &program);
    let (_, second) = run_to_string(&Config::default(), &program);
    assert_eq!(first, second);
}

#[test]
fn test_run_counts_instructions() {
    let program = sample_program();
    let mut sim = Simulator::new(&Config::default());
    let executed = sim.run(program.iter().copied().map(Ok), &mut Vec::<u8>::new()).unwrap();
    assert_eq!(executed, 7);
    assert_eq!(sim.cpu.stats.instructions_retired, 7);
}

#[test]
fn test_malformed_line_aborts_without_dump() {
    let text = format!("{}bad\n", program_text(&sample_program()[..2]));
    let mut sim = Simulator::new(&Config::default());
    let mut out = Vec::new();

    let err = sim.run(loader::Program::new(text.as_bytes()), &mut out).unwrap_err();

    assert!(matches!(err, SimError::MalformedInstruction { line: 3, .. }));
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
}

#[test]
fn test_strict_policy_aborts_run() {
    let mut config = Config::default();
    config.general.unknown_instruction = UnknownInstructionPolicy::Strict;
    let mut sim = Simulator::new(&config);
    let mut out = Vec::new();

    let words = [I::new().addi(1, 0, 1).build(), 0, I::new().addi(2, 0, 2).build()];
    let err = sim.run(words.into_iter().map(Ok), &mut out).unwrap_err();

    assert!(matches!(err, SimError::UnrecognizedInstruction { pc: 4, raw: 0 }));
    assert_eq!(sim.cpu.state.regs.read(2), 380);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn test_custom_report_layout() {
    let config = Config::from_json(r#"{ "report": { "memory_dump_words": 4 } }"#).unwrap();
    let (sim, text) = run_to_string(&config, &[]);
    assert_eq!(text.lines().count(), 4);
    assert_eq!(sim.report().memory_dump_words, 4);
}

#[test]
fn test_run_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("program.txt");
    let output = dir.path().join("trace.txt");
    fs::write(&input, program_text(&sample_program())).unwrap();

    let executed = Simulator::new(&Config::default()).run_file(&input, &output).unwrap();
    let written = fs::read_to_string(&output).unwrap();

    let (_, expected) = run_to_string(&Config::default(), &sample_program());
    assert_eq!(executed, 7);
    assert_eq!(written, expected);
}

#[test]
fn test_run_file_missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("trace.txt");

    let err = Simulator::new(&Config::default()).run_file(&input, &output).unwrap_err();

    assert!(matches!(err, SimError::InputNotFound { .. }));
    assert!(!output.exists());
}
