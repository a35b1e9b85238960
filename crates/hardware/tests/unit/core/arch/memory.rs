//! # Word Memory Tests
//!
//! Sparse storage, floor division of byte addresses, and the zero default.

use rvstep_core::core::arch::memory::WordMemory;

#[test]
fn test_memory_prefilled_words() {
    let mem = WordMemory::default();
    assert_eq!(mem.len(), 32);
    assert!(mem.iter().all(|(_, v)| v == 0));
    assert_eq!(mem.iter().map(|(i, _)| i).collect::<Vec<_>>(), (0..32).collect::<Vec<_>>());
}

#[test]
fn test_memory_empty_when_not_prefilled() {
    let mem = WordMemory::new(0);
    assert!(mem.is_empty());
}

#[test]
fn test_memory_unwritten_reads_zero() {
    let mem = WordMemory::default();
    assert_eq!(mem.load(4096), 0);
    assert_eq!(mem.read_word(-99), 0);
    assert_eq!(mem.len(), 32);
}

#[test]
fn test_memory_word_index_floors() {
    assert_eq!(WordMemory::word_index(0), 0);
    assert_eq!(WordMemory::word_index(3), 0);
    assert_eq!(WordMemory::word_index(4), 1);
    assert_eq!(WordMemory::word_index(-1), -1);
    assert_eq!(WordMemory::word_index(-4), -1);
    assert_eq!(WordMemory::word_index(-5), -2);
}

#[test]
fn test_memory_store_load_same_word() {
    let mut mem = WordMemory::default();
    mem.store(9, 77);
    assert_eq!(mem.load(8), 77);
    assert_eq!(mem.load(11), 77);
    assert_eq!(mem.read_word(2), 77);
    assert_eq!(mem.load(12), 0);
}

#[test]
fn test_memory_store_creates_entry() {
    let mut mem = WordMemory::default();
    mem.store(-8, 5);
    assert_eq!(mem.len(), 33);
    assert_eq!(mem.read_word(-2), 5);
}
