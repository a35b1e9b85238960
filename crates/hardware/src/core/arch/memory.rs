//! Sparse word-addressed memory.
//!
//! Memory is a map from word index (byte address divided by 4, rounding
//! toward negative infinity) to a 32-bit value. Words that were never
//! written read as zero; any index, including negative ones, may be written.
//! There is no bounds or alignment checking.

use std::collections::BTreeMap;

use crate::common::constants::{PREFILLED_WORDS, WORD_BYTES};

/// Word-addressed sparse memory store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMemory {
    words: BTreeMap<i32, i32>,
}

impl WordMemory {
    /// Creates a memory with word indices `0..prefilled` present and zeroed.
    pub fn new(prefilled: usize) -> Self {
        let words = (0..prefilled)
            .map_while(|idx| i32::try_from(idx).ok())
            .map(|idx| (idx, 0))
            .collect();
        Self { words }
    }

    /// Converts a byte address to a word index.
    #[inline]
    pub const fn word_index(addr: i32) -> i32 {
        addr.div_euclid(WORD_BYTES)
    }

    /// Reads the word at `index`, or zero if it was never written.
    #[inline]
    pub fn read_word(&self, index: i32) -> i32 {
        self.words.get(&index).copied().unwrap_or(0)
    }

    /// Writes `val` at word `index`, creating the entry if needed.
    #[inline]
    pub fn write_word(&mut self, index: i32, val: i32) {
        *self.words.entry(index).or_insert(0) = val;
    }

    /// Reads the word containing byte address `addr`.
    pub fn load(&self, addr: i32) -> i32 {
        self.read_word(Self::word_index(addr))
    }

    /// Writes the word containing byte address `addr`.
    pub fn store(&mut self, addr: i32, val: i32) {
        self.write_word(Self::word_index(addr), val);
    }

    /// Number of materialised words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no word has been materialised.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over materialised words in index order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.words.iter().map(|(&idx, &val)| (idx, val))
    }
}

impl Default for WordMemory {
    fn default() -> Self {
        Self::new(PREFILLED_WORDS)
    }
}
