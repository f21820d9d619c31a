//! Packed bit vector over odd integers.
//!
//! Bit layout: odd value `v` is stored at index `i = (v - 1) / 2`, in word
//! `i / 32`, bit position `i % 32`. Even values have no slot.

use crate::constants::BIT_WORD_WIDTH;

/// One bit per odd integer in `1..=limit`, packed into `u32` words.
///
/// Every bit starts set ("still assumed prime"); clearing marks a composite.
#[derive(Debug, Clone)]
pub struct OddBitVector {
    words: Vec<u32>,
    limit: u64,
}

impl OddBitVector {
    /// Create a vector covering the odd values up to `limit`, all set.
    #[must_use]
    pub fn new_all_set(limit: u64) -> Self {
        let num_words = slot_count(limit).div_ceil(BIT_WORD_WIDTH) as usize;
        Self {
            words: vec![u32::MAX; num_words],
            limit,
        }
    }

    /// Word index and bit offset for an odd value.
    ///
    /// Marking and querying both go through this, so they always agree.
    #[must_use]
    pub fn locate(value: u64) -> (usize, u32) {
        let index = (value - 1) / 2;
        (
            (index / BIT_WORD_WIDTH) as usize,
            (index % BIT_WORD_WIDTH) as u32,
        )
    }

    /// Largest value this vector can address.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of backing words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether the bit for `value` is still set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is even or larger than the limit.
    #[must_use]
    pub fn is_set(&self, value: u64) -> bool {
        self.check(value);
        let (word, bit) = Self::locate(value);
        self.words[word] & (1 << bit) != 0
    }

    /// Clear the bit for `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is even or larger than the limit.
    pub fn clear(&mut self, value: u64) {
        self.check(value);
        let (word, bit) = Self::locate(value);
        self.words[word] &= !(1 << bit);
    }

    /// Odd values from 3 upwards whose bit is still set, ascending.
    pub fn iter_set_from_three(&self) -> impl Iterator<Item = u64> + '_ {
        (3..=self.limit).step_by(2).filter(move |&v| self.is_set(v))
    }

    fn check(&self, value: u64) {
        assert!(
            value % 2 == 1 && value <= self.limit,
            "OddBitVector cannot address {value} (limit {})",
            self.limit
        );
    }
}

/// Number of odd values in `1..=limit`.
fn slot_count(limit: u64) -> u64 {
    limit / 2 + limit % 2
}
