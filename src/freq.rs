//! Symbol frequency counting
//!
//! Derives the symbol→count mapping that drives tree construction. Counting
//! is exact: every byte value observed at least once appears as a key,
//! including NUL and other zero-like values.

use std::collections::HashMap;

/// Count byte frequencies in the input.
///
/// Returns an empty map for empty input. The map never contains zero-count
/// entries.
pub fn count_frequencies(data: &[u8]) -> HashMap<u8, u64> {
    let mut frequencies = HashMap::new();
    for &byte in data {
        *frequencies.entry(byte).or_insert(0u64) += 1;
    }
    frequencies
}
