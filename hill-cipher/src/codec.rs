//! Conversion between text and residue sequences (`A = 0` … `Z = 25`).

use crate::preset::alphabet::{INDEX_TO_LETTER_MAP, LETTER_TO_INDEX_MAP};
use crate::ring::{Ring, Vector};

/// Uppercases `text` and maps every letter `A`-`Z` to its residue, in order.
///
/// Everything outside `A`-`Z` after uppercasing (digits, spaces, punctuation,
/// accented letters) is dropped, so the mapping is lossy.
///
/// # Example
///
/// ```
/// # use hill_cipher::codec::encode;
/// assert_eq!(encode("Help!"), vec![7, 4, 11, 15]);
/// assert!(encode("1234 ...").is_empty());
/// ```
pub fn encode(text: &str) -> Vector {
    text.to_uppercase()
        .chars()
        .filter_map(|ch| LETTER_TO_INDEX_MAP.get(&ch).copied())
        .collect()
}

/// Maps every residue back to its uppercase letter.
///
/// Values outside `[0, 26)` are reduced first.
pub fn decode(residues: &[i64]) -> String {
    let ring = Ring::alphabet();
    residues
        .iter()
        .map(|&r| INDEX_TO_LETTER_MAP[&ring.normalize(r)])
        .collect()
}
