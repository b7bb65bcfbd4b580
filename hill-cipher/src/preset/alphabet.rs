use lazy_static::lazy_static;
use std::collections::HashMap;

/// Residue of the letter `X`, appended to fill the last plaintext block.
pub const PADDING_RESIDUE: i64 = 23;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    /// A static HashMap mapping a residue (0 to 25) to its uppercase letter.
    pub static ref INDEX_TO_LETTER_MAP: HashMap<i64, char> = ALPHABET
        .chars()
        .enumerate()
        .map(|(i, ch)| (i as i64, ch))
        .collect();

    /// A static HashMap mapping an uppercase letter (A-Z) to its residue (0 to 25).
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, i64> = INDEX_TO_LETTER_MAP
        .iter()
        .map(|(&index, &ch)| (ch, index))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::quickcheck;

    #[test]
    fn test_tables_cover_alphabet() {
        assert_eq!(INDEX_TO_LETTER_MAP.len(), 26);
        assert_eq!(LETTER_TO_INDEX_MAP.len(), 26);
        assert_eq!(LETTER_TO_INDEX_MAP[&'A'], 0);
        assert_eq!(LETTER_TO_INDEX_MAP[&'Z'], 25);
        assert_eq!(INDEX_TO_LETTER_MAP[&PADDING_RESIDUE], 'X');
    }

    quickcheck! {
        fn prop_tables_match_code_points(index: u8) -> bool {
            let index = i64::from(index % 26);
            let ch = INDEX_TO_LETTER_MAP[&index];
            ch as i64 - 'A' as i64 == index && LETTER_TO_INDEX_MAP[&ch] == index
        }
    }
}
