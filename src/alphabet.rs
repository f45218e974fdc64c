//! The fixed 26-letter domain every mapping is defined over.

pub const ALPHABET_LEN: usize = 26;

pub const ALPHABET: &[u8; ALPHABET_LEN] = b"abcdefghijklmnopqrstuvwxyz";

/// English letters ordered from most to least frequent.
pub const EN_FREQ_ORDER: &[u8; ALPHABET_LEN] = b"etaoinshrdlucmfwypvbgkjqxz";

/// Position of a lowercase letter in the alphabet, `None` for anything else.
#[inline(always)]
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

#[inline(always)]
pub fn letter_at(idx: usize) -> u8 {
    ALPHABET[idx]
}

/// True when every letter appears exactly once.
pub fn is_permutation(letters: &[u8]) -> bool {
    if letters.len() != ALPHABET_LEN {
        return false;
    }
    let mut seen = 0u32;
    for &b in letters {
        if !b.is_ascii_lowercase() {
            return false;
        }
        seen |= 1 << (b - b'a');
    }
    seen == (1 << ALPHABET_LEN) - 1
}
