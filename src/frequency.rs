use crate::alphabet::{self, ALPHABET, ALPHABET_LEN, EN_FREQ_ORDER};
use crate::mapping::Mapping;

pub type LetterCounts = [usize; ALPHABET_LEN];

/// Occurrences of each alphabet letter, case-folded. Other characters are ignored.
pub fn letter_counts(text: &str) -> LetterCounts {
    let mut counts = [0usize; ALPHABET_LEN];
    for ch in text.chars() {
        for lc in ch.to_lowercase() {
            if let Some(idx) = alphabet::index_of(lc) {
                counts[idx] += 1;
            }
        }
    }
    counts
}

/// Cipher letter indices, most frequent first. Equal counts keep alphabet order.
pub fn rank_by_frequency(counts: &LetterCounts) -> [usize; ALPHABET_LEN] {
    let mut order: [usize; ALPHABET_LEN] = std::array::from_fn(|i| i);
    // slice::sort_by is stable
    order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));
    order
}

/// Pairs the n-th most frequent cipher letter with the n-th most common
/// English letter.
pub fn initial_mapping(counts: &LetterCounts) -> Mapping {
    let ranked = rank_by_frequency(counts);

    let mut assigned: [Option<u8>; ALPHABET_LEN] = [None; ALPHABET_LEN];
    let mut used_plain = [false; ALPHABET_LEN];

    for (rank, &cipher_idx) in ranked.iter().enumerate() {
        let plain = EN_FREQ_ORDER[rank];
        let plain_idx = (plain - b'a') as usize;
        if !used_plain[plain_idx] {
            assigned[cipher_idx] = Some(plain);
            used_plain[plain_idx] = true;
        }
    }

    // Leftover cipher letters take the unused plain letters in alphabet order.
    let mut remaining = ALPHABET
        .iter()
        .copied()
        .filter(|&p| !used_plain[(p - b'a') as usize]);

    let mut table = [0u8; ALPHABET_LEN];
    for (cipher_idx, slot) in assigned.iter().enumerate() {
        table[cipher_idx] = match slot {
            Some(p) => *p,
            None => remaining.next().unwrap_or(b'?'),
        };
    }

    Mapping::from_plain_letters(&table).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_case_folded() {
        let c = letter_counts("AaB, b! 9");
        assert_eq!(c[0], 2);
        assert_eq!(c[1], 2);
        assert_eq!(c.iter().sum::<usize>(), 4);
    }

    #[test]
    fn ties_keep_alphabet_order() {
        let ranked = rank_by_frequency(&[0; ALPHABET_LEN]);
        let expected: Vec<usize> = (0..ALPHABET_LEN).collect();
        assert_eq!(ranked.to_vec(), expected);
    }

    #[test]
    fn uniform_counts_map_alphabet_onto_frequency_order() {
        let m = initial_mapping(&[0; ALPHABET_LEN]);
        assert_eq!(m.as_bytes(), EN_FREQ_ORDER);
    }
}
