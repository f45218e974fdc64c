use super::Scorer;
use crate::alphabet;
use crate::mapping::Mapping;

/// Ciphertext tokens that can ever be recognized, lowered once up front.
///
/// Substitution maps letters onto letters, so a token's length and whether it
/// is purely alphabetic never change under any mapping. Tokens that fail those
/// checks are dropped here and the search loop only re-maps the survivors.
#[derive(Debug, Clone)]
pub struct CandidateTokens {
    tokens: Vec<Vec<char>>,
    longest: usize,
}

impl CandidateTokens {
    pub fn new(ciphertext: &str, min_word_len: usize) -> Self {
        // per-char folding, same as Mapping::apply
        let lowered: String = ciphertext.chars().flat_map(char::to_lowercase).collect();
        let tokens: Vec<Vec<char>> = lowered
            .split_whitespace()
            .map(|t| t.chars().collect::<Vec<char>>())
            .filter(|t| t.len() > min_word_len && t.iter().all(|c| c.is_alphabetic()))
            .collect();
        let longest = tokens.iter().map(Vec::len).max().unwrap_or(0);
        Self { tokens, longest }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Slow path: scores an already-decrypted text.
pub fn score_text(scorer: &Scorer, text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| scorer.is_recognized(token))
        .count()
}

/// Fast path used by the optimizer. Equal to
/// `score_text(scorer, &mapping.apply(ciphertext))`.
pub fn score_candidates(scorer: &Scorer, candidates: &CandidateTokens, mapping: &Mapping) -> usize {
    if scorer.dictionary.is_empty() {
        return 0;
    }

    let mut buf = String::with_capacity(candidates.longest * 4);
    let mut score = 0;
    for token in &candidates.tokens {
        buf.clear();
        for &c in token {
            match alphabet::index_of(c) {
                Some(idx) => buf.push(mapping.get(idx) as char),
                None => buf.push(c),
            }
        }
        if scorer.dictionary.contains(&buf) {
            score += 1;
        }
    }
    score
}
