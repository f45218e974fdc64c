pub mod engine;
pub mod loader;

pub use self::engine::CandidateTokens;
pub use self::loader::Dictionary;
use crate::config::ScoringParams;
use crate::mapping::Mapping;

/// Counts dictionary words longer than `min_word_len` in a candidate plaintext.
///
/// Short words are ignored: under a wrong mapping plenty of 2 to 5 letter
/// strings are still real words, so they say little about correctness.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub dictionary: Dictionary,
    pub min_word_len: usize,
}

impl Scorer {
    pub fn new(dictionary: Dictionary, params: &ScoringParams) -> Self {
        Self {
            dictionary,
            min_word_len: params.min_word_len,
        }
    }

    pub fn is_recognized(&self, token: &str) -> bool {
        token.chars().count() > self.min_word_len
            && token.chars().all(char::is_alphabetic)
            && self.dictionary.contains(&token.to_lowercase())
    }

    pub fn score(&self, text: &str) -> usize {
        engine::score_text(self, text)
    }

    pub fn score_mapping(&self, ciphertext: &str, mapping: &Mapping) -> usize {
        self.score(&mapping.apply(ciphertext))
    }

    pub fn prepare(&self, ciphertext: &str) -> CandidateTokens {
        CandidateTokens::new(ciphertext, self.min_word_len)
    }

    pub fn score_candidates(&self, candidates: &CandidateTokens, mapping: &Mapping) -> usize {
        engine::score_candidates(self, candidates, mapping)
    }
}
