pub mod mutation;
pub mod runner;

use self::mutation::SwapSampler;
use crate::alphabet::ALPHABET_LEN;
use crate::mapping::Mapping;
use crate::scorer::{CandidateTokens, Scorer};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreStep {
    pub iteration: usize,
    pub score: usize,
}

/// One hill-climbing chain over the mapping space.
///
/// Holds the current best mapping and its score. A step proposes the current
/// mapping with two plain assignments swapped and keeps it only on a strict
/// improvement, so `score` never decreases.
pub struct Climber<'a> {
    scorer: &'a Scorer,
    candidates: &'a CandidateTokens,

    pub mapping: Mapping,
    pub score: usize,
    pub accepted: usize,
    pub history: Vec<ScoreStep>,
}

impl<'a> Climber<'a> {
    pub fn new(scorer: &'a Scorer, candidates: &'a CandidateTokens, start: Mapping) -> Self {
        let score = scorer.score_candidates(candidates, &start);
        Self {
            scorer,
            candidates,
            mapping: start,
            score,
            accepted: 0,
            history: Vec::new(),
        }
    }

    /// Runs a single proposal. Returns true when the candidate was accepted.
    #[inline(always)]
    pub fn step<S: SwapSampler + ?Sized>(&mut self, sampler: &mut S, iteration: usize) -> bool {
        let (a, b) = sampler.draw_pair(ALPHABET_LEN);
        if a == b {
            return false;
        }

        let candidate = self.mapping.swapped(a, b);
        let candidate_score = self.scorer.score_candidates(self.candidates, &candidate);

        if candidate_score > self.score {
            self.mapping = candidate;
            self.score = candidate_score;
            self.accepted += 1;
            self.history.push(ScoreStep {
                iteration,
                score: candidate_score,
            });
            true
        } else {
            false
        }
    }

    /// Runs `steps` proposals starting at iteration number `offset`.
    /// Returns how many were accepted.
    pub fn evolve<S: SwapSampler + ?Sized>(
        &mut self,
        sampler: &mut S,
        offset: usize,
        steps: usize,
    ) -> usize {
        let mut accepted = 0;
        for i in 0..steps {
            if self.step(sampler, offset + i) {
                accepted += 1;
            }
        }
        accepted
    }
}
