use crate::config::Config;
use crate::error::{CipherError, CrResult};
use crate::frequency;
use crate::mapping::Mapping;
use crate::optimizer::mutation::SwapSampler;
use crate::optimizer::runner::{
    ChainResult, NoProgress, OptimizationOptions, Optimizer, ProgressCallback,
};
use crate::optimizer::ScoreStep;
use crate::scorer::{Dictionary, Scorer};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct CrackOutcome {
    /// Frequency-only guess.
    pub baseline_mapping: Mapping,
    pub baseline_score: usize,
    /// Best mapping the search reached, before the guard is applied.
    pub optimized_mapping: Mapping,
    pub optimized_score: usize,
    /// True when the search failed to beat the baseline and it was kept instead.
    pub reverted: bool,
    pub accepted: usize,
    pub iterations: usize,
    pub chain: usize,
    pub history: Vec<ScoreStep>,
    pub plaintext: String,
}

impl CrackOutcome {
    /// The mapping that produced `plaintext`.
    pub fn mapping(&self) -> Mapping {
        if self.reverted {
            self.baseline_mapping
        } else {
            self.optimized_mapping
        }
    }

    pub fn score(&self) -> usize {
        if self.reverted {
            self.baseline_score
        } else {
            self.optimized_score
        }
    }
}

/// Frequency statistics below `required` characters are too noisy to use.
pub fn check_cipher_length(ciphertext: &str, required: usize) -> CrResult<()> {
    let actual = ciphertext.chars().count();
    if actual < required {
        return Err(CipherError::InputTooShort { required, actual });
    }
    Ok(())
}

/// Frequency analysis followed by dictionary-guided hill climbing.
pub struct Cracker {
    scorer: Arc<Scorer>,
    config: Config,
}

impl Cracker {
    pub fn new(dictionary: Dictionary, config: Config) -> Self {
        let scorer = Arc::new(Scorer::new(dictionary, &config.scoring));
        Self { scorer, config }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn check_length(&self, ciphertext: &str) -> CrResult<()> {
        check_cipher_length(ciphertext, self.config.scoring.min_cipher_len)
    }

    pub fn baseline(&self, ciphertext: &str) -> Mapping {
        let counts = frequency::letter_counts(ciphertext);
        frequency::initial_mapping(&counts)
    }

    pub fn crack(&self, ciphertext: &str) -> CrResult<CrackOutcome> {
        self.crack_with_progress(ciphertext, &NoProgress)
    }

    pub fn crack_with_progress<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        callback: &CB,
    ) -> CrResult<CrackOutcome> {
        self.check_length(ciphertext)?;
        let start = self.baseline(ciphertext);
        let candidates = self.scorer.prepare(ciphertext);
        debug!("{} ciphertext tokens eligible for scoring", candidates.len());

        let optimizer = Optimizer::new(self.scorer.clone(), OptimizationOptions::from(&self.config));
        let result = optimizer.run(&candidates, start, callback);
        Ok(self.finish(ciphertext, start, result))
    }

    /// Single chain driven by `sampler` instead of the seeded default.
    pub fn crack_with_sampler<S: SwapSampler + ?Sized>(
        &self,
        ciphertext: &str,
        sampler: &mut S,
    ) -> CrResult<CrackOutcome> {
        self.check_length(ciphertext)?;
        let start = self.baseline(ciphertext);
        let candidates = self.scorer.prepare(ciphertext);

        let optimizer = Optimizer::new(self.scorer.clone(), OptimizationOptions::from(&self.config));
        let result = optimizer.climb(&candidates, start, sampler, 0, &NoProgress);
        Ok(self.finish(ciphertext, start, result))
    }

    fn finish(&self, ciphertext: &str, baseline_mapping: Mapping, result: ChainResult) -> CrackOutcome {
        let baseline_plain = baseline_mapping.apply(ciphertext);
        let baseline_score = self.scorer.score(&baseline_plain);

        let optimized_plain = result.mapping.apply(ciphertext);
        let optimized_score = self.scorer.score(&optimized_plain);

        let reverted = optimized_score <= baseline_score;
        info!(
            "🏁 Baseline score {} | optimized score {} | {} accepted swaps{}",
            baseline_score,
            optimized_score,
            result.accepted,
            if reverted { " | keeping baseline" } else { "" }
        );

        CrackOutcome {
            baseline_mapping,
            baseline_score,
            optimized_mapping: result.mapping,
            optimized_score,
            reverted,
            accepted: result.accepted,
            iterations: result.iterations_run,
            chain: result.chain,
            history: result.history,
            plaintext: if reverted { baseline_plain } else { optimized_plain },
        }
    }
}
