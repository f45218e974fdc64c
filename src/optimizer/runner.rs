use crate::config::Config;
use crate::mapping::Mapping;
use crate::optimizer::mutation::{RandomSampler, SwapSampler};
use crate::optimizer::{Climber, ScoreStep};
use crate::scorer::{CandidateTokens, Scorer};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub iterations: usize,
    pub chains: usize,
    pub seed: Option<u64>,
    pub report_interval: usize,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            iterations: cfg.search.iterations,
            chains: cfg.search.chains.max(1),
            seed: cfg.search.seed,
            report_interval: cfg.search.report_interval,
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone)]
pub struct ChainResult {
    pub chain: usize,
    pub mapping: Mapping,
    pub start_score: usize,
    pub score: usize,
    pub accepted: usize,
    pub iterations_run: usize,
    pub history: Vec<ScoreStep>,
}

/// A trait for receiving updates during optimization.
/// Boolean return value indicates if the chain should continue (true) or stop (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, chain: usize, iteration: usize, score: usize) -> bool;
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _chain: usize, _iteration: usize, _score: usize) -> bool {
        true
    }
}

pub struct Optimizer {
    scorer: Arc<Scorer>,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, options: OptimizationOptions) -> Self {
        Self { scorer, options }
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    /// Runs one chain with a caller-supplied sampler.
    pub fn climb<S, CB>(
        &self,
        candidates: &CandidateTokens,
        start: Mapping,
        sampler: &mut S,
        chain: usize,
        callback: &CB,
    ) -> ChainResult
    where
        S: SwapSampler + ?Sized,
        CB: ProgressCallback + ?Sized,
    {
        let opts = &self.options;
        let mut climber = Climber::new(&self.scorer, candidates, start);
        let start_score = climber.score;

        let interval = if opts.report_interval == 0 {
            opts.iterations.max(1)
        } else {
            opts.report_interval
        };

        let mut done = 0;
        while done < opts.iterations {
            let batch = interval.min(opts.iterations - done);
            climber.evolve(sampler, done, batch);
            done += batch;

            if !callback.on_progress(chain, done, climber.score) {
                debug!("Chain {} stopped by callback at iteration {}", chain, done);
                break;
            }
        }

        debug!(
            "Chain {}: {} -> {} ({} accepted, {} iterations)",
            chain, start_score, climber.score, climber.accepted, done
        );

        ChainResult {
            chain,
            mapping: climber.mapping,
            start_score,
            score: climber.score,
            accepted: climber.accepted,
            iterations_run: done,
            history: climber.history,
        }
    }

    /// Runs every configured chain from the same start, in parallel, and
    /// returns the best one. Ties go to the lowest chain index.
    pub fn run<CB: ProgressCallback>(
        &self,
        candidates: &CandidateTokens,
        start: Mapping,
        callback: &CB,
    ) -> ChainResult {
        let chains = self.options.chains.max(1);
        let seed = self.options.seed;

        let results: Vec<ChainResult> = (0..chains)
            .into_par_iter()
            .map(|i| {
                let mut sampler = RandomSampler::new(seed.map(|s| s.wrapping_add(i as u64)));
                self.climb(candidates, start, &mut sampler, i, callback)
            })
            .collect();

        // collect() keeps chain order, so the earlier chain survives a tie
        results
            .into_iter()
            .reduce(|best, r| if r.score > best.score { r } else { best })
            .unwrap_or_else(|| {
                let mut sampler = RandomSampler::new(seed);
                self.climb(candidates, start, &mut sampler, 0, callback)
            })
    }
}
