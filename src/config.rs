use crate::error::CrResult;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub search: SearchParams,
    #[command(flatten)]
    #[serde(default)]
    pub scoring: ScoringParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Swap proposals per chain
    #[arg(long, default_value_t = 20_000)]
    pub iterations: usize,

    /// Independent hill-climbing chains; the best one wins
    #[arg(long, default_value_t = 1)]
    pub chains: usize,

    /// Seed for reproducible runs
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Iterations between progress callbacks
    #[arg(long, default_value_t = 1_000)]
    pub report_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            iterations: 20_000,
            chains: 1,
            seed: None,
            report_interval: 1_000,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Words must be strictly longer than this to count
    #[arg(long, default_value_t = 5)]
    pub min_word_len: usize,

    /// Shortest ciphertext (in characters) accepted for cracking
    #[arg(long, default_value_t = 1_000)]
    pub min_cipher_len: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            min_word_len: 5,
            min_cipher_len: 1_000,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CrResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites file-provided values with flags the user actually typed.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.iterations);
        update_if_present!(search.chains);
        update_if_present!(search.seed);
        update_if_present!(search.report_interval);

        update_if_present!(scoring.min_word_len);
        update_if_present!(scoring.min_cipher_len);
    }
}
