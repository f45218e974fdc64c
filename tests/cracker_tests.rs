mod common;

use monocrack::config::{Config, ScoringParams, SearchParams};
use monocrack::cracker::{check_cipher_length, Cracker};
use monocrack::error::CipherError;
use monocrack::optimizer::mutation::ScriptedSampler;
use monocrack::scorer::Dictionary;

fn config(iterations: usize, chains: usize, seed: u64) -> Config {
    Config {
        search: SearchParams {
            iterations,
            chains,
            seed: Some(seed),
            report_interval: 1_000,
        },
        scoring: ScoringParams::default(),
    }
}

#[test]
fn test_rejects_short_ciphertext() {
    let cracker = Cracker::new(common::dictionary(), Config::default());
    let err = cracker.crack(&"x".repeat(999)).unwrap_err();
    match err {
        CipherError::InputTooShort { required, actual } => {
            assert_eq!(required, 1000);
            assert_eq!(actual, 999);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_length_counts_characters_not_bytes() {
    // 500 two-byte characters
    assert!(check_cipher_length(&"é".repeat(500), 1000).is_err());
    assert!(check_cipher_length(&"é".repeat(1000), 1000).is_ok());
}

#[test]
fn test_empty_dictionary_returns_frequency_guess() {
    let cipher = common::ciphertext();
    let cracker = Cracker::new(Dictionary::default(), config(2_000, 1, 1));
    let outcome = cracker.crack(&cipher).unwrap();

    assert_eq!(outcome.baseline_score, 0);
    assert_eq!(outcome.optimized_score, 0);
    assert!(outcome.reverted);
    assert_eq!(outcome.accepted, 0);
    assert_eq!(outcome.mapping(), outcome.baseline_mapping);
    assert_eq!(outcome.plaintext, outcome.baseline_mapping.apply(&cipher));
    assert_eq!(outcome.baseline_mapping, cracker.baseline(&cipher));
}

#[test]
fn test_guard_never_returns_worse_than_baseline() {
    let cipher = common::ciphertext();
    for seed in 0..4 {
        let cracker = Cracker::new(common::dictionary(), config(3_000, 1, seed));
        let outcome = cracker.crack(&cipher).unwrap();

        assert!(outcome.score() >= outcome.baseline_score);
        if outcome.reverted {
            assert!(outcome.optimized_score <= outcome.baseline_score);
            assert_eq!(outcome.plaintext, outcome.baseline_mapping.apply(&cipher));
        } else {
            assert!(outcome.optimized_score > outcome.baseline_score);
            assert_eq!(outcome.plaintext, outcome.optimized_mapping.apply(&cipher));
        }
        assert_eq!(cracker.scorer().score(&outcome.plaintext), outcome.score());
    }
}

#[test]
fn test_scripted_sampler_that_never_helps_reverts() {
    let cipher = common::ciphertext();
    let cracker = Cracker::new(common::dictionary(), config(100, 1, 0));
    let mut sampler = ScriptedSampler::new(vec![(0, 0)]);
    let outcome = cracker.crack_with_sampler(&cipher, &mut sampler).unwrap();

    assert!(outcome.reverted);
    assert_eq!(outcome.iterations, 100);
    assert_eq!(outcome.optimized_mapping, outcome.baseline_mapping);
}

#[test]
fn test_same_seed_same_plaintext() {
    let cipher = common::ciphertext();
    let a = Cracker::new(common::dictionary(), config(4_000, 2, 42)).crack(&cipher).unwrap();
    let b = Cracker::new(common::dictionary(), config(4_000, 2, 42)).crack(&cipher).unwrap();
    assert_eq!(a.plaintext, b.plaintext);
    assert_eq!(a.mapping(), b.mapping());
}

#[test]
fn test_plaintext_keeps_layout() {
    let cipher = common::ciphertext();
    let outcome = Cracker::new(common::dictionary(), config(500, 1, 3)).crack(&cipher).unwrap();
    assert_eq!(outcome.plaintext.chars().count(), cipher.chars().count());
    assert_eq!(
        outcome.plaintext.split_whitespace().count(),
        cipher.split_whitespace().count()
    );
    assert_eq!(outcome.plaintext.matches('\n').count(), 4);
}
