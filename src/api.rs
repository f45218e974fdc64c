use crate::config::Config;
use crate::cracker::{check_cipher_length, CrackOutcome, Cracker};
use crate::error::{CipherError, CrResult};
use crate::keyed::{self, KeyedCipher, Mode};
use crate::optimizer::runner::ProgressCallback;
use crate::scorer::Dictionary;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a keyword comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    Inline(String),
    File(PathBuf),
}

impl KeySource {
    /// Exactly one of the two must be given.
    pub fn from_options(inline: Option<String>, file: Option<PathBuf>) -> CrResult<Self> {
        match (inline, file) {
            (Some(k), None) => Ok(Self::Inline(k)),
            (None, Some(p)) => Ok(Self::File(p)),
            (Some(_), Some(_)) => Err(CipherError::InvalidChoice(
                "give either a key or a key file, not both".to_string(),
            )),
            (None, None) => Err(CipherError::InvalidChoice(
                "no key given (use a key or a key file)".to_string(),
            )),
        }
    }

    pub fn resolve(&self) -> CrResult<String> {
        match self {
            Self::Inline(k) => keyed::validate_key(k),
            Self::File(p) => keyed::validate_key(&read_text_file(p)?),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CrackReport {
    /// Plain letter for each cipher letter a..z.
    pub mapping: String,
    pub baseline_mapping: String,
    pub baseline_score: usize,
    pub optimized_score: usize,
    pub final_score: usize,
    pub reverted: bool,
    pub accepted_swaps: usize,
    pub iterations: usize,
    pub chain: usize,
}

impl From<&CrackOutcome> for CrackReport {
    fn from(o: &CrackOutcome) -> Self {
        Self {
            mapping: o.mapping().to_string(),
            baseline_mapping: o.baseline_mapping.to_string(),
            baseline_score: o.baseline_score,
            optimized_score: o.optimized_score,
            final_score: o.score(),
            reverted: o.reverted,
            accepted_swaps: o.accepted,
            iterations: o.iterations,
            chain: o.chain,
        }
    }
}

pub fn read_text_file<P: AsRef<Path>>(path: P) -> CrResult<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_text_file<P: AsRef<Path>>(path: P, content: &str) -> CrResult<()> {
    Ok(fs::write(path, content)?)
}

pub fn save_key<P: AsRef<Path>>(path: P, key: &str) -> CrResult<()> {
    write_text_file(&path, key)?;
    info!("🔑 Key saved to {}", path.as_ref().display());
    Ok(())
}

/// Service: encrypt or decrypt `input` into `output` with `key`.
pub fn transform_file<P: AsRef<Path>, Q: AsRef<Path>>(
    mode: Mode,
    input: P,
    output: Q,
    key: &str,
) -> CrResult<()> {
    let cipher = KeyedCipher::new(key)?;
    let text = read_text_file(&input)?;
    let result = cipher.transform(mode, &text);
    write_text_file(&output, &result)?;
    info!(
        "✅ {} {} -> {} ({} chars)",
        mode,
        input.as_ref().display(),
        output.as_ref().display(),
        result.chars().count()
    );
    Ok(())
}

/// Service: crack `input` with the word list at `dictionary_path`, write the
/// chosen plaintext to `output`. Nothing is written if any step fails.
pub fn crack_file<P, Q, D, CB>(
    input: P,
    output: Q,
    dictionary_path: D,
    config: Config,
    callback: &CB,
) -> CrResult<CrackOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    D: AsRef<Path>,
    CB: ProgressCallback,
{
    let ciphertext = read_text_file(&input)?;
    info!(
        "📂 Read {} characters from {}",
        ciphertext.chars().count(),
        input.as_ref().display()
    );

    check_cipher_length(&ciphertext, config.scoring.min_cipher_len)?;

    let dictionary = Dictionary::load_from_file(dictionary_path)?;
    let cracker = Cracker::new(dictionary, config);
    let outcome = cracker.crack_with_progress(&ciphertext, callback)?;

    write_text_file(&output, &outcome.plaintext)?;
    info!("✅ Cracked text written to {}", output.as_ref().display());
    Ok(outcome)
}

pub fn write_report<P: AsRef<Path>>(path: P, report: &CrackReport) -> CrResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_text_file(path, &json)
}
