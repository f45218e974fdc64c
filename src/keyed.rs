use crate::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, CrResult};
use crate::mapping::Mapping;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl FromStr for Mode {
    type Err = CipherError;

    /// Accepts the mode name or its menu number (`1` encrypt, `2` decrypt).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "encrypt" => Ok(Mode::Encrypt),
            "2" | "decrypt" => Ok(Mode::Decrypt),
            other => {
                let choices: Vec<String> = Mode::iter().map(|m| m.to_string()).collect();
                Err(CipherError::InvalidChoice(format!(
                    "'{}' (expected one of: {})",
                    other,
                    choices.join(", ")
                )))
            }
        }
    }
}

/// Keyword letters in first-seen order, followed by the unused letters
/// in alphabet order. A keyword with no letters yields the plain alphabet.
pub fn build_keyed_alphabet(keyword: &str) -> CrResult<[u8; ALPHABET_LEN]> {
    let mut seen = [false; ALPHABET_LEN];
    let mut keyed = Vec::with_capacity(ALPHABET_LEN);

    for c in keyword.to_lowercase().chars() {
        if let Some(idx) = alphabet::index_of(c) {
            if !seen[idx] {
                seen[idx] = true;
                keyed.push(ALPHABET[idx]);
            }
        }
    }

    for (idx, &letter) in ALPHABET.iter().enumerate() {
        if !seen[idx] {
            keyed.push(letter);
        }
    }

    if !alphabet::is_permutation(&keyed) {
        return Err(CipherError::InvalidKeyedAlphabet(format!(
            "keyword '{}' produced {} symbols",
            keyword,
            keyed.len()
        )));
    }

    let mut out = [0u8; ALPHABET_LEN];
    out.copy_from_slice(&keyed);
    Ok(out)
}

/// Trims a user-supplied key and rejects it if nothing usable remains.
pub fn validate_key(raw: &str) -> CrResult<String> {
    let key = raw.trim();
    if key.is_empty() || !key.to_lowercase().chars().any(|c| alphabet::index_of(c).is_some()) {
        return Err(CipherError::EmptyKey);
    }
    Ok(key.to_string())
}

/// Strips ASCII punctuation and lower-cases the rest. Whitespace survives.
pub fn preprocess(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Keyword substitution cipher: plain `ALPHABET[i]` encrypts to `keyed[i]`.
#[derive(Debug, Clone, Copy)]
pub struct KeyedCipher {
    encrypt_map: Mapping,
    decrypt_map: Mapping,
}

impl KeyedCipher {
    pub fn new(keyword: &str) -> CrResult<Self> {
        let keyed = build_keyed_alphabet(keyword)?;
        let encrypt_map = Mapping::from_plain_letters(&keyed)?;
        Ok(Self {
            encrypt_map,
            decrypt_map: encrypt_map.inverse(),
        })
    }

    pub fn keyed_alphabet(&self) -> String {
        self.encrypt_map.to_string()
    }

    pub fn encrypt(&self, text: &str) -> String {
        self.encrypt_map.apply(&preprocess(text))
    }

    pub fn decrypt(&self, text: &str) -> String {
        self.decrypt_map.apply(text)
    }

    pub fn transform(&self, mode: Mode, text: &str) -> String {
        match mode {
            Mode::Encrypt => self.encrypt(text),
            Mode::Decrypt => self.decrypt(text),
        }
    }
}
