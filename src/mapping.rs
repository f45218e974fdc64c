use crate::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, CrResult};
use std::fmt;

/// A cipher-to-plain substitution over the 26-letter alphabet.
///
/// Slot `i` holds the plain letter for cipher letter `ALPHABET[i]`. Every
/// constructor checks the table is a permutation, and the only mutation is a
/// swap of two slots, so the bijection holds for the life of the value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mapping {
    plain: [u8; ALPHABET_LEN],
}

impl Mapping {
    pub fn identity() -> Self {
        Self { plain: *ALPHABET }
    }

    /// Builds a mapping from the plain letters listed in cipher-alphabet order.
    pub fn from_plain_letters(letters: &[u8]) -> CrResult<Self> {
        if !alphabet::is_permutation(letters) {
            return Err(CipherError::InvalidKeyedAlphabet(format!(
                "'{}' is not a permutation of the {} letter alphabet",
                String::from_utf8_lossy(letters),
                ALPHABET_LEN
            )));
        }
        let mut plain = [0u8; ALPHABET_LEN];
        plain.copy_from_slice(letters);
        Ok(Self { plain })
    }

    #[inline(always)]
    pub fn get(&self, cipher_idx: usize) -> u8 {
        self.plain[cipher_idx]
    }

    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.plain.swap(a, b);
    }

    /// Copy of `self` with the plain assignments of cipher slots `a` and `b` exchanged.
    #[inline(always)]
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut next = *self;
        next.swap(a, b);
        next
    }

    pub fn inverse(&self) -> Self {
        let mut plain = [0u8; ALPHABET_LEN];
        for (cipher_idx, &p) in self.plain.iter().enumerate() {
            plain[(p - b'a') as usize] = alphabet::letter_at(cipher_idx);
        }
        Self { plain }
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.plain
    }

    /// Lower-cases `text` and substitutes every alphabet letter.
    /// Anything outside the alphabet is copied through untouched.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            for lc in ch.to_lowercase() {
                match alphabet::index_of(lc) {
                    Some(idx) => out.push(self.plain[idx] as char),
                    None => out.push(lc),
                }
            }
        }
        out
    }
}

impl Default for Mapping {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.plain {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mapping({})", self)
    }
}
