use crate::error::{CipherError, CrResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Lower-cased, alphabetic-only word list. Immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashSet::new();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            match normalize(&line) {
                Some(w) => {
                    words.insert(w);
                }
                None => skipped += 1,
            }
        }

        debug!("Dictionary: kept {} words, skipped {} lines", words.len(), skipped);
        Ok(Self { words })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CrResult<Self> {
        let path = path.as_ref();
        let wrap = |source: io::Error| CipherError::DictionaryLoad {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(wrap)?;
        let dict = Self::from_reader(BufReader::new(file)).map_err(wrap)?;
        info!("📖 Loaded {} dictionary words from {}", dict.len(), path.display());
        Ok(dict)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .filter_map(|w| normalize(w.as_ref()))
                .collect(),
        }
    }

    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(line: &str) -> Option<String> {
    let w = line.trim().to_lowercase();
    if !w.is_empty() && w.chars().all(char::is_alphabetic) {
        Some(w)
    } else {
        None
    }
}
