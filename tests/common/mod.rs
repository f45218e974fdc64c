#![allow(dead_code)] // each test binary uses a different subset

use monocrack::keyed::KeyedCipher;
use monocrack::scorer::Dictionary;

pub const PASSAGE: &str = "Travellers crossing the northern mountains described \
ancient villages hidden beneath frozen forests. Every morning merchants gathered \
around the harbour market, exchanging colourful stories about distant kingdoms, \
forgotten libraries and mysterious lanterns glowing across silent valleys. \
Children listened carefully while grandparents remembered summers spent fishing \
beside quiet rivers.\n";

/// Every word of `PASSAGE` longer than five letters, plus a few fillers.
pub const WORDS: &[&str] = &[
    "travellers",
    "crossing",
    "northern",
    "mountains",
    "described",
    "ancient",
    "villages",
    "hidden",
    "beneath",
    "frozen",
    "forests",
    "morning",
    "merchants",
    "gathered",
    "around",
    "harbour",
    "market",
    "exchanging",
    "colourful",
    "stories",
    "distant",
    "kingdoms",
    "forgotten",
    "libraries",
    "mysterious",
    "lanterns",
    "glowing",
    "across",
    "silent",
    "valleys",
    "children",
    "listened",
    "carefully",
    "grandparents",
    "remembered",
    "summers",
    "fishing",
    "beside",
    "rivers",
    "the",
    "and",
    "every",
];

pub const KEYWORD: &str = "zebra";

/// `PASSAGE` repeated until it is comfortably over 1000 characters.
pub fn long_plaintext() -> String {
    PASSAGE.repeat(4)
}

pub fn dictionary() -> Dictionary {
    Dictionary::from_words(WORDS)
}

pub fn ciphertext() -> String {
    KeyedCipher::new(KEYWORD).unwrap().encrypt(&long_plaintext())
}

/// What the cracker should ideally print for `ciphertext()`.
pub fn expected_plaintext() -> String {
    monocrack::keyed::preprocess(&long_plaintext())
}
