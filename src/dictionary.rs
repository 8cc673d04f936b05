//! Dictionary loading and filtering.
//!
//! Raw word lists (frequency lists, scraped text, hand-written files) are full of
//! names, acronyms and fragments. This module normalizes each line, keeps only the
//! entries that look like playable words, and always merges in the curated
//! [`SUPPLEMENT`](crate::data::SUPPLEMENT).
//!
//! The result keeps two views of the same words:
//! - a `HashSet` for O(1) membership checks,
//! - a `Vec` in admission order, used to sample roots by length and to build the
//!   cluster index deterministically.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::data::{BLACKLIST, FALLBACK_WORDS, SUPPLEMENT};
use crate::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

const VOWELS: &[u8] = b"aeiouy";

static BLACKLIST_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLACKLIST.iter().copied().collect());

/// Filtered, deduplicated word list. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    members: HashSet<String>,
    words: Vec<String>,
    admitted: usize,
}

impl Dictionary {
    /// Build a dictionary from raw lines, merged with the curated supplement.
    ///
    /// Lines are trimmed and lowercased; anything failing [`is_admissible`] is
    /// dropped without complaint.
    pub fn from_raw<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        let mut rejected = 0usize;

        for line in lines {
            let word = normalize(line.as_ref());
            if word.is_empty() {
                continue;
            }
            if is_admissible(&word) {
                dictionary.insert(word);
            } else {
                rejected += 1;
            }
        }

        let admitted = dictionary.len();
        dictionary.admitted = admitted;
        for word in SUPPLEMENT {
            dictionary.insert(normalize(word));
        }

        log::debug!(
            "dictionary: {admitted} admitted, {rejected} rejected, {} after supplement",
            dictionary.len()
        );
        dictionary
    }

    /// Build a dictionary from newline-delimited text
    pub fn from_text(text: &str) -> Self {
        Self::from_raw(text.lines())
    }

    /// The offline dictionary
    pub fn fallback() -> Self {
        Self::from_raw(FALLBACK_WORDS.iter())
    }

    fn insert(&mut self, word: String) {
        if self.members.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// How many distinct words came from the raw lines, before the supplement
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(&normalize(word))
    }

    /// Every word, in admission order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words of exactly `length` letters, in admission order
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| w.len() == length)
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Trim and lowercase a raw entry
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether an already-normalized entry may enter the dictionary.
///
/// All of the following must hold:
/// - length between [`MIN_WORD_LENGTH`] and [`MAX_WORD_LENGTH`],
/// - only ASCII `a`–`z`,
/// - at least one of `a e i o u y`,
/// - not in the [`BLACKLIST`].
pub fn is_admissible(word: &str) -> bool {
    (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len())
        && word.bytes().all(|b| b.is_ascii_lowercase())
        && word.bytes().any(|b| VOWELS.contains(&b))
        && !BLACKLIST_SET.contains(word)
}
