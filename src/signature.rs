//! Letter signatures: the sorted letters of a word.
//!
//! Two words share a signature exactly when they are anagrams of each other, which
//! makes the signature the key of the [`crate::ClusterIndex`].

use std::fmt;

const ALPHABET_SIZE: usize = 26;

/// The letters of a word sorted ascending, e.g. `"strain"` → `"ainrst"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSignature(String);

impl LetterSignature {
    /// Compute the signature of a word. Input is lowercased first.
    pub fn of(word: &str) -> Self {
        let mut letters: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
        letters.sort_unstable();
        Self(letters.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Multiset containment: every letter of `self` occurs in `root` at least as
    /// many times as it does in `self`.
    pub fn is_subset_of(&self, root: &LetterSignature) -> bool {
        if self.len() > root.len() {
            return false;
        }
        let Some(mut available) = letter_counts(root.as_str()) else {
            return false;
        };
        for b in self.0.bytes() {
            if !b.is_ascii_lowercase() {
                return false;
            }
            let idx = (b - b'a') as usize;
            if available[idx] == 0 {
                return false;
            }
            available[idx] -= 1;
        }
        true
    }
}

impl fmt::Display for LetterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LetterSignature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether `word` can be spelled from the letters of `root`
pub fn can_spell(word: &str, root: &LetterSignature) -> bool {
    LetterSignature::of(word).is_subset_of(root)
}

/// Per-letter counts for a lowercase ASCII string; `None` if it holds anything else
fn letter_counts(s: &str) -> Option<[usize; ALPHABET_SIZE]> {
    let mut counts = [0usize; ALPHABET_SIZE];
    for b in s.bytes() {
        if !b.is_ascii_lowercase() {
            return None;
        }
        counts[(b - b'a') as usize] += 1;
    }
    Some(counts)
}
