//! Levels and the randomized steps of building one.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::signature::LetterSignature;
use crate::MAX_VALID_WORDS;

/// One puzzle. Immutable once generated; the player's found words and any
/// later reshuffles of the letters live in [`crate::Progress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// The word the letters were taken from
    pub root_word: String,
    /// Signature of the root word
    pub root_letters: LetterSignature,
    /// The root's letters, uppercased, in a random order for display
    pub display_letters: Vec<char>,
    /// Words to find, ordered by length then alphabetically
    pub valid_words: Vec<String>,
}

impl Level {
    pub fn contains(&self, word: &str) -> bool {
        self.valid_words.iter().any(|w| w == word)
    }
}

/// Cap the candidate pool at [`MAX_VALID_WORDS`].
///
/// Small pools are kept whole. Larger pools give each word the score
/// `u^(1/len)` with `u` uniform in `[0, 1)` and keep the highest scores, which
/// tilts the pick toward longer words without excluding short ones.
pub fn select_valid_words<R: Rng + ?Sized>(pool: Vec<&str>, rng: &mut R) -> Vec<String> {
    if pool.len() <= MAX_VALID_WORDS {
        return pool.into_iter().map(str::to_string).collect();
    }

    let mut scored: Vec<(f64, &str)> = pool
        .into_iter()
        .map(|word| {
            let u: f64 = rng.gen();
            (u.powf(1.0 / word.len() as f64), word)
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(MAX_VALID_WORDS);
    scored.into_iter().map(|(_, w)| w.to_string()).collect()
}

/// Sort by length, then alphabetically
pub fn sort_valid_words(words: &mut [String]) {
    words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
}

/// Uppercased letters of `root_word` in a uniformly random order
pub fn shuffled_letters<R: Rng + ?Sized>(root_word: &str, rng: &mut R) -> Vec<char> {
    let mut letters: Vec<char> = root_word.chars().map(|c| c.to_ascii_uppercase()).collect();
    letters.shuffle(rng);
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_small_pool_is_kept_whole() {
        let mut rng = StdRng::seed_from_u64(7);
        let kept = select_valid_words(vec!["rain", "rant", "stair"], &mut rng);
        assert_eq!(kept, vec!["rain", "rant", "stair"]);
    }

    #[test]
    fn test_sort_by_length_then_alpha() {
        let mut words = vec!["stair".to_string(), "rant".to_string(), "rain".to_string()];
        sort_valid_words(&mut words);
        assert_eq!(words, vec!["rain", "rant", "stair"]);
    }
}
