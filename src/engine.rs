//! The word engine: dictionary, cluster index and level generation.
//!
//! A [`WordEngine`] only exists once its dictionary is loaded, so there is no way
//! to query it half-built. After construction it is never mutated; share it by
//! reference (or `Arc`) between any number of readers.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::dictionary::{normalize, Dictionary};
use crate::error::SourceError;
use crate::index::ClusterIndex;
use crate::level::{select_valid_words, shuffled_letters, sort_valid_words, Level};
use crate::signature::LetterSignature;
use crate::source::WordSource;
use crate::{DEFAULT_LEVEL_LENGTH, DEFAULT_ROOT_WORD, FALLBACK_LEVEL_LENGTH};

/// How the dictionary was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Built from the source's word list
    Loaded { words: usize },
    /// The source failed; built from the offline list
    Fallback { words: usize },
}

impl LoadOutcome {
    pub fn is_fallback(self) -> bool {
        matches!(self, LoadOutcome::Fallback { .. })
    }

    pub fn word_count(self) -> usize {
        match self {
            LoadOutcome::Loaded { words } | LoadOutcome::Fallback { words } => words,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordEngine {
    dictionary: Dictionary,
    index: ClusterIndex,
    outcome: LoadOutcome,
}

impl WordEngine {
    /// Load the dictionary from `source` and build the cluster index.
    ///
    /// Never fails: if the source errors, or yields no usable words, the failure
    /// is logged and the offline list is used instead.
    pub fn init<S: WordSource + ?Sized>(source: &S) -> Self {
        let loaded = source.fetch().and_then(|text| {
            let dictionary = Dictionary::from_text(&text);
            if dictionary.admitted() > 0 {
                Ok(dictionary)
            } else {
                Err(SourceError::Malformed {
                    reason: "no admissible words".to_string(),
                })
            }
        });

        let (dictionary, outcome) = match loaded {
            Ok(dictionary) => {
                let words = dictionary.len();
                log::info!("Loaded {words} words");
                (dictionary, LoadOutcome::Loaded { words })
            }
            Err(e) => {
                log::warn!("word source failed ({}): {e}; using offline word list", e.kind());
                let dictionary = Dictionary::fallback();
                let words = dictionary.len();
                (dictionary, LoadOutcome::Fallback { words })
            }
        };

        Self::with_outcome(dictionary, outcome)
    }

    /// Build an engine over an explicit dictionary
    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        let words = dictionary.len();
        Self::with_outcome(dictionary, LoadOutcome::Loaded { words })
    }

    fn with_outcome(dictionary: Dictionary, outcome: LoadOutcome) -> Self {
        let index = ClusterIndex::build(&dictionary);
        Self {
            dictionary,
            index,
            outcome,
        }
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.outcome
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn index(&self) -> &ClusterIndex {
        &self.index
    }

    /// Case-insensitive dictionary lookup
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn generate_default_level(&self) -> Level {
        self.generate_level(DEFAULT_LEVEL_LENGTH)
    }

    pub fn generate_level(&self, target_length: usize) -> Level {
        self.generate_level_with_rng(target_length, &mut rand::thread_rng())
    }

    /// Generate a level drawing all randomness from `rng`
    pub fn generate_level_with_rng<R: Rng + ?Sized>(&self, target_length: usize, rng: &mut R) -> Level {
        let root_word = self.pick_root(target_length, rng);
        let root_letters = LetterSignature::of(&root_word);

        let pool = self.index.sub_words(&root_letters);
        let pool_size = pool.len();
        let mut valid_words = select_valid_words(pool, rng);
        sort_valid_words(&mut valid_words);

        log::debug!(
            "level: root={root_word} pool={pool_size} kept={}",
            valid_words.len()
        );

        Level {
            display_letters: shuffled_letters(&root_word, rng),
            root_word,
            root_letters,
            valid_words,
        }
    }

    /// Requested length, then the fallback length, then the default root
    fn pick_root<R: Rng + ?Sized>(&self, target_length: usize, rng: &mut R) -> String {
        let mut candidates = self.dictionary.words_of_length(target_length);
        if candidates.is_empty() {
            log::debug!("no {target_length}-letter roots, trying {FALLBACK_LEVEL_LENGTH}");
            candidates = self.dictionary.words_of_length(FALLBACK_LEVEL_LENGTH);
        }
        match candidates.choose(rng) {
            Some(word) => (*word).to_string(),
            None => {
                log::debug!("no roots available, using {DEFAULT_ROOT_WORD}");
                normalize(DEFAULT_ROOT_WORD)
            }
        }
    }
}
