//! # Rootword
//!
//! Word engine for a root-word puzzle.
//!
//! A level is built from a random 5–7 letter root word: the player has to find every
//! dictionary word that can be spelled from a subset of the root's letters, respecting
//! how many times each letter occurs. The engine filters a raw word list into a
//! [`Dictionary`], groups it into anagram clusters keyed by [`LetterSignature`], and
//! scans those clusters to generate each [`Level`].

pub mod data;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod index;
pub mod level;
pub mod log;
pub mod session;
pub mod signature;
pub mod source;

pub use dictionary::Dictionary;
pub use engine::{LoadOutcome, WordEngine};
pub use error::SourceError;
pub use index::ClusterIndex;
pub use level::Level;
pub use session::{GuessOutcome, Progress};
pub use signature::LetterSignature;
pub use source::{EmbeddedSource, FileSource, TextSource, Unavailable, WordSource};

/// Shortest word admitted to the dictionary
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest word admitted to the dictionary
pub const MAX_WORD_LENGTH: usize = 7;

/// Most valid words a single level keeps
pub const MAX_VALID_WORDS: usize = 12;

/// Root length used when the caller does not ask for one
pub const DEFAULT_LEVEL_LENGTH: usize = 6;

/// Root length tried when the requested length has no candidates
pub const FALLBACK_LEVEL_LENGTH: usize = 5;

/// Root used when neither the requested nor the fallback length has candidates
pub const DEFAULT_ROOT_WORD: &str = "garden";

/// The raw word list compiled into the binary
pub fn embedded_word_list() -> &'static str {
    include_str!("../dictionary/words.txt")
}
