//! Player progress through a level.
//!
//! The engine hands out immutable [`Level`]s; the words a player has found so far
//! belong to the game session and are tracked here.

use std::collections::BTreeSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::dictionary::normalize;
use crate::engine::WordEngine;
use crate::level::Level;
use crate::signature::can_spell;
use crate::MIN_WORD_LENGTH;

/// What happened to a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Shorter than the minimum word length
    TooShort,
    /// A valid word not found before; now recorded
    Found,
    /// A valid word the player already has
    AlreadyFound,
    /// A real word spellable from the letters, but not one of this level's words
    NotInPuzzle,
    /// A real word that needs letters the root does not have
    WrongLetters,
    /// Not in the dictionary
    NotAWord,
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GuessOutcome::TooShort => "too short",
            GuessOutcome::Found => "found",
            GuessOutcome::AlreadyFound => "already found",
            GuessOutcome::NotInPuzzle => "a word, but not in this puzzle",
            GuessOutcome::WrongLetters => "uses letters you don't have",
            GuessOutcome::NotAWord => "not a word",
        };
        f.write_str(msg)
    }
}

/// Found words for one level
#[derive(Debug, Clone)]
pub struct Progress {
    level: Level,
    display_letters: Vec<char>,
    found: BTreeSet<String>,
}

impl Progress {
    pub fn new(level: Level) -> Self {
        Self {
            display_letters: level.display_letters.clone(),
            level,
            found: BTreeSet::new(),
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Letters in their current on-screen order
    pub fn display_letters(&self) -> &[char] {
        &self.display_letters
    }

    pub fn display_string(&self) -> String {
        self.display_letters.iter().collect()
    }

    /// Shuffle the on-screen letters; the level itself is untouched
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.display_letters.shuffle(rng);
    }

    /// Classify a guess, recording it if it is a new valid word
    pub fn submit(&mut self, guess: &str, engine: &WordEngine) -> GuessOutcome {
        let word = normalize(guess);
        if word.chars().count() < MIN_WORD_LENGTH {
            return GuessOutcome::TooShort;
        }
        if self.level.contains(&word) {
            return if self.found.insert(word) {
                GuessOutcome::Found
            } else {
                GuessOutcome::AlreadyFound
            };
        }
        if !engine.is_valid_word(&word) {
            return GuessOutcome::NotAWord;
        }
        if can_spell(&word, &self.level.root_letters) {
            GuessOutcome::NotInPuzzle
        } else {
            GuessOutcome::WrongLetters
        }
    }

    pub fn found(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(String::as_str)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Valid words not found yet, in level order
    pub fn remaining(&self) -> Vec<&str> {
        self.level
            .valid_words
            .iter()
            .filter(|w| !self.found.contains(*w))
            .map(String::as_str)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() == self.level.valid_words.len()
    }
}
