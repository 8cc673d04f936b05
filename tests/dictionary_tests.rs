use std::collections::HashSet;

use rootword::data::{BLACKLIST, FALLBACK_WORDS, SUPPLEMENT};
use rootword::dictionary::is_admissible;
use rootword::{Dictionary, EmbeddedSource, WordEngine, MAX_WORD_LENGTH, MIN_WORD_LENGTH};

fn assert_admissible(word: &str) {
    assert!(
        (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()),
        "bad length: {}",
        word
    );
    assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "not a-z: {}", word);
    assert!(word.bytes().any(|b| b"aeiouy".contains(&b)), "no vowel: {}", word);
    assert!(!BLACKLIST.contains(&word), "blacklisted: {}", word);
}

#[test]
fn test_embedded_dictionary_invariants() {
    let engine = WordEngine::init(&EmbeddedSource);
    assert!(!engine.load_outcome().is_fallback());

    let dictionary = engine.dictionary();
    assert!(dictionary.len() > 500);
    for word in dictionary.words() {
        assert_admissible(word);
    }
}

#[test]
fn test_normalizes_case_and_whitespace() {
    let dictionary = Dictionary::from_raw(["  Rain ", "STAIR", "\ttrain\t"]);
    assert!(dictionary.contains("rain"));
    assert!(dictionary.contains("stair"));
    assert!(dictionary.contains("train"));
    assert!(dictionary.words().iter().all(|w| w == &w.to_lowercase()));
}

#[test]
fn test_filter_rejects_bad_entries() {
    let dictionary = Dictionary::from_raw([
        "cat",      // too short
        "strainer", // too long
        "co-op",    // punctuation
        "42nd",     // digits
        "crwth",    // no vowel
        "john",     // blacklisted name
        "html",     // jargon
        "sept",     // date fragment
        "café",     // non-ascii
        "rhythm",   // 'y' counts as a vowel
    ]);

    for rejected in ["cat", "strainer", "co-op", "42nd", "crwth", "john", "html", "sept", "café"] {
        assert!(!dictionary.contains(rejected), "{} should be rejected", rejected);
    }
    assert!(dictionary.contains("rhythm"));
}

#[test]
fn test_is_admissible() {
    assert!(is_admissible("rain"));
    assert!(is_admissible("strains"));
    assert!(!is_admissible("rai"));
    assert!(!is_admissible("straining"));
    assert!(!is_admissible("Rain"));
    assert!(!is_admissible("tsktsk"));
    assert!(!is_admissible("google"));
}

#[test]
fn test_supplement_always_present() {
    let from_source = Dictionary::from_raw(["rain"]);
    let fallback = Dictionary::fallback();
    for word in SUPPLEMENT {
        assert!(from_source.contains(word), "missing supplement word {}", word);
        assert!(fallback.contains(word), "fallback missing supplement word {}", word);
    }
}

#[test]
fn test_deduplicates_and_keeps_first_order() {
    let dictionary = Dictionary::from_raw(["train", "rain", "TRAIN", "rain", "glade"]);
    let words = dictionary.words();
    let unique: HashSet<&String> = words.iter().collect();
    assert_eq!(unique.len(), words.len());
    assert_eq!(&words[0], "train");
    assert_eq!(&words[1], "rain");
    assert_eq!(&words[2], "glade");
}

#[test]
fn test_fallback_list_shape() {
    assert!(Dictionary::fallback().len() >= 40);
    for len in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
        assert!(
            FALLBACK_WORDS.iter().any(|w| w.len() == len),
            "fallback list has no {}-letter word",
            len
        );
    }
    for word in FALLBACK_WORDS {
        assert_admissible(word);
    }
}

#[test]
fn test_membership_is_case_insensitive_and_stable() {
    let engine = WordEngine::init(&EmbeddedSource);
    let size = engine.dictionary().len();

    for _ in 0..3 {
        assert!(engine.is_valid_word("garden"));
        assert!(engine.is_valid_word("GARDEN"));
        assert!(engine.is_valid_word(" Garden "));
        assert!(!engine.is_valid_word("gardenx"));
        assert!(!engine.is_valid_word("john"));
    }
    assert_eq!(engine.dictionary().len(), size);
}
