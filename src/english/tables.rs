//! Fixed lexical data for the English stemmer.
//!
//! All tables are compiled in and built once on first use. They are only
//! reachable through the read-only lookup functions below.

use std::sync::LazyLock;

use ahash::{AHashMap, AHashSet};

/// The letters treated as vowels by the Porter2 rules.
pub const VOWELS: &str = "aeiouy";

/// Word prefixes whose R1 starts right after the prefix instead of at the
/// first vowel / non-vowel pair.
pub const EXCEPTIONAL_R1_PREFIXES: &[&str] = &["gener", "commun", "arsen"];

/// Snowball English stop words.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do",
    "does", "doesn't", "doing", "don", "don't", "down", "during", "each", "few", "for", "from",
    "further", "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd",
    "he'll", "he's", "her", "here", "here's", "hers", "herself", "him", "himself", "his", "how",
    "how's", "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's",
    "its", "itself", "just", "let's", "me", "more", "most", "mustn't", "my", "myself", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "same", "shan't", "she", "she'd", "she'll",
    "she's", "should", "shouldn't", "so", "some", "such", "than", "that", "that's", "the",
    "their", "theirs", "them", "themselves", "then", "there", "there's", "these", "they",
    "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while", "who",
    "who's", "whom", "why", "why's", "will", "with", "won't", "would", "wouldn't", "you",
    "you'd", "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Irregular forms and their fixed stems.
///
/// The first block is Porter2's exception list; the second block holds every
/// inflection of the words that must survive step 1a untouched.
const SPECIAL_WORDS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
    ("sky", "sky"),
    ("news", "news"),
    ("howe", "howe"),
    ("atlas", "atlas"),
    ("cosmos", "cosmos"),
    ("bias", "bias"),
    ("andes", "andes"),
    //
    ("inning", "inning"),
    ("innings", "inning"),
    ("outing", "outing"),
    ("outings", "outing"),
    ("canning", "canning"),
    ("cannings", "canning"),
    ("herring", "herring"),
    ("herrings", "herring"),
    ("earring", "earring"),
    ("earrings", "earring"),
    ("proceed", "proceed"),
    ("proceeds", "proceed"),
    ("proceeded", "proceed"),
    ("proceeding", "proceed"),
    ("exceed", "exceed"),
    ("exceeds", "exceed"),
    ("exceeded", "exceed"),
    ("exceeding", "exceed"),
    ("succeed", "succeed"),
    ("succeeds", "succeed"),
    ("succeeded", "succeed"),
    ("succeeding", "succeed"),
];

/// Words that end the pipeline when step 1a leaves them behind.
const STEP1A_INVARIANTS: &[&str] = &[
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];

static STOP_WORDS_SET: LazyLock<AHashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static SPECIAL_WORDS_MAP: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| SPECIAL_WORDS.iter().copied().collect());

/// Whether `word` is an English stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS_SET.contains(word)
}

/// The fixed stem of an irregular word, if it is one.
pub fn special_stem(word: &str) -> Option<&'static str> {
    SPECIAL_WORDS_MAP.get(word).copied()
}

/// Whether `word`, once step 1a has run, is left as it is.
pub fn is_step1a_invariant(word: &str) -> bool {
    STEP1A_INVARIANTS.contains(&word)
}

/// Iterate over every stop word.
pub fn stop_words() -> impl Iterator<Item = &'static str> {
    STOP_WORDS.iter().copied()
}

/// Iterate over every special word with its stem.
pub fn special_words() -> impl Iterator<Item = (&'static str, &'static str)> {
    SPECIAL_WORDS.iter().copied()
}
