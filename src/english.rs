//! Porter2 (Snowball English) stemming.
//!
//! The pipeline is split into small pure stages, leaves first:
//!
//! - [`tables`] - stop words, special words and the other fixed data
//! - [`letter`] - vowel classification and the tagged [`Letter`] type
//! - [`normalize`] - case folding, apostrophes and consonant-Y marking
//! - [`region`] - R1 / R2 and the short-syllable checks
//! - [`steps`] - the suffix-stripping steps 0 through 5
//! - [`stemmer`] - the [`EnglishStemmer`] facade tying them together
//!
//! # Examples
//!
//! ```
//! use porter2::english;
//!
//! assert_eq!(english::stem("consignment"), "consign");
//! assert_eq!(english::stem("skies"), "sky");
//! ```

pub mod letter;
pub mod normalize;
pub mod region;
pub mod stemmer;
pub mod steps;
pub mod tables;
pub mod word;

use std::sync::LazyLock;

pub use letter::Letter;
pub use normalize::{capitalize_ys, normalize_apostrophes, preprocess_word};
pub use region::{r1r2, vnv_suffix};
pub use stemmer::{EnglishStemmer, Outcome, StemTrace, StemmerConfig, StepTrace};
pub use steps::{step0, step1a, step1b, step1c, step2, step3, step4, step5};
pub use tables::{is_stop_word, special_stem};
pub use word::Word;

static DEFAULT_STEMMER: LazyLock<EnglishStemmer> = LazyLock::new(EnglishStemmer::new);

/// Stem `word` with the default configuration.
pub fn stem(word: &str) -> String {
    DEFAULT_STEMMER.stem(word)
}
