//! The English stemmer facade.
//!
//! [`EnglishStemmer`] normalizes a word, short-circuits stop words and
//! irregular forms, and otherwise drives the steps in order:
//!
//! ```text
//! normalize → stop / special check → regions → 0 → 1a → 1b → 1c → 2 → 3 → 4 → 5
//! ```
//!
//! # Examples
//!
//! ```
//! use porter2::english::EnglishStemmer;
//!
//! let stemmer = EnglishStemmer::new();
//! assert_eq!(stemmer.stem("generously"), "generous");
//! assert_eq!(stemmer.stem("Kyle’s"), "kyle");
//! assert_eq!(stemmer.stem("was"), "was");
//! ```

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::analysis::token_filter::stem::Stemmer;
use crate::english::normalize::{APOSTROPHE, normalize_apostrophes, normalize_word};
use crate::english::steps::{step0, step1a, step1b, step1c, step2, step3, step4, step5};
use crate::english::tables::{is_step1a_invariant, is_stop_word, special_stem};
use crate::english::word::Word;
use crate::error::{Result, StemError};

/// Largest accepted `min_word_length`.
const MAX_MIN_WORD_LENGTH: usize = 64;

/// Configuration for [`EnglishStemmer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Run stop words through the pipeline instead of returning them as is.
    pub stem_stop_words: bool,
    /// Words with fewer letters than this are returned normalized but
    /// otherwise untouched. Zero disables the rule.
    pub min_word_length: usize,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            stem_stop_words: false,
            min_word_length: 3,
        }
    }
}

impl StemmerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StemmerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_word_length > MAX_MIN_WORD_LENGTH {
            return Err(StemError::config(format!(
                "min_word_length must be at most {MAX_MIN_WORD_LENGTH}, got {}",
                self.min_word_length
            )));
        }
        Ok(())
    }
}

/// How a word left the stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Shorter than the configured minimum length.
    TooShort,
    /// Found in the stop-word table.
    StopWord,
    /// Found in the special-word table.
    SpecialWord,
    /// Left unchanged by step 1a and kept as is from there on.
    Step1aInvariant,
    /// Went through every step.
    Stemmed,
}

/// A snapshot of the word after one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTrace {
    pub step: String,
    pub word: String,
    pub r1: String,
    pub r2: String,
}

impl StepTrace {
    fn capture(step: &str, word: &Word) -> Self {
        StepTrace {
            step: step.to_string(),
            word: word.marked(),
            r1: word.r1(),
            r2: word.r2(),
        }
    }
}

/// Everything the stemmer did to one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemTrace {
    pub input: String,
    pub normalized: String,
    pub outcome: Outcome,
    pub steps: Vec<StepTrace>,
    pub stem: String,
}

/// Porter2 stemmer for English.
#[derive(Debug, Clone, Default)]
pub struct EnglishStemmer {
    config: StemmerConfig,
}

impl EnglishStemmer {
    /// Create a stemmer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StemmerConfig) -> Self {
        EnglishStemmer { config }
    }

    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    /// Stem a single word.
    pub fn stem(&self, raw: &str) -> String {
        self.run(raw, |_, _| {}).1
    }

    /// Stem every word of `words`, in parallel. The output keeps the input
    /// order.
    pub fn stem_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        words
            .par_iter()
            .map(|word| self.stem(word.as_ref()))
            .collect()
    }

    /// Stem a word and record the word and regions after every step.
    pub fn explain(&self, raw: &str) -> StemTrace {
        let mut steps = Vec::new();
        let (outcome, stem) = self.run(raw, |step, word| {
            steps.push(StepTrace::capture(step, word));
        });
        StemTrace {
            input: raw.to_string(),
            normalized: normalize_word(raw),
            outcome,
            steps,
            stem,
        }
    }

    fn run<F>(&self, raw: &str, mut observe: F) -> (Outcome, String)
    where
        F: FnMut(&str, &Word),
    {
        // The length gate sees the leading apostrophe; the pipeline does not.
        let folded = normalize_apostrophes(&raw.trim().to_lowercase());
        if folded.chars().count() < self.config.min_word_length {
            return (Outcome::TooShort, folded);
        }
        let normalized = folded
            .strip_prefix(APOSTROPHE)
            .map_or_else(|| folded.clone(), str::to_string);
        if !self.config.stem_stop_words && is_stop_word(&normalized) {
            trace!(word = %normalized, "stop word left unstemmed");
            return (Outcome::StopWord, normalized);
        }
        if let Some(stem) = special_stem(&normalized) {
            trace!(word = %normalized, stem, "special word");
            return (Outcome::SpecialWord, stem.to_string());
        }

        let mut word = Word::from_normalized(&normalized).compute_regions();
        observe("prelude", &word);

        word = step0(word);
        observe("step0", &word);
        word = step1a(word);
        observe("step1a", &word);

        let stem = word.to_stem();
        if is_step1a_invariant(&stem) {
            return (Outcome::Step1aInvariant, stem);
        }

        let steps: [(&str, fn(Word) -> Word); 6] = [
            ("step1b", step1b),
            ("step1c", step1c),
            ("step2", step2),
            ("step3", step3),
            ("step4", step4),
            ("step5", step5),
        ];
        for (name, step) in steps {
            word = step(word);
            observe(name, &word);
        }

        (Outcome::Stemmed, word.to_stem())
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        EnglishStemmer::stem(self, word)
    }

    fn name(&self) -> &'static str {
        "porter2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::english::tables::{special_words, stop_words};

    #[test]
    fn test_stem_vocabulary() {
        let stemmer = EnglishStemmer::new();
        let cases = [
            ("consign", "consign"),
            ("consigned", "consign"),
            ("consigning", "consign"),
            ("consignment", "consign"),
            ("consistently", "consist"),
            ("generously", "generous"),
            ("generalities", "general"),
            ("knackeries", "knackeri"),
            ("kneaded", "knead"),
            ("luxuriating", "luxuri"),
            ("relational", "relat"),
            ("sensational", "sensat"),
            ("national", "nation"),
            ("beautiful", "beauti"),
            ("happily", "happili"),
            ("running", "run"),
            ("hoping", "hope"),
            ("caresses", "caress"),
            ("flies", "fli"),
            ("dies", "die"),
            ("mules", "mule"),
            ("denied", "deni"),
            ("agreed", "agre"),
            ("cry", "cri"),
            ("say", "say"),
            ("toy", "toy"),
            ("communism", "communism"),
            ("arsenal", "arsenal"),
            ("crepuscular", "crepuscular"),
        ];
        for (word, expected) in cases {
            assert_eq!(stemmer.stem(word), expected, "stemming {word}");
        }
    }

    #[test]
    fn test_possessives_and_apostrophes() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem("general's"), "general");
        assert_eq!(stemmer.stem("general's'"), "general");
        assert_eq!(stemmer.stem("spices'"), "spice");
        assert_eq!(stemmer.stem("Kyle’s"), "kyle");
    }

    #[test]
    fn test_boundaries() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.stem("x"), "x");
        assert_eq!(stemmer.stem("by"), "by");
        assert_eq!(stemmer.stem("  Running  "), "run");
        assert_eq!(stemmer.stem("1990s"), "1990s");
        assert_eq!(stemmer.stem("'''"), "'");
        assert_eq!(stemmer.stem("'x"), "'x");
    }

    #[test]
    fn test_quoted_short_words_keep_step0() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.stem("'a'"), "a");
        assert_eq!(stemmer.stem("\u{2018}x\u{2019}"), "x");
        assert_eq!(stemmer.stem("'o'"), "o");
        assert_eq!(stemmer.explain("'a'").outcome, Outcome::Stemmed);
    }

    #[test]
    fn test_stop_words_are_untouched() {
        let stemmer = EnglishStemmer::new();
        for word in stop_words() {
            assert_eq!(stemmer.stem(word), word);
        }
        assert_eq!(stemmer.stem("Was"), "was");
    }

    #[test]
    fn test_stem_stop_words() {
        let stemmer = EnglishStemmer::with_config(StemmerConfig {
            stem_stop_words: true,
            ..StemmerConfig::default()
        });
        assert_eq!(stemmer.stem("only"), "onli");
        assert_eq!(stemmer.stem("ourselves"), "ourselv");
    }

    #[test]
    fn test_special_words_use_fixed_stems() {
        let stemmer = EnglishStemmer::new();
        for (word, stem) in special_words() {
            if is_stop_word(word) {
                continue;
            }
            assert_eq!(stemmer.stem(word), stem);
        }
        assert_eq!(stemmer.stem("exceeding"), "exceed");
        assert_eq!(stemmer.stem("early"), "earli");
        assert_eq!(stemmer.stem("outing"), "outing");
    }

    #[test]
    fn test_step1a_invariant_after_possessive() {
        let stemmer = EnglishStemmer::new();
        let trace = stemmer.explain("outing's");
        assert_eq!(trace.outcome, Outcome::Step1aInvariant);
        assert_eq!(trace.stem, "outing");
    }

    #[test]
    fn test_min_word_length() {
        let stemmer = EnglishStemmer::with_config(StemmerConfig {
            min_word_length: 0,
            ..StemmerConfig::default()
        });
        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem(""), "");

        let stemmer = EnglishStemmer::with_config(StemmerConfig {
            min_word_length: 8,
            ..StemmerConfig::default()
        });
        assert_eq!(stemmer.stem("running"), "running");
    }

    #[test]
    fn test_explain_records_every_step() {
        let trace = EnglishStemmer::new().explain("Hopefulness");
        assert_eq!(trace.normalized, "hopefulness");
        assert_eq!(trace.outcome, Outcome::Stemmed);
        let names: Vec<&str> = trace.steps.iter().map(|s| s.step.as_str()).collect();
        assert_eq!(
            names,
            [
                "prelude", "step0", "step1a", "step1b", "step1c", "step2", "step3", "step4",
                "step5"
            ]
        );
        assert_eq!(trace.steps[0].r1, "efulness");
        assert_eq!(trace.stem, "hope");
    }

    #[test]
    fn test_explain_short_circuits() {
        let stemmer = EnglishStemmer::new();
        assert_eq!(stemmer.explain("the").outcome, Outcome::StopWord);
        assert_eq!(stemmer.explain("skies").outcome, Outcome::SpecialWord);
        assert_eq!(stemmer.explain("ox").outcome, Outcome::TooShort);
        assert!(stemmer.explain("the").steps.is_empty());
    }

    #[test]
    fn test_stem_batch_keeps_order() {
        let stemmer = EnglishStemmer::new();
        let words = ["running", "the", "generously", "cries"];
        assert_eq!(
            stemmer.stem_batch(&words),
            vec!["run", "the", "generous", "cri"]
        );
    }

    #[test]
    fn test_config_from_json() {
        let config = StemmerConfig::from_json_str(r#"{"stem_stop_words": true}"#).unwrap();
        assert!(config.stem_stop_words);
        assert_eq!(config.min_word_length, 3);

        let err = StemmerConfig::from_json_str(r#"{"min_word_length": 1000}"#).unwrap_err();
        assert!(matches!(err, StemError::Config(_)));

        let err = StemmerConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, StemError::Json(_)));
    }

    #[test]
    fn test_stemmer_trait() {
        let stemmer: Box<dyn Stemmer> = Box::new(EnglishStemmer::new());
        assert_eq!(stemmer.name(), "porter2");
        assert_eq!(stemmer.stem("flies"), "fli");
    }
}
