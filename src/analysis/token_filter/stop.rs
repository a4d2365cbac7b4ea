//! Stop filter implementation.
//!
//! By default the filter uses the stemmer's own English stop-word table and
//! looks words up the way the stemmer does: case-folded, with apostrophe
//! variants unified. Custom lists are matched verbatim.
//!
//! # Examples
//!
//! ```
//! use porter2::analysis::token::Token;
//! use porter2::analysis::token_filter::Filter;
//! use porter2::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("The", 0), Token::new("quick", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::english::normalize::normalize_word;
use crate::english::tables;
use crate::error::Result;

#[derive(Clone, Debug)]
enum StopWords {
    English,
    Custom(Arc<AHashSet<String>>),
}

/// A filter that removes, or marks, stop words in the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: StopWords,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the English stop-word table.
    ///
    /// ```
    /// use porter2::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(filter.is_stop_word("Don’t"));
    /// assert!(!filter.is_stop_word("hello"));
    /// ```
    pub fn new() -> Self {
        StopFilter {
            stop_words: StopWords::English,
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use porter2::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        StopFilter {
            stop_words: StopWords::Custom(Arc::new(stop_words)),
            remove_stopped: true,
        }
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        match &self.stop_words {
            StopWords::English => tables::is_stop_word(&normalize_word(word)),
            StopWords::Custom(words) => words.contains(word),
        }
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        match &self.stop_words {
            StopWords::English => tables::stop_words().count(),
            StopWords::Custom(words) => words.len(),
        }
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
