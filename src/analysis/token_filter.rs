//! Token filter implementations for token transformation.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Marks or removes stop words
//! - [`stem::StemFilter`] - Reduces words to their stem form
//!
//! # Examples
//!
//! ```
//! use porter2::analysis::token::Token;
//! use porter2::analysis::token_filter::Filter;
//! use porter2::analysis::token_filter::stem::StemFilter;
//! use porter2::analysis::token_filter::stop::StopFilter;
//!
//! let tokens = vec![Token::new("the", 0), Token::new("running", 1)];
//! let stopped = StopFilter::new()
//!     .remove_stopped(false)
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap();
//! let stemmed: Vec<_> = StemFilter::new().filter(stopped).unwrap().collect();
//!
//! assert!(stemmed[0].is_stopped());
//! assert_eq!(stemmed[1].text, "run");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Stop Words → Stemmer → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stem;
pub mod stop;

pub use stem::{StemFilter, Stemmer};
pub use stop::StopFilter;
