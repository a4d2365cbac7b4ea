//! Token-stream integration for the stemmer.
//!
//! An upstream tokenizer hands over [`token::Token`]s; the filters in
//! [`token_filter`] mark stop words and replace each remaining token's text
//! with its stem.

pub mod token;
pub mod token_filter;

pub use token::{IntoTokenStream, Token, TokenStream};
pub use token_filter::{Filter, StemFilter, Stemmer, StopFilter};
