//! Token types flowing through the token filters.
//!
//! Tokens arrive from an upstream tokenizer, which is outside this crate;
//! the filters here only transform them.
//!
//! # Examples
//!
//! ```
//! use porter2::analysis::token::Token;
//!
//! let token = Token::with_offsets("Running", 1, 6, 13);
//! assert_eq!(token.text, "Running");
//! assert_eq!(token.start_offset, 6);
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word together with its place in the source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped by a filter
    pub stopped: bool,

    /// The text before any filter rewrote it
    pub original_text: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
            original_text: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the text, remembering the first text this token carried.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        let text = text.into();
        if self.original_text.is_none() && text != self.text {
            self.original_text = Some(std::mem::replace(&mut self.text, text));
        } else {
            self.text = text;
        }
        self
    }

    /// The text before any filter rewrote it.
    pub fn original(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert!(!token.stopped);
        assert!(token.original_text.is_none());
    }

    #[test]
    fn test_with_text_keeps_first_original() {
        let token = Token::new("Running", 0)
            .with_text("running")
            .with_text("run");
        assert_eq!(token.text, "run");
        assert_eq!(token.original(), "Running");
    }

    #[test]
    fn test_with_same_text_records_nothing() {
        let token = Token::new("run", 0).with_text("run");
        assert!(token.original_text.is_none());
        assert_eq!(token.original(), "run");
    }

    #[test]
    fn test_into_token_stream() {
        let stream = vec![Token::new("a", 0), Token::new("b", 1)].into_token_stream();
        let texts: Vec<String> = stream.map(|t| t.text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
