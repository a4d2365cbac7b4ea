//! # porter2
//!
//! English word stemming with the Porter2 (Snowball English) algorithm.
//!
//! ## Features
//!
//! - Pure Rust, stateless, thread-safe stemming
//! - Explicit consonant-Y tagging instead of case markers
//! - Step-by-step traces for debugging a stem
//! - Stop and stem token filters for analysis pipelines
//! - Parallel batch stemming
//!
//! ```
//! use porter2::english;
//!
//! assert_eq!(english::stem("running"), "run");
//! assert_eq!(english::stem("generalities"), "general");
//! ```

pub mod analysis;
pub mod cli;
pub mod english;
pub mod error;

pub mod prelude {
    pub use crate::analysis::{Filter, StemFilter, Stemmer, StopFilter, Token};
    pub use crate::english::{EnglishStemmer, StemmerConfig, stem};
    pub use crate::error::{Result, StemError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
