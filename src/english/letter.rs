//! Character classification and the tagged letter type.

use std::fmt;

use crate::english::tables::VOWELS;

/// Whether `c` is one of the six Porter2 vowels (`y` included).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Whether `c` is an alphabetic character that is not a vowel.
pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

/// Letters that allow a trailing `li` to be dropped in step 2.
pub fn is_valid_li_ending(c: char) -> bool {
    matches!(c, 'c' | 'd' | 'e' | 'g' | 'h' | 'k' | 'm' | 'n' | 'r' | 't')
}

/// Whether `a` followed by `b` is one of the Porter2 doubles.
pub fn is_double(a: char, b: char) -> bool {
    a == b && matches!(a, 'b' | 'd' | 'f' | 'g' | 'm' | 'n' | 'p' | 'r' | 't')
}

/// One letter of a word under stemming.
///
/// A `y` that acts as a consonant carries its own tag rather than a case
/// change, so every other character keeps the case it arrived with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    /// Any character taken at face value.
    Char(char),
    /// A `y` that must be treated as a consonant.
    ConsonantY,
}

impl Letter {
    /// The character this letter spells in the final stem.
    pub fn as_char(self) -> char {
        match self {
            Letter::Char(c) => c,
            Letter::ConsonantY => 'y',
        }
    }

    /// The character used when rendering a word with its markers visible.
    pub fn marked_char(self) -> char {
        match self {
            Letter::Char(c) => c,
            Letter::ConsonantY => 'Y',
        }
    }

    pub fn is_vowel(self) -> bool {
        match self {
            Letter::Char(c) => is_vowel(c),
            Letter::ConsonantY => false,
        }
    }

    /// Reads a marked character back, turning `Y` into a consonant-Y.
    pub fn from_marked(c: char) -> Self {
        if c == 'Y' {
            Letter::ConsonantY
        } else {
            Letter::Char(c)
        }
    }
}

impl From<char> for Letter {
    fn from(c: char) -> Self {
        Letter::Char(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marked_char())
    }
}
