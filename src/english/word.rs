//! The word representation threaded through the stemming steps.

use std::fmt;

use crate::english::letter::Letter;
use crate::english::region;

/// A word under stemming together with its R1 and R2 region marks.
///
/// `r1` and `r2` are letter offsets fixed when the regions are computed.
/// Shortening the word never moves them; the region views simply start at
/// `min(offset, len)`, so an offset past the end means an empty region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<Letter>,
    r1: usize,
    r2: usize,
}

impl Word {
    /// Build a word from marked text (`Y` is read as a consonant-Y) with
    /// both regions empty.
    pub fn from_marked(text: &str) -> Self {
        let letters: Vec<Letter> = text.chars().map(Letter::from_marked).collect();
        let len = letters.len();
        Word {
            letters,
            r1: len,
            r2: len,
        }
    }

    /// Build a word from marked text and the text of its current regions.
    ///
    /// Only the lengths of `r1` and `r2` are used: each region is taken to be
    /// the tail of `text` with that many letters.
    pub fn with_regions(text: &str, r1: &str, r2: &str) -> Self {
        let mut word = Word::from_marked(text);
        let len = word.len();
        word.r1 = len.saturating_sub(r1.chars().count());
        word.r2 = len.saturating_sub(r2.chars().count()).max(word.r1);
        word
    }

    /// Compute R1 and R2 from the current letters.
    pub fn compute_regions(mut self) -> Self {
        let (r1, r2) = region::region_offsets(&self.letters);
        self.r1 = r1;
        self.r2 = r2;
        self
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn r1_offset(&self) -> usize {
        self.r1
    }

    pub fn r2_offset(&self) -> usize {
        self.r2
    }

    pub fn r1_letters(&self) -> &[Letter] {
        &self.letters[self.r1.min(self.len())..]
    }

    pub fn r2_letters(&self) -> &[Letter] {
        &self.letters[self.r2.min(self.len())..]
    }

    /// R1 rendered with markers visible.
    pub fn r1(&self) -> String {
        render_marked(self.r1_letters())
    }

    /// R2 rendered with markers visible.
    pub fn r2(&self) -> String {
        render_marked(self.r2_letters())
    }

    pub fn is_r1_empty(&self) -> bool {
        self.r1 >= self.len()
    }

    pub fn last(&self) -> Option<Letter> {
        self.letters.last().copied()
    }

    /// Whether the word ends with `suffix`, comparing spelled characters.
    pub fn ends_with(&self, suffix: &str) -> bool {
        let n = suffix.chars().count();
        if n > self.len() {
            return false;
        }
        self.letters[self.len() - n..]
            .iter()
            .zip(suffix.chars())
            .all(|(letter, c)| letter.as_char() == c)
    }

    /// The longest entry of `candidates` that the word ends with.
    pub fn longest_suffix<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates
            .iter()
            .copied()
            .filter(|suffix| self.ends_with(suffix))
            .max_by_key(|suffix| suffix.chars().count())
    }

    /// The letters in front of a trailing `suffix`.
    pub fn before_suffix(&self, suffix: &str) -> &[Letter] {
        let end = self.len().saturating_sub(suffix.chars().count());
        &self.letters[..end]
    }

    /// The letter immediately in front of a trailing `suffix`.
    pub fn letter_before(&self, suffix: &str) -> Option<Letter> {
        self.before_suffix(suffix).last().copied()
    }

    /// Whether a trailing `suffix` lies entirely inside R1.
    pub fn suffix_in_r1(&self, suffix: &str) -> bool {
        self.suffix_start(suffix)
            .is_some_and(|start| start >= self.r1)
    }

    /// Whether a trailing `suffix` lies entirely inside R2.
    pub fn suffix_in_r2(&self, suffix: &str) -> bool {
        self.suffix_start(suffix)
            .is_some_and(|start| start >= self.r2)
    }

    fn suffix_start(&self, suffix: &str) -> Option<usize> {
        self.len().checked_sub(suffix.chars().count())
    }

    /// Drop a trailing `suffix`.
    pub fn remove_suffix(&mut self, suffix: &str) {
        let end = self.len().saturating_sub(suffix.chars().count());
        self.letters.truncate(end);
    }

    /// Swap a trailing `suffix` for `replacement`.
    pub fn replace_suffix(&mut self, suffix: &str, replacement: &str) {
        self.remove_suffix(suffix);
        self.push_str(replacement);
    }

    pub fn push_str(&mut self, s: &str) {
        self.letters.extend(s.chars().map(Letter::Char));
    }

    pub fn pop(&mut self) -> Option<Letter> {
        self.letters.pop()
    }

    pub fn set_last(&mut self, letter: Letter) {
        if let Some(last) = self.letters.last_mut() {
            *last = letter;
        }
    }

    /// Re-tag every `y` that acts as a consonant: one at the start of the
    /// word or one that follows a vowel.
    ///
    /// The scan runs left to right over already re-tagged letters, so a `y`
    /// after a consonant-Y stays a vowel.
    pub fn mark_consonant_ys(&mut self) {
        for i in 0..self.letters.len() {
            if self.letters[i] != Letter::Char('y') {
                continue;
            }
            if i == 0 || self.letters[i - 1].is_vowel() {
                self.letters[i] = Letter::ConsonantY;
            }
        }
    }

    /// The word with consonant-Y rendered as `Y`.
    pub fn marked(&self) -> String {
        render_marked(&self.letters)
    }

    /// The final stem: every letter spelled plainly.
    pub fn to_stem(&self) -> String {
        self.letters.iter().map(|letter| letter.as_char()).collect()
    }
}

fn render_marked(letters: &[Letter]) -> String {
    letters.iter().map(|letter| letter.marked_char()).collect()
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.marked())
    }
}
