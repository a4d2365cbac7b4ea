//! R1 / R2 region computation and the short-syllable checks.
//!
//! R1 is the part of a word after the first vowel that is directly followed
//! by a non-vowel. R2 is the same rule applied again inside R1. Words
//! starting with one of [`EXCEPTIONAL_R1_PREFIXES`] get their R1 right after
//! the prefix.

use crate::english::letter::Letter;
use crate::english::tables::EXCEPTIONAL_R1_PREFIXES;
use crate::english::word::Word;

/// Offset just past the first vowel / non-vowel pair at or after `from`, or
/// `letters.len()` when there is none.
pub fn vnv_offset(letters: &[Letter], from: usize) -> usize {
    letters
        .get(from..)
        .and_then(|tail| {
            tail.windows(2)
                .position(|pair| pair[0].is_vowel() && !pair[1].is_vowel())
        })
        .map_or(letters.len(), |i| from + i + 2)
}

/// The R1 offset, honouring the fixed prefix exceptions.
pub fn r1_offset(letters: &[Letter]) -> usize {
    EXCEPTIONAL_R1_PREFIXES
        .iter()
        .find(|prefix| starts_with(letters, prefix))
        .map_or_else(|| vnv_offset(letters, 0), |prefix| prefix.chars().count())
}

/// The R1 and R2 offsets of `letters`.
pub fn region_offsets(letters: &[Letter]) -> (usize, usize) {
    let r1 = r1_offset(letters);
    let r2 = vnv_offset(letters, r1);
    (r1, r2)
}

fn starts_with(letters: &[Letter], prefix: &str) -> bool {
    let n = prefix.chars().count();
    letters.len() >= n
        && letters
            .iter()
            .zip(prefix.chars())
            .all(|(letter, c)| letter.as_char() == c)
}

/// Byte index of the `n`-th character of `s`, or `s.len()`.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// The tail of `word` after its first vowel / non-vowel pair.
///
/// `Y` in `word` is read as a consonant-Y.
///
/// ```
/// use porter2::english::region::vnv_suffix;
///
/// assert_eq!(vnv_suffix("crepuscular"), "uscular");
/// assert_eq!(vnv_suffix("uscular"), "cular");
/// ```
pub fn vnv_suffix(word: &str) -> &str {
    let letters = Word::from_marked(word);
    &word[byte_offset(word, vnv_offset(letters.letters(), 0))..]
}

/// The R1 and R2 regions of `word`, as tails of it.
///
/// ```
/// use porter2::english::region::r1r2;
///
/// assert_eq!(r1r2("beautiful"), ("iful", "ul"));
/// ```
pub fn r1r2(word: &str) -> (&str, &str) {
    let letters = Word::from_marked(word);
    let (r1, r2) = region_offsets(letters.letters());
    (
        &word[byte_offset(word, r1)..],
        &word[byte_offset(word, r2)..],
    )
}

/// Whether `letters` end in a short syllable.
///
/// That is either a non-vowel, a vowel and a final non-vowel other than `w`,
/// `x` or consonant-Y, or a whole two-letter word made of a vowel and a
/// non-vowel.
pub fn ends_in_short_syllable(letters: &[Letter]) -> bool {
    match letters {
        [a, b] => a.is_vowel() && !b.is_vowel(),
        [.., a, b, c] => {
            !a.is_vowel()
                && b.is_vowel()
                && !c.is_vowel()
                && !matches!(
                    c,
                    Letter::Char('w') | Letter::Char('x') | Letter::ConsonantY
                )
        }
        _ => false,
    }
}

/// A word is short when its R1 is empty and it ends in a short syllable.
pub fn is_short_word(word: &Word) -> bool {
    word.is_r1_empty() && ends_in_short_syllable(word.letters())
}
