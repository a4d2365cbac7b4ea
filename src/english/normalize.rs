//! Input normalization: case folding, apostrophes and consonant-Y marking.

use crate::english::word::Word;

/// The apostrophe every variant is rewritten to.
pub const APOSTROPHE: char = '\'';

/// Apostrophe-like code points folded into [`APOSTROPHE`].
const APOSTROPHE_VARIANTS: &[char] = &[
    '\u{2018}', // left single quotation mark
    '\u{2019}', // right single quotation mark
    '\u{201A}', // single low-9 quotation mark
    '\u{201B}', // single high-reversed-9 quotation mark
    '\u{02BC}', // modifier letter apostrophe
];

/// Rewrite every apostrophe variant in `s` to the ASCII apostrophe.
pub fn normalize_apostrophes(s: &str) -> String {
    s.chars()
        .map(|c| {
            if APOSTROPHE_VARIANTS.contains(&c) {
                APOSTROPHE
            } else {
                c
            }
        })
        .collect()
}

/// Trim, lowercase, unify apostrophes and drop one leading apostrophe.
///
/// This is the form stop words and special words are looked up in.
pub fn normalize_word(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let normalized = normalize_apostrophes(&lowered);
    match normalized.strip_prefix(APOSTROPHE) {
        Some(rest) => rest.to_string(),
        None => normalized,
    }
}

/// Upper-case every `y` that is first in `s` or follows a lowercase vowel.
///
/// ```
/// use porter2::english::normalize::capitalize_ys;
///
/// assert_eq!(capitalize_ys("yoyyy"), "YoYyY");
/// ```
pub fn capitalize_ys(s: &str) -> String {
    let mut word = Word::from_marked(s);
    word.mark_consonant_ys();
    word.marked()
}

/// Normalize `raw` and mark its consonant-Ys, rendered as `Y`.
pub fn preprocess_word(raw: &str) -> String {
    Word::preprocess(raw).marked()
}

impl Word {
    /// Normalize `raw` into a word whose consonant-Ys are tagged.
    ///
    /// Regions are left empty; see [`Word::compute_regions`].
    pub fn preprocess(raw: &str) -> Self {
        Word::from_normalized(&normalize_word(raw))
    }

    /// Tag the consonant-Ys of an already normalized word.
    pub(crate) fn from_normalized(normalized: &str) -> Self {
        // A normalized word is lowercase, so no stray `Y` is misread here.
        let mut word = Word::from_marked(normalized);
        word.mark_consonant_ys();
        word
    }
}
