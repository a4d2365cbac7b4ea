//! The ordered suffix-stripping steps.
//!
//! Every step looks up the longest suffix of its table that the word ends
//! with. When the condition attached to that suffix fails the step does
//! nothing; shorter suffixes are not tried.

use crate::english::letter::{Letter, is_double, is_valid_li_ending};
use crate::english::region::{ends_in_short_syllable, is_short_word};
use crate::english::word::Word;

const STEP0_SUFFIXES: &[&str] = &["'s'", "'s", "'"];

const STEP1A_SUFFIXES: &[&str] = &["sses", "ied", "ies", "us", "ss", "s"];

const STEP1B_SUFFIXES: &[&str] = &["eedly", "ingly", "edly", "eed", "ing", "ed"];

const STEP2_SUFFIXES: &[&str] = &[
    "ational", "fulness", "iveness", "ization", "ousness", "biliti", "lessli", "tional", "alism",
    "aliti", "ation", "entli", "fulli", "iviti", "ousli", "abli", "alli", "anci", "ator", "enci",
    "izer", "bli", "ogi", "li",
];

const STEP3_SUFFIXES: &[&str] = &[
    "ational", "tional", "alize", "icate", "iciti", "ative", "ical", "ness", "ful",
];

const STEP4_SUFFIXES: &[&str] = &[
    "ement", "ance", "ence", "able", "ible", "ment", "ant", "ent", "ism", "ate", "iti", "ous",
    "ive", "ize", "ion", "al", "er", "ic",
];

/// Step 0: strip possessive apostrophes.
pub fn step0(mut word: Word) -> Word {
    if let Some(suffix) = word.longest_suffix(STEP0_SUFFIXES) {
        word.remove_suffix(suffix);
    }
    word
}

/// Step 1a: plural endings.
pub fn step1a(mut word: Word) -> Word {
    let Some(suffix) = word.longest_suffix(STEP1A_SUFFIXES) else {
        return word;
    };
    match suffix {
        "sses" => word.replace_suffix(suffix, "ss"),
        "ied" | "ies" => {
            let replacement = if word.before_suffix(suffix).len() > 1 {
                "i"
            } else {
                "ie"
            };
            word.replace_suffix(suffix, replacement);
        }
        "s" => {
            // The letter right before the `s` does not count.
            let stem = word.before_suffix(suffix);
            let has_vowel = stem
                .split_last()
                .is_some_and(|(_, rest)| rest.iter().any(|letter| letter.is_vowel()));
            if has_vowel {
                word.remove_suffix(suffix);
            }
        }
        _ => {}
    }
    word
}

/// Step 1b: `-eed`, `-ed` and `-ing` forms.
pub fn step1b(mut word: Word) -> Word {
    let Some(suffix) = word.longest_suffix(STEP1B_SUFFIXES) else {
        return word;
    };
    match suffix {
        "eed" | "eedly" => {
            if word.suffix_in_r1(suffix) {
                word.replace_suffix(suffix, "ee");
            }
        }
        _ => {
            if !word.before_suffix(suffix).iter().any(|l| l.is_vowel()) {
                return word;
            }
            word.remove_suffix(suffix);
            if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
                word.push_str("e");
            } else if ends_in_double(&word) {
                word.pop();
            } else if is_short_word(&word) {
                word.push_str("e");
            }
        }
    }
    word
}

fn ends_in_double(word: &Word) -> bool {
    match word.letters() {
        [.., Letter::Char(a), Letter::Char(b)] => is_double(*a, *b),
        _ => false,
    }
}

/// Step 1c: a final `y` after a non-initial consonant becomes `i`.
pub fn step1c(mut word: Word) -> Word {
    let letters = word.letters();
    let n = letters.len();
    if n < 3 || letters[n - 1].as_char() != 'y' || letters[n - 2].is_vowel() {
        return word;
    }
    word.set_last(Letter::Char('i'));
    word
}

/// Step 2: derivational suffixes inside R1.
pub fn step2(mut word: Word) -> Word {
    let Some(suffix) = word.longest_suffix(STEP2_SUFFIXES) else {
        return word;
    };
    if !word.suffix_in_r1(suffix) {
        return word;
    }
    let replacement = match suffix {
        "tional" => "tion",
        "enci" => "ence",
        "anci" => "ance",
        "abli" => "able",
        "entli" => "ent",
        "izer" | "ization" => "ize",
        "ational" | "ation" | "ator" => "ate",
        "alism" | "aliti" | "alli" => "al",
        "fulness" | "fulli" => "ful",
        "ousli" | "ousness" => "ous",
        "iveness" | "iviti" => "ive",
        "biliti" | "bli" => "ble",
        "lessli" => "less",
        "ogi" => {
            if word.letter_before(suffix) != Some(Letter::Char('l')) {
                return word;
            }
            "og"
        }
        "li" => {
            let ending = word.letter_before(suffix).map(Letter::as_char);
            if !ending.is_some_and(is_valid_li_ending) {
                return word;
            }
            ""
        }
        _ => return word,
    };
    word.replace_suffix(suffix, replacement);
    word
}

/// Step 3: further derivational suffixes inside R1.
pub fn step3(mut word: Word) -> Word {
    let Some(suffix) = word.longest_suffix(STEP3_SUFFIXES) else {
        return word;
    };
    if !word.suffix_in_r1(suffix) {
        return word;
    }
    let replacement = match suffix {
        "tional" => "tion",
        "ational" => "ate",
        "alize" => "al",
        "icate" | "iciti" | "ical" => "ic",
        "ful" | "ness" => "",
        "ative" => {
            if !word.suffix_in_r2(suffix) {
                return word;
            }
            ""
        }
        _ => return word,
    };
    word.replace_suffix(suffix, replacement);
    word
}

/// Step 4: suffixes deleted outright inside R2.
pub fn step4(mut word: Word) -> Word {
    let Some(suffix) = word.longest_suffix(STEP4_SUFFIXES) else {
        return word;
    };
    if !word.suffix_in_r2(suffix) {
        return word;
    }
    if suffix == "ion" {
        let before = word.letter_before(suffix);
        if !matches!(before, Some(Letter::Char('s' | 't'))) {
            return word;
        }
    }
    word.remove_suffix(suffix);
    word
}

/// Step 5: a final `e`, or the second `l` of a final `ll`.
pub fn step5(mut word: Word) -> Word {
    if word.ends_with("e") {
        let keep = !word.suffix_in_r2("e")
            && (!word.suffix_in_r1("e") || ends_in_short_syllable(word.before_suffix("e")));
        if !keep {
            word.remove_suffix("e");
        }
    } else if word.ends_with("l")
        && word.suffix_in_r2("l")
        && word.letter_before("l") == Some(Letter::Char('l'))
    {
        word.remove_suffix("l");
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(text: &str) -> Word {
        Word::from_marked(text).compute_regions()
    }

    fn assert_step(step: fn(Word) -> Word, input: &str, expected: &str) {
        assert_eq!(step(regions(input)).marked(), expected, "stepping {input}");
    }

    #[test]
    fn test_step0() {
        let cases = [
            ("general's", "al's", "", "general", "al", ""),
            ("general's'", "al's'", "", "general", "al", ""),
            ("spices'", "es'", "", "spices", "es", ""),
        ];
        for (word, r1, r2, word_out, r1_out, r2_out) in cases {
            let out = step0(Word::with_regions(word, r1, r2));
            assert_eq!(
                (out.marked().as_str(), out.r1().as_str(), out.r2().as_str()),
                (word_out, r1_out, r2_out)
            );
        }
    }

    #[test]
    fn test_step1a() {
        assert_step(step1a, "caresses", "caress");
        assert_step(step1a, "ties", "tie");
        assert_step(step1a, "cries", "cri");
        assert_step(step1a, "tied", "tie");
        assert_step(step1a, "gas", "gas");
        assert_step(step1a, "this", "this");
        assert_step(step1a, "gaps", "gap");
        assert_step(step1a, "kiwis", "kiwi");
        assert_step(step1a, "bus", "bus");
        assert_step(step1a, "caress", "caress");
        assert_step(step1a, "s", "s");
    }

    #[test]
    fn test_step1b() {
        assert_step(step1b, "agreed", "agree");
        assert_step(step1b, "feed", "feed");
        assert_step(step1b, "hopping", "hop");
        assert_step(step1b, "hoping", "hope");
        assert_step(step1b, "luxuriating", "luxuriate");
        assert_step(step1b, "troubled", "trouble");
        assert_step(step1b, "sized", "size");
        assert_step(step1b, "falling", "fall");
        assert_step(step1b, "sing", "sing");
        assert_step(step1b, "kneaded", "knead");
    }

    #[test]
    fn test_step1c() {
        assert_step(step1c, "cry", "cri");
        assert_step(step1c, "by", "by");
        assert_step(step1c, "saY", "saY");
        assert_step(step1c, "happy", "happi");
    }

    #[test]
    fn test_step2() {
        assert_step(step2, "relational", "relate");
        assert_step(step2, "national", "national");
        assert_step(step2, "generousli", "generous");
        assert_step(step2, "consistentli", "consistent");
        assert_step(step2, "analogi", "analog");
        assert_step(step2, "happili", "happili");
        assert_step(step2, "fluentli", "fluentli");
    }

    #[test]
    fn test_step3() {
        assert_step(step3, "beautiful", "beauti");
        assert_step(step3, "electrical", "electric");
        assert_step(step3, "formative", "formative");
        assert_step(step3, "demonstrative", "demonstr");
    }

    #[test]
    fn test_step4() {
        assert_step(step4, "luxuriate", "luxuri");
        assert_step(step4, "consignment", "consign");
        assert_step(step4, "adoption", "adopt");
        assert_step(step4, "communion", "communion");
        assert_step(step4, "national", "nation");
    }

    #[test]
    fn test_step5() {
        assert_step(step5, "relate", "relat");
        assert_step(step5, "hope", "hope");
        assert_step(step5, "agree", "agre");
        assert_step(step5, "controll", "control");
        assert_step(step5, "roll", "roll");
    }

    #[test]
    fn test_steps_tolerate_empty_words() {
        for step in [step0, step1a, step1b, step1c, step2, step3, step4, step5] {
            assert!(step(regions("")).is_empty());
        }
    }
}
