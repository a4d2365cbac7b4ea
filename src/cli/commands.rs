//! Command implementations for the porter2 CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::english::{EnglishStemmer, StemmerConfig};
use crate::error::{Result, StemError};

/// Execute a CLI command.
pub fn execute_command(args: Porter2Args) -> Result<()> {
    let stemmer = build_stemmer(&args)?;
    match &args.command {
        Command::Stem(stem_args) => stem_words(&stemmer, stem_args, &args),
        Command::Explain(explain_args) => explain_word(&stemmer, explain_args, &args),
        Command::Verify(verify_args) => verify_vocabulary(&stemmer, verify_args, &args),
    }
}

/// Build the stemmer from the configuration file and flag overrides.
pub fn build_stemmer(args: &Porter2Args) -> Result<EnglishStemmer> {
    let mut config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading stemmer configuration");
            StemmerConfig::from_json_file(path)?
        }
        None => StemmerConfig::default(),
    };
    if args.stem_stop_words {
        config.stem_stop_words = true;
    }
    Ok(EnglishStemmer::with_config(config))
}

/// Stem the given words, or every whitespace-separated word on stdin.
fn stem_words(stemmer: &EnglishStemmer, args: &StemArgs, cli_args: &Porter2Args) -> Result<()> {
    let words = if args.words.is_empty() {
        read_words(io::stdin().lock())?
    } else {
        args.words.clone()
    };

    let start = Instant::now();
    let results = stem_all(stemmer, &words, start);
    info!(words = results.stems.len(), "stemmed words");

    output_result("Stems", &results, cli_args)
}

/// Stem `words` in parallel, pairing each with its stem.
pub fn stem_all(stemmer: &EnglishStemmer, words: &[String], start: Instant) -> StemResults {
    let stems = stemmer
        .stem_batch(words)
        .into_iter()
        .zip(words)
        .map(|(stem, word)| StemPair {
            word: word.clone(),
            stem,
        })
        .collect();
    StemResults {
        stems,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

/// Split everything `reader` yields into whitespace-separated words.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(words)
}

fn explain_word(
    stemmer: &EnglishStemmer,
    args: &ExplainArgs,
    cli_args: &Porter2Args,
) -> Result<()> {
    let trace = stemmer.explain(&args.word);
    output_result(&format!("Explaining \"{}\"", args.word), &trace, cli_args)
}

fn verify_vocabulary(
    stemmer: &EnglishStemmer,
    args: &VerifyArgs,
    cli_args: &Porter2Args,
) -> Result<()> {
    let entries = load_vocabulary(&args.vocabulary)?;
    info!(
        path = %args.vocabulary.display(),
        entries = entries.len(),
        "loaded vocabulary"
    );

    let report = verify(stemmer, &entries, args.max_failures);
    output_result("Verification", &report, cli_args)?;

    if report.is_success() {
        Ok(())
    } else {
        Err(StemError::other(format!(
            "{} of {} words did not stem as expected",
            report.failed, report.total
        )))
    }
}

/// One line of a vocabulary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub line: usize,
    pub word: String,
    pub expected: String,
}

/// Load a vocabulary file of `word expected` lines.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vec<VocabularyEntry>> {
    let file = File::open(path)?;
    parse_vocabulary(BufReader::new(file))
}

pub fn parse_vocabulary<R: BufRead>(reader: R) -> Result<Vec<VocabularyEntry>> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let [word, expected] = fields.as_slice() else {
            return Err(StemError::invalid_argument(format!(
                "line {}: expected `word stem`, got {:?}",
                index + 1,
                trimmed
            )));
        };
        entries.push(VocabularyEntry {
            line: index + 1,
            word: word.to_string(),
            expected: expected.to_string(),
        });
    }
    Ok(entries)
}

/// Stem every entry and compare against its expected stem.
pub fn verify(
    stemmer: &EnglishStemmer,
    entries: &[VocabularyEntry],
    max_failures: usize,
) -> VerifyReport {
    let start = Instant::now();
    let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
    let stems = stemmer.stem_batch(&words);

    let mut failed = 0;
    let mut mismatches = Vec::new();
    for (entry, actual) in entries.iter().zip(stems) {
        if actual == entry.expected {
            continue;
        }
        failed += 1;
        if mismatches.len() < max_failures {
            mismatches.push(Mismatch {
                line: entry.line,
                word: entry.word.clone(),
                expected: entry.expected.clone(),
                actual,
            });
        }
    }

    VerifyReport {
        total: entries.len(),
        passed: entries.len() - failed,
        failed,
        mismatches,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_words() {
        let words = read_words(Cursor::new("running  flies\n\n  cries\n")).unwrap();
        assert_eq!(words, vec!["running", "flies", "cries"]);
    }

    #[test]
    fn test_parse_vocabulary() {
        let input = "# header\nrunning run\n\nflies   fli\n";
        let entries = parse_vocabulary(Cursor::new(input)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line, 2);
        assert_eq!(entries[1].word, "flies");
        assert_eq!(entries[1].expected, "fli");
    }

    #[test]
    fn test_parse_vocabulary_rejects_bad_lines() {
        let err = parse_vocabulary(Cursor::new("running\n")).unwrap_err();
        assert!(matches!(err, StemError::InvalidArgument(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_verify_limits_reported_mismatches() {
        let entries =
            parse_vocabulary(Cursor::new("running run\nflies fly\ncries cry\ndies die\n")).unwrap();
        let report = verify(&EnglishStemmer::new(), &entries, 1);
        assert_eq!(report.total, 4);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 2);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].actual, "fli");
        assert!(!report.is_success());
    }

    #[test]
    fn test_stem_all_pairs_words() {
        let words = vec!["running".to_string(), "the".to_string()];
        let results = stem_all(&EnglishStemmer::new(), &words, Instant::now());
        assert_eq!(
            results.stems,
            vec![
                StemPair {
                    word: "running".to_string(),
                    stem: "run".to_string()
                },
                StemPair {
                    word: "the".to_string(),
                    stem: "the".to_string()
                },
            ]
        );
    }
}
