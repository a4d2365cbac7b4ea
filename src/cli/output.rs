//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, Porter2Args};
use crate::english::StemTrace;
use crate::error::Result;

/// One stemmed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemPair {
    pub word: String,
    pub stem: String,
}

/// Result structure for the stem command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResults {
    pub stems: Vec<StemPair>,
    pub duration_ms: u64,
}

/// A word whose stem differed from the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub line: usize,
    pub word: String,
    pub expected: String,
    pub actual: String,
}

/// Result structure for the verify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// The first mismatches, up to the requested limit
    pub mismatches: Vec<Mismatch>,
    pub duration_ms: u64,
}

impl VerifyReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    fn print_human(&self);
}

impl HumanOutput for StemResults {
    fn print_human(&self) {
        for pair in &self.stems {
            println!("{}\t{}", pair.word, pair.stem);
        }
    }
}

impl HumanOutput for StemTrace {
    fn print_human(&self) {
        println!("input:      {}", self.input);
        println!("normalized: {}", self.normalized);
        println!("outcome:    {}", outcome_label(self));
        if !self.steps.is_empty() {
            println!();
            println!("{:<10} {:<20} {:<20} {:<20}", "step", "word", "r1", "r2");
            for step in &self.steps {
                println!(
                    "{:<10} {:<20} {:<20} {:<20}",
                    step.step, step.word, step.r1, step.r2
                );
            }
            println!();
        }
        println!("stem:       {}", self.stem);
    }
}

impl HumanOutput for VerifyReport {
    fn print_human(&self) {
        for mismatch in &self.mismatches {
            println!(
                "line {}: {} -> {} (expected {})",
                mismatch.line, mismatch.word, mismatch.actual, mismatch.expected
            );
        }
        println!(
            "{} words, {} passed, {} failed ({} ms)",
            self.total, self.passed, self.failed, self.duration_ms
        );
    }
}

fn outcome_label(trace: &StemTrace) -> String {
    serde_json::to_value(trace.outcome)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("{:?}", trace.outcome))
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &Porter2Args) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &Porter2Args) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &Porter2Args) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
