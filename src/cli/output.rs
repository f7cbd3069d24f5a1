//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, StemmaArgs};
use crate::error::Result;
use crate::stemmer::{IrregularEntry, Outcome, StemTrace};

/// Stem of a single word, or why it could not be stemmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStem {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result structure for the `stem` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResults {
    pub variant: String,
    pub results: Vec<WordStem>,
}

/// Result structure for the `file` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileStemResults {
    pub path: String,
    pub variant: String,
    pub total_words: usize,
    pub skipped_words: usize,
    pub distinct_words: usize,
    pub distinct_stems: usize,
    pub duration_ms: u64,
    pub words_per_second: f64,
    /// Most frequent distinct words with their stems and counts.
    pub stems: Vec<StemCount>,
}

/// A distinct word, its stem, and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemCount {
    pub word: String,
    pub stem: String,
    pub count: usize,
}

/// Result structure for the `explain` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResult {
    pub variant: String,
    /// Consonant/vowel pattern of the input, one letter per byte.
    pub pattern: String,
    pub measure: usize,
    pub trace: StemTrace,
}

/// Result structure for the `irregulars` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct IrregularsResult {
    pub variant: String,
    pub total_forms: usize,
    pub entries: Vec<IrregularEntry>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write, args: &StemmaArgs) -> io::Result<()>;
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &StemmaArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, message, result, args)?;
    out.flush()?;
    Ok(())
}

/// Write a result in the specified format to `out`.
pub fn write_result<T>(out: &mut dyn Write, message: &str, result: &T, args: &StemmaArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(out, args)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

impl HumanOutput for StemResults {
    fn write_human(&self, out: &mut dyn Write, _args: &StemmaArgs) -> io::Result<()> {
        let width = self.results.iter().map(|r| r.word.len()).max().unwrap_or(0);
        for result in &self.results {
            match (&result.stem, &result.error) {
                (Some(stem), _) => writeln!(out, "{:<width$}  {stem}", result.word)?,
                (None, Some(error)) => writeln!(out, "{:<width$}  error: {error}", result.word)?,
                (None, None) => writeln!(out, "{}", result.word)?,
            }
        }
        Ok(())
    }
}

impl HumanOutput for FileStemResults {
    fn write_human(&self, out: &mut dyn Write, args: &StemmaArgs) -> io::Result<()> {
        writeln!(out, "File: {} ({})", self.path, self.variant)?;
        writeln!(out, "═══════════════════")?;
        writeln!(out, "Words:          {}", self.total_words)?;
        writeln!(out, "Skipped:        {}", self.skipped_words)?;
        writeln!(out, "Distinct words: {}", self.distinct_words)?;
        writeln!(out, "Distinct stems: {}", self.distinct_stems)?;
        writeln!(
            out,
            "Time:           {} ({:.0} words/s)",
            format_duration(self.duration_ms),
            self.words_per_second
        )?;

        if args.verbosity() > 0 && !self.stems.is_empty() {
            writeln!(out)?;
            let width = self.stems.iter().map(|s| s.word.len()).max().unwrap_or(0);
            for entry in &self.stems {
                writeln!(out, "{:>6}  {:<width$}  {}", entry.count, entry.word, entry.stem)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for ExplainResult {
    fn write_human(&self, out: &mut dyn Write, _args: &StemmaArgs) -> io::Result<()> {
        let trace = &self.trace;
        writeln!(out, "Word:    {}", trace.word)?;
        writeln!(out, "Pattern: {}", self.pattern)?;
        writeln!(out, "Measure: {}", self.measure)?;
        writeln!(out, "Variant: {}", self.variant)?;

        match trace.outcome {
            Outcome::Irregular => writeln!(out, "Irregular form of \"{}\"", trace.stem)?,
            Outcome::Short => writeln!(out, "Too short to stem")?,
            Outcome::Pipeline => {
                let mut previous = trace.word.as_str();
                for output in &trace.stages {
                    let marker = if output.word != previous { "*" } else { " " };
                    writeln!(out, " {marker} {:<8} {}", output.stage.name(), output.word)?;
                    previous = &output.word;
                }
            }
        }
        writeln!(out, "Stem:    {}", trace.stem)
    }
}

impl HumanOutput for IrregularsResult {
    fn write_human(&self, out: &mut dyn Write, _args: &StemmaArgs) -> io::Result<()> {
        if self.entries.is_empty() {
            return writeln!(out, "No irregular forms ({} rule set)", self.variant);
        }
        for entry in &self.entries {
            writeln!(out, "{}: {}", entry.stem, entry.forms.join(", "))?;
        }
        writeln!(out)?;
        writeln!(out, "{} forms, {} stems", self.total_forms, self.entries.len())
    }
}

/// Format a duration given in milliseconds.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms} ms")
    } else {
        format!("{:.2} s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::StemmerContext;
    use clap::Parser;

    fn args(extra: &[&str]) -> StemmaArgs {
        let mut argv = vec!["stemma"];
        argv.extend_from_slice(extra);
        argv.push("irregulars");
        StemmaArgs::try_parse_from(argv).unwrap()
    }

    fn render<T: Serialize + HumanOutput>(result: &T, args: &StemmaArgs) -> String {
        let mut out = Vec::new();
        write_result(&mut out, "Done", result, args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(12), "12 ms");
        assert_eq!(format_duration(1500), "1.50 s");
    }

    #[test]
    fn test_stem_results_human() {
        let results = StemResults {
            variant: "extended".to_string(),
            results: vec![
                WordStem {
                    word: "ponies".to_string(),
                    stem: Some("poni".to_string()),
                    error: None,
                },
                WordStem {
                    word: "x1".to_string(),
                    stem: None,
                    error: Some("bad".to_string()),
                },
            ],
        };

        let text = render(&results, &args(&[]));
        assert_eq!(text, "ponies  poni\nx1      error: bad\n");
    }

    #[test]
    fn test_stem_results_json() {
        let results = StemResults {
            variant: "classic".to_string(),
            results: vec![WordStem {
                word: "cats".to_string(),
                stem: Some("cat".to_string()),
                error: None,
            }],
        };

        let text = render(&results, &args(&["--format", "json"]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["variant"], "classic");
        assert_eq!(value["results"][0]["stem"], "cat");
        assert!(value["results"][0].get("error").is_none());
    }

    #[test]
    fn test_explain_human_marks_changed_stages() {
        let trace = StemmerContext::new().trace("hopefulness").unwrap();
        let result = ExplainResult {
            variant: "extended".to_string(),
            pattern: "CVCVCVCCVCC".to_string(),
            measure: 4,
            trace,
        };

        let text = render(&result, &args(&[]));
        assert!(text.contains(" * step2    hopeful\n"));
        assert!(text.contains(" * step3    hope\n"));
        assert!(text.contains("   step1ab  hopefulness"));
        assert!(text.ends_with("Stem:    hope\n"));
    }

    #[test]
    fn test_irregulars_human_empty() {
        let result = IrregularsResult {
            variant: "classic".to_string(),
            total_forms: 0,
            entries: Vec::new(),
        };
        assert_eq!(render(&result, &args(&[])), "No irregular forms (classic rule set)\n");
    }
}
