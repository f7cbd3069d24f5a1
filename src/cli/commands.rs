//! Command implementations for the stemma CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use ahash::{AHashMap, AHashSet};
use anyhow::Context;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::StemmerConfig;
use crate::error::Result;
use crate::stemmer::classify::{measure, pattern};
use crate::stemmer::{PorterStemmer, StemmerContext, Variant, is_stemmable, stem_batch};

/// Execute a CLI command, attaching the command and its input to any error.
pub fn run(args: StemmaArgs) -> anyhow::Result<()> {
    let what = match &args.command {
        Command::Stem(stem_args) => format!("stem {}", stem_args.words.join(" ")),
        Command::File(file_args) => format!("file {}", file_args.path.display()),
        Command::Explain(explain_args) => format!("explain {}", explain_args.word),
        Command::Irregulars => "irregulars".to_string(),
    };
    execute_command(args).with_context(|| format!("`stemma {what}` failed"))
}

/// Execute a CLI command.
pub fn execute_command(args: StemmaArgs) -> Result<()> {
    let config = load_config(&args)?;
    log::debug!("using {} rule set", config.variant.name());

    match &args.command {
        Command::Stem(stem_args) => stem_words(stem_args, config, &args),
        Command::File(file_args) => stem_file(file_args, config, &args),
        Command::Explain(explain_args) => explain_word(explain_args, config, &args),
        Command::Irregulars => list_irregulars(config, &args),
    }
}

/// Build the stemmer configuration from `--config` and `--classic`.
pub fn load_config(args: &StemmaArgs) -> Result<StemmerConfig> {
    let config = match &args.config {
        Some(path) => {
            log::info!("loading stemmer config from {}", path.display());
            StemmerConfig::from_json_file(path)?
        }
        None => StemmerConfig::default(),
    };

    if args.classic {
        Ok(config.with_variant(Variant::Classic))
    } else {
        Ok(config)
    }
}

/// Stem words given on the command line.
fn stem_words(args: &StemArgs, config: StemmerConfig, cli_args: &StemmaArgs) -> Result<()> {
    let variant = config.variant;
    let stemmer = PorterStemmer::with_config(config)?;

    let results = stemmer.with_context(|context| {
        args.words
            .iter()
            .map(|word| match context.stem_str(word) {
                Ok(stem) => WordStem {
                    word: word.clone(),
                    stem: Some(stem.to_string()),
                    error: None,
                },
                Err(e) => WordStem {
                    word: word.clone(),
                    stem: None,
                    error: Some(e.to_string()),
                },
            })
            .collect::<Vec<_>>()
    });

    output_result(
        "Stemmed words",
        &StemResults {
            variant: variant.name().to_string(),
            results,
        },
        cli_args,
    )
}

/// Stem every word of a text file.
fn stem_file(args: &FileArgs, config: StemmerConfig, cli_args: &StemmaArgs) -> Result<()> {
    let start_time = Instant::now();
    let (words, skipped_words) = read_words(&args.path)?;
    log::info!(
        "read {} words from {} ({} skipped)",
        words.len(),
        args.path.display(),
        skipped_words
    );

    let stems = if args.parallel {
        stem_batch(&words, &config)?
    } else {
        PorterStemmer::with_config(config.clone())?.stem_all(&words)?
    };

    let mut counts: AHashMap<&str, (&str, usize)> = AHashMap::new();
    for (word, stem) in words.iter().zip(&stems) {
        counts.entry(word.as_str()).or_insert((stem.as_str(), 0)).1 += 1;
    }
    let distinct_stems = stems.iter().map(String::as_str).collect::<AHashSet<_>>().len();

    let mut listed: Vec<StemCount> = counts
        .iter()
        .map(|(word, (stem, count))| StemCount {
            word: word.to_string(),
            stem: stem.to_string(),
            count: *count,
        })
        .collect();
    listed.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    listed.truncate(args.limit);

    let duration = start_time.elapsed();
    let words_per_second = if duration.as_secs_f64() > 0.0 {
        words.len() as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    output_result(
        "File stemmed",
        &FileStemResults {
            path: args.path.to_string_lossy().to_string(),
            variant: config.variant.name().to_string(),
            total_words: words.len(),
            skipped_words,
            distinct_words: counts.len(),
            distinct_stems,
            duration_ms: duration.as_millis() as u64,
            words_per_second,
            stems: listed,
        },
        cli_args,
    )
}

/// Split a text file into lowercase words.
///
/// Words are separated by whitespace and stripped of surrounding
/// punctuation. Anything that is still not a lowercase ASCII word after that
/// is counted as skipped.
pub fn read_words(path: &Path) -> Result<(Vec<String>, usize)> {
    let text = fs::read_to_string(path)?;
    let mut words = Vec::new();
    let mut skipped = 0;

    for raw in text.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        if is_stemmable(&word) {
            words.push(word);
        } else {
            log::debug!("skipping {raw:?}");
            skipped += 1;
        }
    }

    Ok((words, skipped))
}

/// Show the stage trace for one word.
fn explain_word(args: &ExplainArgs, config: StemmerConfig, cli_args: &StemmaArgs) -> Result<()> {
    let mut context = StemmerContext::with_config(&config)?;
    let trace = context.trace(&args.word)?;
    let bytes = args.word.as_bytes();

    output_result(
        "Stemming trace",
        &ExplainResult {
            variant: config.variant.name().to_string(),
            pattern: pattern(bytes),
            measure: measure(bytes),
            trace,
        },
        cli_args,
    )
}

/// List the effective irregular table.
fn list_irregulars(config: StemmerConfig, cli_args: &StemmaArgs) -> Result<()> {
    let entries = match config.irregulars()? {
        Some(irregulars) => irregulars.entries(),
        None => Vec::new(),
    };
    let total_forms = entries.iter().map(|e| e.forms.len()).sum();

    output_result(
        "Irregular forms",
        &IrregularsResult {
            variant: config.variant.name().to_string(),
            total_forms,
            entries,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::StemmaError;

    #[test]
    fn test_read_words() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "The ponies, the Caresses!\n  \"Running\" 42 caf\u{e9} --").unwrap();

        let (words, skipped) = read_words(file.path()).unwrap();
        assert_eq!(words, vec!["the", "ponies", "the", "caresses", "running"]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_load_config_classic_flag() {
        let args = StemmaArgs::try_parse_from(["stemma", "--classic", "irregulars"]).unwrap();
        let config = load_config(&args).unwrap();
        assert_eq!(config.variant, Variant::Classic);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"irregular_forms": [{{"stem": "ox", "forms": ["oxen"]}}]}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args = StemmaArgs::try_parse_from(["stemma", "--config", path.as_str(), "irregulars"]).unwrap();
        let config = load_config(&args).unwrap();
        assert_eq!(config.variant, Variant::Extended);
        assert_eq!(config.irregular_forms.len(), 1);
    }

    #[test]
    fn test_load_config_missing_file() {
        let args =
            StemmaArgs::try_parse_from(["stemma", "--config", "/nonexistent/stemma.json", "irregulars"])
                .unwrap();
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_execute_commands() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "generalizations oscillators running running").unwrap();
        let path = file.path().to_string_lossy().to_string();

        for argv in [
            vec!["stemma", "-q", "stem", "ponies", "Bad"],
            vec!["stemma", "-q", "file", path.as_str()],
            vec!["stemma", "-q", "file", path.as_str(), "--parallel"],
            vec!["stemma", "-q", "--format", "json", "explain", "hopefulness"],
            vec!["stemma", "-q", "--classic", "irregulars"],
        ] {
            let args = StemmaArgs::try_parse_from(argv).unwrap();
            execute_command(args).unwrap();
        }
    }

    #[test]
    fn test_run_reports_command_and_cause() {
        let args =
            StemmaArgs::try_parse_from(["stemma", "--config", "/nonexistent/stemma.json", "irregulars"])
                .unwrap();
        let err = run(args).unwrap_err();

        assert_eq!(err.to_string(), "`stemma irregulars` failed");
        let cause = err.downcast_ref::<StemmaError>().unwrap();
        assert!(matches!(cause, StemmaError::InvalidConfig(_)));
        assert!(format!("{err:#}").contains("/nonexistent/stemma.json"));
    }

    #[test]
    fn test_run_explain_invalid_word() {
        let args = StemmaArgs::try_parse_from(["stemma", "explain", "Hello"]).unwrap();
        let err = run(args).unwrap_err();

        assert_eq!(err.to_string(), "`stemma explain Hello` failed");
        assert!(err.downcast_ref::<StemmaError>().unwrap().is_invalid_input());
    }

    #[test]
    fn test_explain_invalid_word() {
        let args = StemmaArgs::try_parse_from(["stemma", "explain", "Hello"]).unwrap();
        assert!(execute_command(args).is_err());
    }
}
