//! Keywords command: rank the most frequent words of a text.

use camino::Utf8PathBuf;
use clap::Args;
use indaga_core::config::Config;
use indaga_core::stopwords;
use indaga_core::{FrequencyCounter, FrequencyTable, Tokenizer};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug, Default)]
pub struct KeywordsArgs {
    /// File to analyze (reads stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Number of keywords to show.
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Ignore words with this many characters or fewer.
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Remove digits before tokenizing.
    #[arg(long)]
    pub strip_digits: bool,
}

#[derive(Serialize)]
struct KeywordsReport<'a> {
    source: &'a str,
    tokens: usize,
    keywords: &'a FrequencyTable,
}

/// Rank `text` with the command-line overrides applied over `config`.
pub(crate) fn rank(text: &str, args: &KeywordsArgs, config: &Config) -> (usize, FrequencyTable) {
    let extras = super::extra_stopwords(config);
    let stopwords = stopwords::with_extra(&extras);
    let counter = FrequencyCounter::new(&stopwords)
        .with_min_length(args.min_length.unwrap_or(config.min_length));
    let tokenizer = Tokenizer::new().strip_digits(args.strip_digits || config.strip_digits);

    let tokens = tokenizer.tokenize(text);
    let table = counter.top_frequent(&tokens, args.top.unwrap_or(config.top_n));
    (tokens.len(), table)
}

/// Print the ranked keyword table.
#[instrument(name = "cmd_keywords", skip_all, fields(source))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let source = super::input_label(args.file.as_deref());
    tracing::Span::current().record("source", source);
    debug!(top = ?args.top, min_length = ?args.min_length, "executing keywords command");

    let text = super::read_text(args.file.as_deref(), max_input)?;
    let (token_count, table) = rank(&text, &args, config);

    if global_json {
        let report = KeywordsReport {
            source,
            tokens: token_count,
            keywords: &table,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if table.is_empty() {
        println!("{}", "no keywords found".yellow());
        return Ok(());
    }

    let width = table
        .iter()
        .map(|(token, _)| token.chars().count())
        .max()
        .unwrap_or(0);
    for (rank, (token, count)) in table.iter().enumerate() {
        let padding = " ".repeat(width - token.chars().count());
        println!(
            "{:>3}. {}{padding}  {}",
            (rank + 1).dimmed(),
            token.bold(),
            count.cyan()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply() {
        let args = KeywordsArgs::default();
        let (tokens, table) = rank("El gato y el gato. Un perro.", &args, &Config::default());
        assert_eq!(tokens, 7);
        let pairs: Vec<(&str, usize)> = table.iter().collect();
        assert_eq!(pairs, vec![("gato", 2), ("perro", 1)]);
    }

    #[test]
    fn args_override_config() {
        let args = KeywordsArgs {
            top: Some(1),
            min_length: Some(4),
            ..KeywordsArgs::default()
        };
        let (_, table) = rank("perro perro gato gato gato", &args, &Config::default());
        let pairs: Vec<(&str, usize)> = table.iter().collect();
        assert_eq!(pairs, vec![("perro", 2)]);
    }

    #[test]
    fn extra_stopwords_are_excluded() {
        let config = Config {
            extra_stopwords: vec!["Gato".to_string()],
            ..Config::default()
        };
        let (_, table) = rank("gato gato perro", &KeywordsArgs::default(), &config);
        assert_eq!(table.count_of("gato"), None);
        assert_eq!(table.count_of("perro"), Some(1));
    }

    #[test]
    fn strip_digits_from_args() {
        let args = KeywordsArgs {
            strip_digits: true,
            ..KeywordsArgs::default()
        };
        let (_, table) = rank("covid19 covid19 covid", &args, &Config::default());
        assert_eq!(table.count_of("covid"), Some(3));
    }
}
