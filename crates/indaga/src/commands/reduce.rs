//! Reduce command: compress text to a saturation-capped keyword bag.

use camino::Utf8PathBuf;
use clap::Args;
use indaga_core::config::Config;
use indaga_core::stopwords;
use indaga_core::{FrequencyCounter, TextReducer, Tokenizer};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `reduce` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReduceArgs {
    /// File to reduce (reads stdin when omitted or `-`).
    pub file: Option<Utf8PathBuf>,

    /// Maximum repetitions of one word.
    #[arg(long)]
    pub cap: Option<usize>,

    /// Number of distinct words to keep.
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

#[derive(Serialize)]
struct ReduceReport<'a> {
    source: &'a str,
    top_n: usize,
    cap: usize,
    words: usize,
    text: &'a str,
}

fn reduce(text: &str, top_n: usize, cap: usize, config: &Config) -> String {
    let extras = super::extra_stopwords(config);
    let stopwords = stopwords::with_extra(&extras);
    let counter = FrequencyCounter::new(&stopwords).with_min_length(config.min_length);
    let tokenizer = Tokenizer::new().strip_digits(config.strip_digits);

    TextReducer::new(tokenizer, counter)
        .with_top_n(top_n)
        .with_cap(cap)
        .reduce(text)
}

/// Print the reduced keyword text.
#[instrument(name = "cmd_reduce", skip_all, fields(source))]
pub fn cmd_reduce(
    args: ReduceArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let source = super::input_label(args.file.as_deref());
    tracing::Span::current().record("source", source);

    let top_n = args.top.unwrap_or(config.reduce_top_n);
    let cap = args.cap.unwrap_or(config.reduce_cap);
    debug!(top_n, cap, "executing reduce command");

    let text = super::read_text(args.file.as_deref(), max_input)?;
    let reduced = reduce(&text, top_n, cap, config);

    if global_json {
        let report = ReduceReport {
            source,
            top_n,
            cap,
            words: reduced.split_whitespace().count(),
            text: &reduced,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{reduced}");
    }

    Ok(())
}
