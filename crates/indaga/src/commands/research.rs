//! Research command: search a topic and visualize its keywords.

use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Args;
use indaga_core::config::Config;
use indaga_core::stopwords;
use indaga_core::{
    FrequencyCounter, KeySentences, OutputFormat, Pipeline, ResearchReport, TextReducer, Tokenizer,
};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use super::render::{ArtifactReport, renderer};

/// Arguments for the `research` subcommand.
#[derive(Args, Debug)]
pub struct ResearchArgs {
    /// Topic to research.
    pub topic: String,

    /// Visualization to produce.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the visualization here.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Number of keywords to rank.
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

#[derive(Serialize)]
struct ResearchJson<'a> {
    #[serde(flatten)]
    report: &'a ResearchReport,
    artifact: ArtifactReport<'a>,
}

fn spinner(topic: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(format!("researching {topic}"));
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Run the research pipeline for a topic.
#[instrument(name = "cmd_research", skip_all, fields(topic = %args.topic))]
pub fn cmd_research(args: ResearchArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let format = args.format.unwrap_or(config.format);
    debug!(format = format.as_str(), backend = config.search_backend.as_str(), "executing research command");

    let extras = super::extra_stopwords(config);
    let stopwords = stopwords::with_extra(&extras);
    let counter = FrequencyCounter::new(&stopwords).with_min_length(config.min_length);
    let tokenizer = Tokenizer::new().strip_digits(config.strip_digits);
    let reducer = TextReducer::new(tokenizer, counter.clone())
        .with_top_n(config.reduce_top_n)
        .with_cap(config.reduce_cap);

    let mut pipeline = Pipeline::new(config.search_backend.provider(), renderer(format, config))
        .with_reducer(reducer)
        .with_tokenizer(tokenizer)
        .with_counter(counter.clone())
        .with_top_n(args.top.unwrap_or(config.top_n));
    if config.summary_sentences > 0 {
        let summarizer =
            KeySentences::new(tokenizer, counter).with_sentences(config.summary_sentences);
        pipeline = pipeline.with_summarizer(Box::new(summarizer));
    }

    let bar = (!global_json).then(|| spinner(&args.topic));
    let result = pipeline.run(&args.topic);
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
    let report = result?;

    if let Some(ref path) = args.output {
        super::emit_artifact(&report.artifact, Some(path))?;
    }

    if global_json {
        let json = ResearchJson {
            report: &report,
            artifact: ArtifactReport::new(format, &report.artifact, args.output.as_ref(), None),
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!(
        "{} {} ({}, {} results)",
        "Research:".bold(),
        report.topic.green(),
        report.provider,
        report.results.len()
    );
    for hit in &report.results {
        println!("  {} {}", "-".dimmed(), hit.title);
        println!("    {}", hit.url.cyan());
    }

    if let Some(ref summary) = report.summary {
        println!();
        println!("{}", "Summary".bold().underline());
        println!("{summary}");
    }

    println!();
    println!("{}", "Keywords".bold().underline());
    if report.table.is_empty() {
        println!("{}", "no keywords found".yellow());
    }
    for (rank, (token, count)) in report.table.iter().enumerate() {
        println!("{:>3}. {token} {}", (rank + 1).dimmed(), count.cyan());
    }

    if let Some(ref path) = args.output {
        println!();
        println!("{}: {}", "Wrote".dimmed(), path.cyan());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(topic: &str) -> ResearchArgs {
        ResearchArgs {
            topic: topic.to_string(),
            format: None,
            output: None,
            top: Some(5),
        }
    }

    #[test]
    fn research_json_succeeds() {
        assert!(cmd_research(args("energía solar"), true, &Config::default()).is_ok());
    }

    #[test]
    fn blank_topic_fails() {
        let err = cmd_research(args("   "), true, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn chart_written_to_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("grafico.png")).unwrap();
        let mut research = args("robótica");
        research.format = Some(OutputFormat::Chart);
        research.output = Some(path.clone());

        cmd_research(research, true, &Config::default()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
