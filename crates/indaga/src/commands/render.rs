//! Render command: draw the keyword table as a chart or HTML table.

use camino::Utf8PathBuf;
use clap::Args;
use indaga_core::config::Config;
use indaga_core::{FrequencyTable, OutputFormat, RenderedArtifact, Renderer, renderer_for};
use serde::Serialize;
use tracing::{debug, instrument};

use super::keywords::{KeywordsArgs, rank};

/// Arguments for the `render` subcommand.
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Input and ranking options.
    #[command(flatten)]
    pub keywords: KeywordsArgs,

    /// Visualization to produce.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the artifact here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

/// JSON summary of a rendered artifact.
#[derive(Serialize)]
pub(crate) struct ArtifactReport<'a> {
    pub format: OutputFormat,
    pub mime_type: &'static str,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a Utf8PathBuf>,
    /// Inline data URI when no output file was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<&'a FrequencyTable>,
}

impl<'a> ArtifactReport<'a> {
    pub(crate) fn new(
        format: OutputFormat,
        artifact: &RenderedArtifact,
        output: Option<&'a Utf8PathBuf>,
        keywords: Option<&'a FrequencyTable>,
    ) -> Self {
        Self {
            format,
            mime_type: artifact.mime_type(),
            bytes: artifact.as_bytes().len(),
            output,
            data_uri: output.is_none().then(|| artifact.to_data_uri()),
            keywords,
        }
    }
}

/// Build the renderer for `format` using the configured chart size.
pub fn renderer(format: OutputFormat, config: &Config) -> Box<dyn Renderer> {
    renderer_for(format, config.chart_width, config.chart_height)
}

/// Rank the input and render it.
#[instrument(name = "cmd_render", skip_all, fields(source, format))]
pub fn cmd_render(
    args: RenderArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let format = args.format.unwrap_or(config.format);
    let source = super::input_label(args.keywords.file.as_deref());
    let span = tracing::Span::current();
    span.record("source", source);
    span.record("format", format.as_str());
    debug!(output = ?args.output, "executing render command");

    let text = super::read_text(args.keywords.file.as_deref(), max_input)?;
    let (_, table) = rank(&text, &args.keywords, config);
    let artifact = renderer(format, config).render(&table);

    if global_json {
        if let Some(ref path) = args.output {
            super::emit_artifact(&artifact, Some(path))?;
        }
        let report = ArtifactReport::new(format, &artifact, args.output.as_ref(), Some(&table));
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    super::emit_artifact(&artifact, args.output.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indaga_core::TableRenderer;

    #[test]
    fn renderer_honours_configured_chart_size() {
        let config = Config {
            chart_width: 480,
            chart_height: 320,
            ..Config::default()
        };
        let table = FrequencyTable::new();
        match renderer(OutputFormat::Chart, &config).render(&table) {
            RenderedArtifact::Image { width, height, .. } => assert_eq!((width, height), (480, 320)),
            RenderedArtifact::Markup(_) => panic!("expected an image"),
        }
        assert!(matches!(
            renderer(OutputFormat::Table, &config).render(&table),
            RenderedArtifact::Markup(_)
        ));
    }

    #[test]
    fn report_inlines_data_without_output() {
        let table = FrequencyTable::new();
        let artifact = TableRenderer.render(&table);
        let report = ArtifactReport::new(OutputFormat::Table, &artifact, None, Some(&table));
        assert_eq!(report.mime_type, "text/html");
        assert!(report.data_uri.unwrap().starts_with("data:text/html;base64,"));

        let path = Utf8PathBuf::from("tabla.html");
        let report = ArtifactReport::new(OutputFormat::Table, &artifact, Some(&path), None);
        assert!(report.data_uri.is_none());
    }
}
