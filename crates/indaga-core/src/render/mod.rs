//! Frequency table rendering.
//!
//! Two interchangeable front ends implement [`Renderer`]:
//!
//! - [`ChartRenderer`] draws a horizontal bar chart and encodes it as PNG.
//! - [`TableRenderer`] emits a self-contained HTML table with inline styles.
//!
//! Callers pick one through [`OutputFormat`]. Rendering never fails; empty
//! tables produce placeholder output.

pub mod chart;
mod font;
pub mod table;
mod viridis;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;

pub use chart::ChartRenderer;
pub use table::TableRenderer;

/// Which renderer to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// PNG bar chart.
    Chart,
    /// HTML table with proportional bars.
    #[default]
    Table,
}

impl OutputFormat {
    /// Returns the format name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Table => "table",
        }
    }

    /// File extension for artifacts of this format.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Chart => "png",
            Self::Table => "html",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a renderer, regenerated on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedArtifact {
    /// Encoded PNG image.
    Image {
        /// PNG file bytes.
        png: Vec<u8>,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// HTML fragment.
    Markup(String),
}

impl RenderedArtifact {
    /// MIME type of the artifact.
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image/png",
            Self::Markup(_) => "text/html",
        }
    }

    /// Raw artifact bytes (PNG data or UTF-8 markup).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Image { png, .. } => png,
            Self::Markup(html) => html.as_bytes(),
        }
    }

    /// Standard base64 encoding of [`as_bytes`](Self::as_bytes).
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.as_bytes())
    }

    /// `data:` URI suitable for an `<img src>` or `<iframe src>`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.to_base64())
    }
}

/// A front end that turns a ranked table into something presentable.
pub trait Renderer {
    /// Render the table. Must not fail, including for an empty table.
    fn render(&self, table: &FrequencyTable) -> RenderedArtifact;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, table: &FrequencyTable) -> RenderedArtifact {
        (**self).render(table)
    }
}

/// Build the renderer for `format`.
///
/// `width` and `height` size the chart canvas and are ignored for tables.
pub fn renderer_for(format: OutputFormat, width: u32, height: u32) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Chart => Box::new(ChartRenderer::with_size(width, height)),
        OutputFormat::Table => Box::new(TableRenderer),
    }
}

/// Render a PNG bar chart with default dimensions.
pub fn render_chart(table: &FrequencyTable) -> Vec<u8> {
    ChartRenderer::default().render_png(table)
}

/// Render an inline-styled HTML table.
pub fn render_table(table: &FrequencyTable) -> String {
    TableRenderer.render_html(table)
}
