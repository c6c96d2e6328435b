//! Self-contained HTML frequency table.
//!
//! Every style is inline so the fragment renders the same inside any host
//! document. Output depends only on the table: no ids, no timestamps.

use super::{RenderedArtifact, Renderer};
use crate::frequency::{FrequencyEntry, FrequencyTable};

/// Label shown when there is nothing to rank.
pub const PLACEHOLDER_LABEL: &str = "no data";

const TABLE_STYLE: &str =
    "width: 100%; border-collapse: collapse; margin-top: 20px; font-family: Arial, sans-serif;";
const HEADER_STYLE: &str =
    "background-color: #4CAF50; color: white; padding: 10px; text-align: left;";
const CELL_STYLE: &str = "padding: 8px; border-bottom: 1px solid #ddd;";
const STRIPE_STYLE: &str = "background-color: #f2f2f2;";
const BAR_STYLE: &str = "background-color: #4CAF50; height: 20px; border-radius: 3px;";

const HEADERS: [&str; 3] = ["Palabra", "Frecuencia", "Distribución"];

/// HTML table renderer with proportional bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableRenderer;

impl TableRenderer {
    /// Render the table as an HTML fragment.
    ///
    /// An empty table becomes a single `"no data"` row with count 1.
    #[tracing::instrument(skip_all, fields(entries = table.len()))]
    pub fn render_html(&self, table: &FrequencyTable) -> String {
        let placeholder = [FrequencyEntry {
            token: PLACEHOLDER_LABEL.to_string(),
            count: 1,
        }];
        let entries = if table.is_empty() {
            &placeholder[..]
        } else {
            table.entries()
        };
        let max_count = entries.iter().map(|e| e.count).max().unwrap_or(1).max(1);

        let mut html = String::with_capacity(512 + entries.len() * 320);
        html.push_str(&format!("<table style=\"{TABLE_STYLE}\">\n"));
        html.push_str("  <tr>\n");
        for header in HEADERS {
            html.push_str(&format!("    <th style=\"{HEADER_STYLE}\">{header}</th>\n"));
        }
        html.push_str("  </tr>\n");

        for (index, entry) in entries.iter().enumerate() {
            let percent = entry.count as f64 / max_count as f64 * 100.0;
            // The header is row 1, so even data indices land on even rows.
            if index % 2 == 0 {
                html.push_str(&format!("  <tr style=\"{STRIPE_STYLE}\">\n"));
            } else {
                html.push_str("  <tr>\n");
            }
            html.push_str(&format!(
                "    <td style=\"{CELL_STYLE}\"><strong>{}</strong></td>\n",
                escape_html(&entry.token)
            ));
            html.push_str(&format!(
                "    <td style=\"{CELL_STYLE}\">{}</td>\n",
                entry.count
            ));
            html.push_str(&format!(
                "    <td style=\"{CELL_STYLE}\"><div style=\"{BAR_STYLE} width: {percent:.1}%;\"></div></td>\n"
            ));
            html.push_str("  </tr>\n");
        }

        html.push_str("</table>\n");
        html
    }
}

impl Renderer for TableRenderer {
    fn render(&self, table: &FrequencyTable) -> RenderedArtifact {
        RenderedArtifact::Markup(self.render_html(table))
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyCounter;
    use crate::tokenize::tokenize;

    fn table_for(text: &str) -> FrequencyTable {
        FrequencyCounter::spanish().top_frequent(&tokenize(text), 20)
    }

    #[test]
    fn one_row_per_entry_plus_header() {
        let html = TableRenderer.render_html(&table_for("gato gato perro gato perro pez"));
        assert_eq!(html.matches("<tr").count(), 4);
        assert!(html.contains("<strong>gato</strong>"));
        assert!(html.contains("<strong>pez</strong>"));
    }

    #[test]
    fn bar_width_is_relative_to_max() {
        let html = TableRenderer.render_html(&table_for("gato gato perro gato perro pez"));
        assert!(html.contains("width: 100.0%;"));
        assert!(html.contains("width: 66.7%;"));
        assert!(html.contains("width: 33.3%;"));
    }

    #[test]
    fn empty_table_renders_placeholder() {
        let html = TableRenderer.render_html(&FrequencyTable::new());
        assert!(!html.is_empty());
        assert!(html.contains("<strong>no data</strong>"));
        assert!(html.contains(">1</td>"));
        assert!(html.contains("width: 100.0%;"));
    }

    #[test]
    fn no_external_styles() {
        let html = TableRenderer.render_html(&table_for("salud digital salud"));
        assert!(!html.contains("<style"));
        assert!(!html.contains("class="));
        assert!(!html.contains("<link"));
        assert!(!html.contains(" id="));
    }

    #[test]
    fn rendering_is_idempotent() {
        let text = "La medicina digital cambia la medicina y los datos clínicos.";
        let first = TableRenderer.render_html(&table_for(text));
        let second = TableRenderer.render_html(&table_for(text));
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }

    #[test]
    fn rows_are_striped() {
        let html = TableRenderer.render_html(&table_for("salud digital hospital"));
        assert_eq!(html.matches(STRIPE_STYLE).count(), 2);
    }
}
