//! Markdown input handling.
//!
//! Research notes are usually markdown. Code, markup and frontmatter keys
//! would otherwise dominate the counts, so they are removed before
//! tokenizing. Heading text is kept: section titles are often the best
//! keywords in a note.

use camino::Utf8Path;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Whether `path` has a markdown extension.
pub fn is_markdown(path: &Utf8Path) -> bool {
    matches!(
        path.extension().map(str::to_ascii_lowercase).as_deref(),
        Some("md" | "markdown" | "mdx")
    )
}

/// Reduce markdown to the words a reader sees.
///
/// Removes code blocks, inline code, HTML, image alt text and YAML
/// frontmatter. Keeps headings, link text, list items, emphasis and table
/// cells.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn plain_text(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. }) => skip_depth += 1,
            Event::End(TagEnd::CodeBlock | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => result.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => result.push(' '),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::TableCell,
            ) if skip_depth == 0 => result.push(' '),
            _ => {}
        }
    }

    result
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let rest = &after_opening[close_pos + 4..];
    rest.find('\n').map_or("", |newline| &rest[newline + 1..])
}
