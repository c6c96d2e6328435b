//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use indaga_core::markdown;
use indaga_core::{Config, RenderedArtifact};

pub mod info;
pub mod keywords;
pub mod reduce;
pub mod render;
pub mod research;

/// Path argument meaning "read standard input".
const STDIN_MARKER: &str = "-";

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let bytes =
        std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read standard input, stopping one byte past the limit to detect overflow.
pub fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            stdin
                .take(limit)
                .read_to_end(&mut bytes)
                .context("failed to read standard input")?;
            if bytes.len() > max {
                anyhow::bail!("input too large: standard input exceeds {max} bytes");
            }
        }
        None => {
            let mut stdin = stdin;
            stdin
                .read_to_end(&mut bytes)
                .context("failed to read standard input")?;
        }
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read the command input: a file, or stdin when `file` is absent or `-`.
///
/// Markdown files are reduced to their visible text.
pub fn read_text(file: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match file {
        None => read_stdin(max_bytes),
        Some(path) if path.as_str() == STDIN_MARKER => read_stdin(max_bytes),
        Some(path) => {
            let content = read_input_file(path, max_bytes)?;
            if markdown::is_markdown(path) {
                Ok(markdown::plain_text(&content))
            } else {
                Ok(content)
            }
        }
    }
}

/// Configured extra stopwords, lower-cased to match tokenizer output.
pub fn extra_stopwords(config: &Config) -> Vec<String> {
    config
        .extra_stopwords
        .iter()
        .map(|word| word.trim().to_lowercase())
        .collect()
}

/// Label for the input in logs and messages.
pub fn input_label(file: Option<&Utf8Path>) -> &str {
    match file {
        Some(path) if path.as_str() != STDIN_MARKER => path.as_str(),
        _ => "<stdin>",
    }
}

/// Write an artifact to `output`, or print it to stdout.
///
/// Images go to stdout as base64 since raw PNG bytes would garble a
/// terminal.
pub fn emit_artifact(artifact: &RenderedArtifact, output: Option<&Utf8PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path.as_std_path(), artifact.as_bytes())
                .with_context(|| format!("failed to write {path}"))?;
            tracing::info!(path = %path, bytes = artifact.as_bytes().len(), "artifact written");
        }
        None => match artifact {
            RenderedArtifact::Markup(html) => print!("{html}"),
            RenderedArtifact::Image { .. } => println!("{}", artifact.to_base64()),
        },
    }
    Ok(())
}
