//! Word tokenization.
//!
//! Lower-cases text and extracts maximal runs of Unicode word characters
//! (`\b\w+\b`). Punctuation never survives; digits survive unless
//! [`Tokenizer::strip_digits`] is set.

use regex::Regex;
use std::sync::LazyLock;

use crate::text::RawText;

/// Maximal runs of word characters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Runs of decimal digits.
static DIGIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Configurable word tokenizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    strip_digits: bool,
}

impl Tokenizer {
    /// Create a tokenizer that keeps digits.
    pub const fn new() -> Self {
        Self {
            strip_digits: false,
        }
    }

    /// Remove every digit run before extracting words.
    ///
    /// `"año2025"` becomes `"año"` and a bare `"2025"` disappears entirely.
    pub const fn strip_digits(mut self, strip: bool) -> Self {
        self.strip_digits = strip;
        self
    }

    /// Whether digits are stripped.
    pub const fn strips_digits(&self) -> bool {
        self.strip_digits
    }

    /// Split text into lower-cased word tokens, in input order.
    #[tracing::instrument(skip_all, fields(strip_digits = self.strip_digits))]
    pub fn tokenize<'a>(&self, text: impl Into<RawText<'a>>) -> Vec<String> {
        let text = text.into();
        if text.is_blank() {
            return Vec::new();
        }

        let lowered = text.as_str().to_lowercase();
        let prepared = if self.strip_digits {
            DIGIT_PATTERN.replace_all(&lowered, "")
        } else {
            lowered.as_str().into()
        };

        let tokens: Vec<String> = WORD_PATTERN
            .find_iter(&prepared)
            .map(|m| m.as_str().to_string())
            .collect();
        tracing::debug!(tokens = tokens.len(), "tokenized text");
        tokens
    }
}

/// Tokenize with default settings (digits kept).
pub fn tokenize<'a>(text: impl Into<RawText<'a>>) -> Vec<String> {
    Tokenizer::new().tokenize(text)
}
