//! Keyword extraction collaborator.
//!
//! A language model can condense search text into a keyword string before
//! counting. When none is wired in, [`FrequencyReduction`] produces the same
//! kind of string locally with the saturation-capped reducer.

use crate::error::KeywordResult;
use crate::reduce::TextReducer;

/// Capability to condense long text into a space-separated keyword string.
pub trait KeywordExtractor {
    /// Short extractor name for logs and reports.
    fn name(&self) -> &str;

    /// Produce keywords for `text`.
    fn extract(&self, text: &str) -> KeywordResult<String>;
}

impl<E: KeywordExtractor + ?Sized> KeywordExtractor for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn extract(&self, text: &str) -> KeywordResult<String> {
        (**self).extract(text)
    }
}

/// Local extractor backed by [`TextReducer`]. Never fails.
#[derive(Debug, Clone)]
pub struct FrequencyReduction<'s> {
    reducer: TextReducer<'s>,
}

impl Default for FrequencyReduction<'static> {
    fn default() -> Self {
        Self::new(TextReducer::default())
    }
}

impl<'s> FrequencyReduction<'s> {
    /// Wrap a configured reducer.
    pub const fn new(reducer: TextReducer<'s>) -> Self {
        Self { reducer }
    }
}

impl KeywordExtractor for FrequencyReduction<'_> {
    fn name(&self) -> &str {
        "frequency-reduction"
    }

    fn extract(&self, text: &str) -> KeywordResult<String> {
        Ok(self.reducer.reduce(text))
    }
}
