//! Frequency-weighted text reduction.
//!
//! Compresses arbitrarily long text into a bag of its most frequent words,
//! each repeated `min(count, cap)` times. The cap keeps one dominant word from
//! dwarfing everything else in a downstream chart while still preserving rank.

use crate::frequency::FrequencyCounter;
use crate::text::RawText;
use crate::tokenize::Tokenizer;

/// Distinct words kept by default.
pub const DEFAULT_REDUCE_TOP_N: usize = 100;

/// Default repetition ceiling per word.
pub const DEFAULT_SATURATION_CAP: usize = 10;

/// Tokenize, rank and re-expand text with a saturation cap.
#[derive(Debug, Clone)]
pub struct TextReducer<'s> {
    tokenizer: Tokenizer,
    counter: FrequencyCounter<'s>,
    top_n: usize,
    cap: usize,
}

impl Default for TextReducer<'static> {
    fn default() -> Self {
        Self::new(Tokenizer::new(), FrequencyCounter::spanish())
    }
}

impl<'s> TextReducer<'s> {
    /// Reducer with default `top_n` and cap.
    pub const fn new(tokenizer: Tokenizer, counter: FrequencyCounter<'s>) -> Self {
        Self {
            tokenizer,
            counter,
            top_n: DEFAULT_REDUCE_TOP_N,
            cap: DEFAULT_SATURATION_CAP,
        }
    }

    /// Number of distinct words kept.
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Maximum repetitions emitted per word.
    pub const fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Reduce text to a space-separated bag of capped repetitions.
    #[tracing::instrument(skip_all, fields(top_n = self.top_n, cap = self.cap))]
    pub fn reduce<'a>(&self, text: impl Into<RawText<'a>>) -> String {
        let tokens = self.tokenizer.tokenize(text);
        let table = self.counter.top_frequent(&tokens, self.top_n);

        let mut words: Vec<&str> = Vec::new();
        for (token, count) in table.iter() {
            words.extend(std::iter::repeat_n(token, count.min(self.cap)));
        }
        words.join(" ")
    }
}

/// Reduce text with the Spanish stopwords, `top_n = 100` and `cap = 10`.
pub fn reduce_for_visualization<'a>(text: impl Into<RawText<'a>>) -> String {
    TextReducer::default().reduce(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_word_is_capped() {
        let text = format!("{}{}", "dato ".repeat(50), "otro ".repeat(3));
        // "otro" is a stopword in the Spanish list; use an empty set to keep it.
        let stopwords = std::collections::HashSet::new();
        let reducer = TextReducer::new(Tokenizer::new(), FrequencyCounter::new(&stopwords));
        let reduced = reducer.reduce(text.as_str());

        let words: Vec<&str> = reduced.split(' ').collect();
        assert_eq!(words.iter().filter(|w| **w == "dato").count(), 10);
        assert_eq!(words.iter().filter(|w| **w == "otro").count(), 3);
        let last_dato = words.iter().rposition(|w| *w == "dato").unwrap();
        let first_otro = words.iter().position(|w| *w == "otro").unwrap();
        assert!(last_dato < first_otro);
    }

    #[test]
    fn default_reducer_applies_spanish_stopwords() {
        let text = format!("{}{}", "dato ".repeat(50), "otro ".repeat(3));
        let reduced = reduce_for_visualization(text.as_str());
        assert_eq!(reduced, vec!["dato"; 10].join(" "));
    }

    #[test]
    fn empty_text_reduces_to_empty() {
        assert_eq!(reduce_for_visualization(""), "");
        assert_eq!(reduce_for_visualization(None::<&str>), "");
    }

    #[test]
    fn zero_cap_reduces_to_empty() {
        let reducer = TextReducer::default().with_cap(0);
        assert_eq!(reducer.reduce("medicina medicina datos"), "");
    }

    #[test]
    fn top_n_limits_distinct_words() {
        let reducer = TextReducer::default().with_top_n(1);
        assert_eq!(
            reducer.reduce("medicina datos medicina datos medicina"),
            "medicina medicina medicina"
        );
    }

    #[test]
    fn reduced_text_ranks_the_same() {
        let text = "salud digital salud pacientes digital salud hospital";
        let reduced = reduce_for_visualization(text);
        assert_eq!(reduced, "salud salud salud digital digital pacientes hospital");
    }
}
