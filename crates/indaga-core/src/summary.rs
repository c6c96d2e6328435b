//! Topic summaries.
//!
//! A language model can plug in behind [`Summarizer`]. The built-in
//! [`KeySentences`] is extractive: each sentence is scored by how often its
//! words occur across the whole text, and the best few are returned in
//! document order.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SummaryResult;
use crate::frequency::FrequencyCounter;
use crate::tokenize::Tokenizer;

/// Sentences kept by default.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Ranked words that carry weight when scoring sentences.
const SCORED_WORDS: usize = 50;

/// Sentences with fewer content words than this are never picked.
const MIN_SENTENCE_WORDS: usize = 3;

/// A run of text up to and including its closing punctuation.
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?\n]+[.!?]*").expect("valid regex"));

/// Capability to condense search text into a short summary of a topic.
pub trait Summarizer {
    /// Short summarizer name for logs and reports.
    fn name(&self) -> &str;

    /// Summarize `text`, which was gathered for `topic`.
    fn summarize(&self, topic: &str, text: &str) -> SummaryResult<String>;
}

impl<S: Summarizer + ?Sized> Summarizer for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn summarize(&self, topic: &str, text: &str) -> SummaryResult<String> {
        (**self).summarize(topic, text)
    }
}

/// Extractive summarizer: the highest-scoring sentences, in order. Never fails.
#[derive(Debug, Clone)]
pub struct KeySentences<'s> {
    tokenizer: Tokenizer,
    counter: FrequencyCounter<'s>,
    sentences: usize,
}

impl Default for KeySentences<'static> {
    fn default() -> Self {
        Self::new(Tokenizer::new(), FrequencyCounter::spanish())
    }
}

impl<'s> KeySentences<'s> {
    /// Summarizer keeping [`DEFAULT_SUMMARY_SENTENCES`] sentences.
    pub const fn new(tokenizer: Tokenizer, counter: FrequencyCounter<'s>) -> Self {
        Self {
            tokenizer,
            counter,
            sentences: DEFAULT_SUMMARY_SENTENCES,
        }
    }

    /// Number of sentences to keep. `0` yields an empty summary.
    pub const fn with_sentences(mut self, sentences: usize) -> Self {
        self.sentences = sentences;
        self
    }

    /// Pick the key sentences of `text`.
    #[tracing::instrument(skip_all, fields(input_len = text.len(), sentences = self.sentences))]
    pub fn select(&self, text: &str) -> String {
        if self.sentences == 0 {
            return String::new();
        }

        let tokens = self.tokenizer.tokenize(text);
        let table = self.counter.top_frequent(&tokens, SCORED_WORDS);
        let weights: HashMap<&str, usize> = table.iter().collect();

        let mut scored: Vec<(usize, f64, &str)> = SENTENCE
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|sentence| !sentence.is_empty())
            .enumerate()
            .filter_map(|(position, sentence)| {
                let words: Vec<String> = self
                    .tokenizer
                    .tokenize(sentence)
                    .into_iter()
                    .filter(|w| self.counter.keeps(w))
                    .collect();
                if words.len() < MIN_SENTENCE_WORDS {
                    return None;
                }
                let total: usize = words
                    .iter()
                    .map(|w| weights.get(w.as_str()).copied().unwrap_or(0))
                    .sum();
                let score = total as f64 / (words.len() as f64).sqrt();
                Some((position, score, sentence))
            })
            .collect();

        // Stable: equal scores keep document order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.sentences);
        scored.sort_by_key(|&(position, _, _)| position);

        tracing::debug!(kept = scored.len(), "selected key sentences");
        scored
            .into_iter()
            .map(|(_, _, sentence)| sentence)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Summarizer for KeySentences<'_> {
    fn name(&self) -> &str {
        "key-sentences"
    }

    fn summarize(&self, _topic: &str, text: &str) -> SummaryResult<String> {
        Ok(self.select(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "El clima cambia. Las sequías afectan cultivos y cultivos pierden agua. \
                        Hoy llueve poco en la ciudad vieja. Los cultivos necesitan agua y las \
                        sequías reducen el agua disponible.";

    #[test]
    fn keeps_best_sentences_in_document_order() {
        let summary = KeySentences::default().with_sentences(2).select(TEXT);
        assert_eq!(
            summary,
            "Las sequías afectan cultivos y cultivos pierden agua. Los cultivos necesitan agua \
             y las sequías reducen el agua disponible."
        );
    }

    #[test]
    fn short_sentences_are_skipped() {
        let summary = KeySentences::default().select(TEXT);
        assert!(!summary.contains("El clima cambia."));
        assert!(summary.contains("Hoy llueve poco"));
    }

    #[test]
    fn empty_text_and_zero_sentences_give_empty_summary() {
        assert_eq!(KeySentences::default().select(""), "");
        assert_eq!(KeySentences::default().with_sentences(0).select(TEXT), "");
    }

    #[test]
    fn summaries_are_repeatable() {
        let summarizer = KeySentences::default();
        let first = summarizer.summarize("clima", TEXT).unwrap();
        assert_eq!(summarizer.summarize("clima", TEXT).unwrap(), first);
    }

    #[test]
    fn boxed_summarizer_delegates() {
        let boxed: Box<dyn Summarizer> = Box::new(KeySentences::default());
        assert_eq!(boxed.name(), "key-sentences");
        assert!(!boxed.summarize("clima", TEXT).unwrap().is_empty());
    }
}
