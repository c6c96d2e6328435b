//! End-to-end research run.
//!
//! topic → [`SearchProvider`] → [`full_text`] → [`KeywordExtractor`] →
//! [`FrequencyCounter`] → [`Renderer`], with an optional [`Summarizer`]
//! reading the same text.
//!
//! Everything after the search step is pure; a failed run can be retried as
//! a whole.

use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};
use crate::frequency::{DEFAULT_TOP_N, FrequencyCounter, FrequencyTable};
use crate::keywords::{FrequencyReduction, KeywordExtractor};
use crate::reduce::TextReducer;
use crate::render::{RenderedArtifact, Renderer};
use crate::search::{SearchHit, SearchProvider, full_text};
use crate::summary::Summarizer;
use crate::tokenize::Tokenizer;

/// Output of one research run.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchReport {
    /// Topic as searched (trimmed).
    pub topic: String,
    /// Provider that produced the results.
    pub provider: String,
    /// Extractor that produced the keyword string.
    pub extractor: String,
    /// Summary of the search text, when a summarizer is configured and succeeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Raw search hits.
    pub results: Vec<SearchHit>,
    /// Ranked keywords.
    pub table: FrequencyTable,
    /// Rendered visualization.
    #[serde(skip)]
    pub artifact: RenderedArtifact,
}

/// A configured research pipeline.
pub struct Pipeline<'s> {
    search: Box<dyn SearchProvider + 's>,
    extractor: Box<dyn KeywordExtractor + 's>,
    fallback: TextReducer<'s>,
    tokenizer: Tokenizer,
    counter: FrequencyCounter<'s>,
    top_n: usize,
    renderer: Box<dyn Renderer + 's>,
    summarizer: Option<Box<dyn Summarizer + 's>>,
}

impl<'s> Pipeline<'s> {
    /// Pipeline with local keyword reduction, Spanish stopwords and top 20.
    pub fn new(search: Box<dyn SearchProvider + 's>, renderer: Box<dyn Renderer + 's>) -> Self {
        Self {
            search,
            extractor: Box::new(FrequencyReduction::default()),
            fallback: TextReducer::default(),
            tokenizer: Tokenizer::new(),
            counter: FrequencyCounter::spanish(),
            top_n: DEFAULT_TOP_N,
            renderer,
            summarizer: None,
        }
    }

    /// Use a different keyword extractor, such as a language model client.
    pub fn with_extractor(mut self, extractor: Box<dyn KeywordExtractor + 's>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Also summarize the search text. A failing summarizer only drops the summary.
    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarizer + 's>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Reducer used when the extractor fails, and by the default extractor.
    pub fn with_reducer(mut self, reducer: TextReducer<'s>) -> Self {
        self.extractor = Box::new(FrequencyReduction::new(reducer.clone()));
        self.fallback = reducer;
        self
    }

    /// Tokenizer applied to the keyword string.
    pub const fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Counter applied to the keyword tokens.
    pub fn with_counter(mut self, counter: FrequencyCounter<'s>) -> Self {
        self.counter = counter;
        self
    }

    /// Number of ranked keywords to keep.
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Rank keywords of already-fetched text.
    pub fn rank(&self, text: &str) -> FrequencyTable {
        let tokens = self.tokenizer.tokenize(text);
        self.counter.top_frequent(&tokens, self.top_n)
    }

    /// Search, extract, rank and render.
    #[tracing::instrument(skip(self), fields(provider = self.search.name(), extractor = self.extractor.name()))]
    pub fn run(&self, topic: &str) -> PipelineResult<ResearchReport> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(PipelineError::EmptyTopic);
        }

        let results = self.search.search(topic)?;
        tracing::info!(results = results.len(), "search finished");

        let text = full_text(&results);
        let keywords = match self.extractor.extract(&text) {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::warn!(error = %e, "keyword extraction failed, using local reduction");
                self.fallback.reduce(text.as_str())
            }
        };

        let summary = self.summarizer.as_ref().and_then(|summarizer| {
            match summarizer.summarize(topic, &text) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    tracing::warn!(error = %e, "summary failed, continuing without one");
                    None
                }
            }
        });

        let table = self.rank(&keywords);
        let artifact = self.renderer.render(&table);
        tracing::info!(keywords = table.len(), "research run complete");

        Ok(ResearchReport {
            topic: topic.to_string(),
            provider: self.search.name().to_string(),
            extractor: self.extractor.name().to_string(),
            summary,
            results,
            table,
            artifact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{
        KeywordError, KeywordResult, SearchError, SearchResult, SummaryError, SummaryResult,
    };
    use crate::summary::KeySentences;
    use crate::render::{ChartRenderer, TableRenderer};
    use crate::search::SimulatedSearch;

    struct Offline;

    impl SearchProvider for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        fn search(&self, _topic: &str) -> SearchResult<Vec<SearchHit>> {
            Err(SearchError::Unavailable {
                provider: "offline".to_string(),
                reason: "no network".to_string(),
            })
        }
    }

    struct Canned(Vec<SearchHit>);

    impl SearchProvider for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        fn search(&self, _topic: &str) -> SearchResult<Vec<SearchHit>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenModel;

    impl KeywordExtractor for BrokenModel {
        fn name(&self) -> &str {
            "broken-model"
        }

        fn extract(&self, _text: &str) -> KeywordResult<String> {
            Err(KeywordError::Backend {
                extractor: "broken-model".to_string(),
                reason: "timeout".to_string(),
            })
        }
    }

    struct FixedModel(&'static str);

    impl KeywordExtractor for FixedModel {
        fn name(&self) -> &str {
            "fixed-model"
        }

        fn extract(&self, _text: &str) -> KeywordResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct MutedModel;

    impl Summarizer for MutedModel {
        fn name(&self) -> &str {
            "muted-model"
        }

        fn summarize(&self, _topic: &str, _text: &str) -> SummaryResult<String> {
            Err(SummaryError::Backend {
                summarizer: "muted-model".to_string(),
                reason: "rate limited".to_string(),
            })
        }
    }

    fn hit(content: &str) -> SearchHit {
        SearchHit {
            title: "Artículo".to_string(),
            url: "https://example.org/a".to_string(),
            content: content.to_string(),
            raw_content: None,
        }
    }

    #[test]
    fn simulated_run_produces_table_and_markup() {
        let pipeline = Pipeline::new(Box::new(SimulatedSearch::default()), Box::new(TableRenderer));
        let report = pipeline.run("inteligencia artificial").unwrap();
        assert_eq!(report.results.len(), 5);
        assert_eq!(report.provider, "simulated");
        assert_eq!(report.extractor, "frequency-reduction");
        assert!(!report.table.is_empty());
        assert!(report.table.len() <= DEFAULT_TOP_N);
        assert!(matches!(report.artifact, RenderedArtifact::Markup(_)));
    }

    #[test]
    fn chart_renderer_yields_image() {
        let pipeline = Pipeline::new(
            Box::new(SimulatedSearch::default()),
            Box::new(ChartRenderer::with_size(400, 300)),
        );
        let report = pipeline.run("robótica").unwrap();
        match report.artifact {
            RenderedArtifact::Image { width, height, .. } => assert_eq!((width, height), (400, 300)),
            RenderedArtifact::Markup(_) => panic!("expected an image"),
        }
    }

    #[test]
    fn empty_topic_is_rejected() {
        let pipeline = Pipeline::new(Box::new(SimulatedSearch::default()), Box::new(TableRenderer));
        assert!(matches!(pipeline.run("  "), Err(PipelineError::EmptyTopic)));
    }

    #[test]
    fn search_failure_propagates() {
        let pipeline = Pipeline::new(Box::new(Offline), Box::new(TableRenderer));
        let err = pipeline.run("clima").unwrap_err();
        assert!(matches!(err, PipelineError::Search(_)));
        assert!(err.to_string().contains("no network"));
    }

    #[test]
    fn extractor_failure_falls_back_to_reduction() {
        let hits = vec![hit("vacunas vacunas ensayos vacunas ensayos pacientes")];
        let pipeline = Pipeline::new(Box::new(Canned(hits)), Box::new(TableRenderer))
            .with_extractor(Box::new(BrokenModel));
        let report = pipeline.run("vacunas").unwrap();
        let pairs: Vec<(&str, usize)> = report.table.iter().collect();
        assert_eq!(pairs, vec![("vacunas", 3), ("ensayos", 2), ("pacientes", 1)]);
    }

    #[test]
    fn model_keywords_bypass_reduction() {
        let hits = vec![hit("texto largo que el modelo resume")];
        let pipeline = Pipeline::new(Box::new(Canned(hits)), Box::new(TableRenderer))
            .with_extractor(Box::new(FixedModel("genómica genómica proteínas")));
        let report = pipeline.run("biología").unwrap();
        let pairs: Vec<(&str, usize)> = report.table.iter().collect();
        assert_eq!(pairs, vec![("genómica", 2), ("proteínas", 1)]);
    }

    #[test]
    fn reducer_cap_limits_counts() {
        let text = "datos ".repeat(40);
        let pipeline = Pipeline::new(Box::new(Canned(vec![hit(&text)])), Box::new(TableRenderer))
            .with_reducer(TextReducer::default().with_cap(4));
        let report = pipeline.run("datos").unwrap();
        assert_eq!(report.table.count_of("datos"), Some(4));
    }

    #[test]
    fn runs_are_repeatable() {
        let pipeline = Pipeline::new(Box::new(SimulatedSearch::default()), Box::new(TableRenderer));
        let first = pipeline.run("energía").unwrap();
        let second = pipeline.run("energía").unwrap();
        assert_eq!(first.table, second.table);
        assert_eq!(first.artifact, second.artifact);
    }

    #[test]
    fn no_summary_without_summarizer() {
        let pipeline = Pipeline::new(Box::new(SimulatedSearch::default()), Box::new(TableRenderer));
        assert!(pipeline.run("energía").unwrap().summary.is_none());
    }

    #[test]
    fn summarizer_reads_search_text() {
        let hits = vec![hit(
            "Las vacunas nuevas superan ensayos clínicos. Hoy hace sol. \
             Los ensayos con vacunas incluyen miles de pacientes.",
        )];
        let pipeline = Pipeline::new(Box::new(Canned(hits)), Box::new(TableRenderer))
            .with_summarizer(Box::new(KeySentences::default().with_sentences(1)));
        let report = pipeline.run("vacunas").unwrap();
        let summary = report.summary.unwrap();
        assert!(summary.contains("vacunas"));
        assert!(!summary.contains("sol"));
    }

    #[test]
    fn summarizer_failure_keeps_the_rest_of_the_report() {
        let pipeline = Pipeline::new(Box::new(SimulatedSearch::default()), Box::new(TableRenderer))
            .with_summarizer(Box::new(MutedModel));
        let report = pipeline.run("energía").unwrap();
        assert!(report.summary.is_none());
        assert!(!report.table.is_empty());
    }
}
