//! Core library for indaga.
//!
//! Turns Spanish prose into a ranked keyword table and renders it as a bar
//! chart (PNG) or a self-contained HTML table.
//!
//! # Modules
//!
//! - [`tokenize`] - Word extraction
//! - [`stopwords`] - Built-in Spanish stopword list
//! - [`frequency`] - Ranking with stable tie-break
//! - [`reduce`] - Saturation-capped keyword text
//! - [`render`] - Chart and table renderers
//! - [`search`], [`keywords`], [`summary`] - External collaborators
//! - [`pipeline`] - Topic to report
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use indaga_core::{render_table, tokenize, top_frequent};
//! use indaga_core::stopwords::SPANISH_STOPWORDS;
//!
//! let tokens = tokenize("El gato y el perro. El gato duerme.");
//! let table = top_frequent(&tokens, &SPANISH_STOPWORDS, 20, 2);
//! assert_eq!(table.count_of("gato"), Some(2));
//!
//! let html = render_table(&table);
//! assert!(html.contains("<strong>gato</strong>"));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod frequency;
pub mod keywords;
pub mod markdown;
pub mod pipeline;
pub mod reduce;
pub mod render;
pub mod search;
pub mod stopwords;
pub mod summary;
pub mod text;
pub mod tokenize;

pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{
    ConfigError, ConfigResult, KeywordError, KeywordResult, PipelineError, PipelineResult,
    SearchError, SearchResult, SummaryError, SummaryResult, TableError,
};
pub use frequency::{FrequencyCounter, FrequencyEntry, FrequencyTable, top_frequent};
pub use keywords::{FrequencyReduction, KeywordExtractor};
pub use pipeline::{Pipeline, ResearchReport};
pub use reduce::{TextReducer, reduce_for_visualization};
pub use render::{
    ChartRenderer, OutputFormat, RenderedArtifact, Renderer, TableRenderer, render_chart,
    render_table, renderer_for,
};
pub use search::{SearchBackend, SearchHit, SearchProvider, SimulatedSearch, full_text};
pub use summary::{KeySentences, Summarizer};
pub use text::RawText;
pub use tokenize::{Tokenizer, tokenize};
