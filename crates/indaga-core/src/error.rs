//! Error types for indaga-core.
//!
//! Tokenizing, counting, reducing and rendering never fail; the types here
//! cover configuration and the external collaborators.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a list of entries is not a valid frequency table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An entry ranks above one with a higher count.
    #[error("entry {index} ({token}) outranks a higher count")]
    Unsorted {
        /// Position of the out-of-order entry.
        index: usize,
        /// Its token.
        token: String,
    },

    /// The same token appears twice.
    #[error("token {0} appears more than once")]
    DuplicateToken(String),

    /// A ranked token has a count of zero.
    #[error("token {0} has a zero count")]
    ZeroCount(String),
}

/// Errors reported by a search provider.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The provider could not be reached or refused the request.
    #[error("search provider {provider} unavailable: {reason}")]
    Unavailable {
        /// Name of the provider that failed.
        provider: String,
        /// Provider-supplied failure description.
        reason: String,
    },
}

/// Result type alias using [`SearchError`].
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors reported by a keyword extractor.
#[derive(Error, Debug)]
pub enum KeywordError {
    /// The extractor backend failed to produce a keyword string.
    #[error("keyword extractor {extractor} failed: {reason}")]
    Backend {
        /// Name of the extractor that failed.
        extractor: String,
        /// Backend-supplied failure description.
        reason: String,
    },
}

/// Result type alias using [`KeywordError`].
pub type KeywordResult<T> = Result<T, KeywordError>;

/// Errors reported by a summarizer.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The summarizer backend failed to produce a summary.
    #[error("summarizer {summarizer} failed: {reason}")]
    Backend {
        /// Name of the summarizer that failed.
        summarizer: String,
        /// Backend-supplied failure description.
        reason: String,
    },
}

/// Result type alias using [`SummaryError`].
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Errors that can abort a research pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The topic was empty after trimming.
    #[error("research topic is empty")]
    EmptyTopic,

    /// The search step failed.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Result type alias using [`PipelineError`].
pub type PipelineResult<T> = Result<T, PipelineError>;
