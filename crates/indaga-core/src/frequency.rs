//! Word frequency ranking.
//!
//! [`FrequencyCounter`] is the single filter-and-count implementation shared
//! by both renderers and the text reducer. Ranking is by count descending;
//! equal counts keep the order in which the words first appeared.

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TableError;
use crate::stopwords::SPANISH_STOPWORDS;

/// Tokens of this many characters or fewer are dropped by default.
///
/// The threshold is exclusive: `2` keeps tokens of three or more chars,
/// the same cut as "at least 3 characters".
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Default number of entries kept for display.
pub const DEFAULT_TOP_N: usize = 20;

/// One ranked word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyEntry {
    /// The normalized word.
    pub token: String,
    /// Number of occurrences after filtering.
    pub count: usize,
}

/// Ranked `(token, count)` pairs, highest count first.
///
/// Deserializing goes through `TryFrom<Vec<FrequencyEntry>>`, so a table read
/// back from JSON keeps the same ordering and uniqueness as a counted one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// An empty table.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Entries in rank order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest count in the table, if any.
    pub fn max_count(&self) -> Option<usize> {
        self.entries.first().map(|e| e.count)
    }

    /// Count recorded for `token`, if ranked.
    pub fn count_of(&self, token: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.token == token)
            .map(|e| e.count)
    }

    /// Iterate over `(token, count)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.token.as_str(), e.count))
    }
}

impl TryFrom<Vec<FrequencyEntry>> for FrequencyTable {
    type Error = TableError;

    fn try_from(entries: Vec<FrequencyEntry>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.count == 0 {
                return Err(TableError::ZeroCount(entry.token.clone()));
            }
            if !seen.insert(entry.token.as_str()) {
                return Err(TableError::DuplicateToken(entry.token.clone()));
            }
            if index > 0 && entries[index - 1].count < entry.count {
                return Err(TableError::Unsorted {
                    index,
                    token: entry.token.clone(),
                });
            }
        }
        Ok(Self { entries })
    }
}

impl<'de> Deserialize<'de> for FrequencyTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<FrequencyEntry>::deserialize(deserializer)?;
        Self::try_from(entries).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Stopword and length filter plus counter.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<'s> {
    stopwords: &'s HashSet<&'s str>,
    min_length: usize,
}

impl Default for FrequencyCounter<'static> {
    fn default() -> Self {
        Self::spanish()
    }
}

impl FrequencyCounter<'static> {
    /// Counter using the built-in Spanish stopwords and the default length threshold.
    pub fn spanish() -> Self {
        Self::new(&SPANISH_STOPWORDS)
    }
}

impl<'s> FrequencyCounter<'s> {
    /// Counter over an arbitrary stopword set.
    pub const fn new(stopwords: &'s HashSet<&'s str>) -> Self {
        Self {
            stopwords,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Drop tokens whose length in characters is `<= min_length`.
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// The active length threshold.
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether a token survives filtering.
    pub fn keeps(&self, token: &str) -> bool {
        !token.is_empty()
            && token.chars().count() > self.min_length
            && !self.stopwords.contains(token)
    }

    /// Rank the `n` most frequent surviving tokens.
    #[tracing::instrument(skip_all, fields(tokens = tokens.len(), n = n, min_length = self.min_length))]
    pub fn top_frequent<S: AsRef<str>>(&self, tokens: &[S], n: usize) -> FrequencyTable {
        if n == 0 || tokens.is_empty() {
            return FrequencyTable::new();
        }

        // Slot per distinct token in first-seen order.
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<(&str, usize)> = Vec::new();

        for token in tokens {
            let token: &str = token.as_ref();
            if !self.keeps(token) {
                continue;
            }
            match slots.get(token) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    slots.insert(token, entries.len());
                    entries.push((token, 1));
                }
            }
        }

        // Stable: equal counts stay in first-seen order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);

        tracing::debug!(
            distinct = slots.len(),
            kept = entries.len(),
            "ranked tokens"
        );

        FrequencyTable {
            entries: entries
                .into_iter()
                .map(|(token, count)| FrequencyEntry {
                    token: token.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// Rank the `n` most frequent tokens not in `stopwords` and longer than `min_length` chars.
pub fn top_frequent<S: AsRef<str>>(
    tokens: &[S],
    stopwords: &HashSet<&str>,
    n: usize,
    min_length: usize,
) -> FrequencyTable {
    FrequencyCounter::new(stopwords)
        .with_min_length(min_length)
        .top_frequent(tokens, n)
}
