pub mod metrics;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Language (or language-independent marker) of one token.
pub type Tag = String;

/// Ordered tags of one segment of text, one per token.
pub type Utterance = Vec<Tag>;

/// Ordered utterances; order matters for matrix-language continuity.
pub type Corpus = Vec<Utterance>;

/// Tags ignored when computing code-switch statistics, typically
/// punctuation, named entities and other language-independent tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExcludeSet(BTreeSet<Tag>);

impl ExcludeSet {
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<Tag>> FromIterator<S> for ExcludeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Most frequent non-excluded tag of an utterance.
///
/// `tag` is `None` when every token is excluded, in which case `tokens` is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixLanguage<'a> {
    pub tag: Option<&'a str>,
    pub tokens: usize,
}

/// Every per-utterance quantity the corpus aggregate is built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UtteranceProfile {
    pub tokens: usize,
    pub language_tokens: usize,
    pub matrix_tag: Option<Tag>,
    pub matrix_tokens: usize,
    pub alternations: usize,
    pub code_switched: bool,
    /// Complexity in `[0, 100]`.
    pub score: f64,
}

/// Raw corpus counts for reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// All tokens, excluded tags included.
    pub tokens: usize,
    pub utterances: usize,
    pub switched: usize,
}

impl CorpusStats {
    /// Percentage of code-switched utterances, 0 for an empty corpus.
    pub fn switched_ratio(&self) -> f64 {
        if self.utterances == 0 {
            return 0.0;
        }
        self.switched as f64 / self.utterances as f64 * 100.0
    }
}

/// Everything reported for one corpus file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    pub dataset: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub stats: CorpusStats,
    pub switched_percent: f64,
    pub score: f64,
    pub excluded_tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<UtteranceProfile>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_set_lookup_by_str() {
        let exclude: ExcludeSet = ["other", "ne"].into_iter().collect();
        assert!(exclude.contains("ne"));
        assert!(!exclude.contains("lang1"));
        assert_eq!(exclude.len(), 2);
    }

    #[test]
    fn test_exclude_set_iterates_sorted() {
        let exclude: ExcludeSet = ["unk", "ambiguous", "other"].into_iter().collect();
        let tags: Vec<_> = exclude.iter().collect();
        assert_eq!(tags, vec!["ambiguous", "other", "unk"]);
    }

    #[test]
    fn test_switched_ratio() {
        let stats = CorpusStats {
            tokens: 20,
            utterances: 4,
            switched: 1,
        };
        assert_eq!(stats.switched_ratio(), 25.0);
        assert_eq!(CorpusStats::default().switched_ratio(), 0.0);
    }
}
