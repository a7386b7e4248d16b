pub mod corpus;
pub mod counters;
pub mod utterance;

use crate::core::{CorpusStats, ExcludeSet, MatrixLanguage, UtteranceProfile};
use crate::errors::Result;

pub use corpus::{
    aggregate_profiles, evaluate_corpus, evaluate_corpus_parallel, get_stats, profile_corpus,
    profile_corpus_parallel, score_profiles,
};
pub use counters::{count_alternations, count_language_tokens, count_matrix_tokens, is_code_switched};
pub use utterance::{complexity_score, evaluate_utterance, profile_utterance};

/// Stateless entry point over the complexity functions.
///
/// The only setting is whether corpus profiling runs on the rayon pool;
/// results are identical either way.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    parallel: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Evaluator {
    pub fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    pub fn sequential() -> Self {
        Self::new(false)
    }

    pub fn is_code_switched<T: AsRef<str>>(&self, tags: &[T], exclude: &ExcludeSet) -> bool {
        is_code_switched(tags, exclude)
    }

    pub fn count_alternations<T: AsRef<str>>(&self, tags: &[T], exclude: &ExcludeSet) -> usize {
        count_alternations(tags, exclude)
    }

    pub fn count_matrix_tokens<'a, T: AsRef<str>>(
        &self,
        tags: &'a [T],
        exclude: &ExcludeSet,
    ) -> MatrixLanguage<'a> {
        count_matrix_tokens(tags, exclude)
    }

    pub fn evaluate_utterance<T: AsRef<str>>(&self, tags: &[T], exclude: &ExcludeSet) -> Result<f64> {
        evaluate_utterance(tags, exclude)
    }

    pub fn profile_corpus<U, T>(&self, corpus: &[U], exclude: &ExcludeSet) -> Result<Vec<UtteranceProfile>>
    where
        U: AsRef<[T]> + Sync,
        T: AsRef<str> + Sync,
    {
        if self.parallel {
            profile_corpus_parallel(corpus, exclude)
        } else {
            profile_corpus(corpus, exclude)
        }
    }

    pub fn evaluate_corpus<U, T>(&self, corpus: &[U], exclude: &ExcludeSet) -> Result<f64>
    where
        U: AsRef<[T]> + Sync,
        T: AsRef<str> + Sync,
    {
        if self.parallel {
            evaluate_corpus_parallel(corpus, exclude)
        } else {
            evaluate_corpus(corpus, exclude)
        }
    }

    pub fn get_stats<U, T>(&self, corpus: &[U], exclude: &ExcludeSet) -> CorpusStats
    where
        U: AsRef<[T]>,
        T: AsRef<str>,
    {
        get_stats(corpus, exclude)
    }
}
