//! Corpus-level aggregation.
//!
//! The aggregate is a left-to-right fold: whether an utterance counts as a
//! matrix-language change depends on the utterance before it. Per-utterance
//! profiles are independent, so [`evaluate_corpus_parallel`] computes them
//! with rayon and then runs the same sequential fold.

use super::counters::is_code_switched;
use super::utterance::{evaluate_utterance, profile_utterance};
use crate::core::{CorpusStats, ExcludeSet, Tag, UtteranceProfile};
use crate::errors::{CodemixError, Result};
use rayon::prelude::*;

/// Divisor mapping the 0-100 utterance score onto roughly 0-2.
const UTTERANCE_NORMALIZER: f64 = 50.0;
const CONTINUITY_WEIGHT: f64 = 0.5;
const SWITCHED_WEIGHT: f64 = 5.0 / 6.0;

fn check_non_empty<U, T>(corpus: &[U]) -> Result<()>
where
    U: AsRef<[T]>,
{
    if corpus.is_empty() {
        return Err(CodemixError::EmptyCorpus);
    }
    match corpus
        .iter()
        .position(|utterance| <U as AsRef<[T]>>::as_ref(utterance).is_empty())
    {
        Some(index) => Err(CodemixError::EmptyUtterance { index }),
        None => Ok(()),
    }
}

/// Profiles every utterance in order.
pub fn profile_corpus<U, T>(corpus: &[U], exclude: &ExcludeSet) -> Result<Vec<UtteranceProfile>>
where
    U: AsRef<[T]>,
    T: AsRef<str>,
{
    check_non_empty::<U, T>(corpus)?;
    corpus
        .iter()
        .map(|utterance| profile_utterance(utterance.as_ref(), exclude))
        .collect()
}

/// Order-preserving parallel version of [`profile_corpus`].
pub fn profile_corpus_parallel<U, T>(
    corpus: &[U],
    exclude: &ExcludeSet,
) -> Result<Vec<UtteranceProfile>>
where
    U: AsRef<[T]> + Sync,
    T: AsRef<str> + Sync,
{
    check_non_empty::<U, T>(corpus)?;
    corpus
        .par_iter()
        .map(|utterance| profile_utterance(utterance.as_ref(), exclude))
        .collect()
}

/// Folds utterance profiles into the corpus score.
///
/// The first utterance always counts as a matrix-language change. An
/// utterance whose tokens are all excluded has no matrix tag, and two such
/// utterances in a row do not count as a change.
pub fn aggregate_profiles(profiles: &[UtteranceProfile]) -> Result<f64> {
    if profiles.is_empty() {
        return Err(CodemixError::EmptyCorpus);
    }

    let (score, switched, _) = profiles.iter().fold(
        (0.0_f64, 0_usize, None::<&Option<Tag>>),
        |(score, switched, prev_matrix), profile| {
            let utterance_score = profile.score / UTTERANCE_NORMALIZER;
            let matrix_changed = prev_matrix != Some(&profile.matrix_tag);
            (
                score + ((1.0 - utterance_score) + f64::from(u8::from(matrix_changed))),
                switched + usize::from(profile.code_switched),
                Some(&profile.matrix_tag),
            )
        },
    );

    Ok((100.0 / profiles.len() as f64)
        * (CONTINUITY_WEIGHT * score + SWITCHED_WEIGHT * switched as f64))
}

/// Corpus score from already computed profiles.
///
/// Gives the same result as [`evaluate_corpus`] on the profiled corpus,
/// including the single-utterance case.
pub fn score_profiles(profiles: &[UtteranceProfile]) -> Result<f64> {
    if let [only] = profiles {
        return Ok(only.score);
    }
    aggregate_profiles(profiles)
}

/// Code-switching complexity of a whole corpus.
///
/// A single-utterance corpus scores exactly like that utterance. Otherwise
/// the score combines per-utterance complexity, the code-switched utterance
/// count and how often the matrix language changes between adjacent
/// utterances.
pub fn evaluate_corpus<U, T>(corpus: &[U], exclude: &ExcludeSet) -> Result<f64>
where
    U: AsRef<[T]>,
    T: AsRef<str>,
{
    if let [only] = corpus {
        return evaluate_utterance(only.as_ref(), exclude);
    }
    aggregate_profiles(&profile_corpus(corpus, exclude)?)
}

/// Same result as [`evaluate_corpus`], with utterances profiled in parallel.
pub fn evaluate_corpus_parallel<U, T>(corpus: &[U], exclude: &ExcludeSet) -> Result<f64>
where
    U: AsRef<[T]> + Sync,
    T: AsRef<str> + Sync,
{
    if let [only] = corpus {
        return evaluate_utterance(only.as_ref(), exclude);
    }
    aggregate_profiles(&profile_corpus_parallel(corpus, exclude)?)
}

/// Raw token, utterance and switched-utterance counts.
pub fn get_stats<U, T>(corpus: &[U], exclude: &ExcludeSet) -> CorpusStats
where
    U: AsRef<[T]>,
    T: AsRef<str>,
{
    corpus.iter().fold(CorpusStats::default(), |stats, utterance| {
        let utterance: &[T] = utterance.as_ref();
        CorpusStats {
            tokens: stats.tokens + utterance.len(),
            utterances: stats.utterances + 1,
            switched: stats.switched + usize::from(is_code_switched(utterance, exclude)),
        }
    })
}
