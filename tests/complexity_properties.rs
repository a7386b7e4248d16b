//! Property-based tests for the complexity scores
//!
//! These tests verify invariants that should hold for all inputs:
//! - Excluded tokens are transparent to alternation counting
//! - Utterance scores stay within [0, 100]
//! - Monolingual utterances score 0
//! - A one-utterance corpus scores like the utterance
//! - Parallel and sequential corpus evaluation agree exactly

use codemix::complexity::{
    count_alternations, count_language_tokens, count_matrix_tokens, evaluate_corpus,
    evaluate_corpus_parallel, evaluate_utterance, get_stats, is_code_switched,
};
use codemix::ExcludeSet;
use proptest::prelude::*;
use std::collections::HashSet;

const EXCLUDED: [&str; 3] = ["other", "ne", "univ"];

fn exclude_set() -> ExcludeSet {
    EXCLUDED.into_iter().collect()
}

/// Mix of language tags and excluded tags
fn tag() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec!["lang1", "lang2", "fr", "de"]),
        1 => prop::sample::select(EXCLUDED.to_vec()),
    ]
    .prop_map(String::from)
}

fn utterance() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tag(), 1..24)
}

fn corpus() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(utterance(), 1..12)
}

proptest! {
    #[test]
    fn prop_all_excluded_scores_zero(tags in prop::collection::vec(prop::sample::select(EXCLUDED.to_vec()), 1..16)) {
        let exclude = exclude_set();
        prop_assert_eq!(count_alternations(&tags, &exclude), 0);
        prop_assert_eq!(evaluate_utterance(&tags, &exclude).unwrap(), 0.0);
        prop_assert!(!is_code_switched(&tags, &exclude));
    }

    #[test]
    fn prop_monolingual_scores_zero(
        len in 1usize..20,
        noise in prop::collection::vec((0usize..20, prop::sample::select(EXCLUDED.to_vec())), 0..8)
    ) {
        let mut tags = vec!["lang1"; len];
        for (position, excluded) in noise {
            tags.insert(position.min(tags.len()), excluded);
        }
        let exclude = exclude_set();
        prop_assert_eq!(count_alternations(&tags, &exclude), 0);
        prop_assert_eq!(evaluate_utterance(&tags, &exclude).unwrap(), 0.0);
    }

    #[test]
    fn prop_excluded_tokens_are_transparent(tags in utterance()) {
        let exclude = exclude_set();
        let stripped: Vec<&String> = tags.iter().filter(|t| !exclude.contains(t)).collect();
        prop_assert_eq!(
            count_alternations(&tags, &exclude),
            count_alternations(&stripped, &exclude)
        );
    }

    #[test]
    fn prop_score_is_bounded(tags in utterance()) {
        let score = evaluate_utterance(&tags, &exclude_set()).unwrap();
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn prop_code_switched_iff_multiple_languages(tags in utterance()) {
        let exclude = exclude_set();
        let languages: HashSet<&str> = tags
            .iter()
            .map(String::as_str)
            .filter(|t| !exclude.contains(t))
            .collect();
        prop_assert_eq!(is_code_switched(&tags, &exclude), languages.len() > 1);
    }

    #[test]
    fn prop_matrix_count_bounds(tags in utterance()) {
        let exclude = exclude_set();
        let matrix = count_matrix_tokens(&tags, &exclude);
        let language_tokens = count_language_tokens(&tags, &exclude);
        prop_assert!(matrix.tokens <= language_tokens);
        prop_assert_eq!(matrix.tag.is_none(), language_tokens == 0);
        if let Some(tag) = matrix.tag {
            let occurrences = tags.iter().filter(|t| t.as_str() == tag).count();
            prop_assert_eq!(occurrences, matrix.tokens);
        }
    }

    #[test]
    fn prop_single_utterance_corpus_matches_utterance(tags in utterance()) {
        let exclude = exclude_set();
        let corpus = vec![tags.clone()];
        prop_assert_eq!(
            evaluate_corpus(&corpus, &exclude).unwrap(),
            evaluate_utterance(&tags, &exclude).unwrap()
        );
    }

    #[test]
    fn prop_parallel_matches_sequential(corpus in corpus()) {
        let exclude = exclude_set();
        let sequential = evaluate_corpus(&corpus, &exclude).unwrap();
        let parallel = evaluate_corpus_parallel(&corpus, &exclude).unwrap();
        prop_assert_eq!(sequential.to_bits(), parallel.to_bits());
    }

    #[test]
    fn prop_stats_count_raw_tokens(corpus in corpus()) {
        let stats = get_stats(&corpus, &exclude_set());
        prop_assert_eq!(stats.tokens, corpus.iter().map(Vec::len).sum::<usize>());
        prop_assert_eq!(stats.utterances, corpus.len());
        prop_assert!(stats.switched <= stats.utterances);
    }
}
