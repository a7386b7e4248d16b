use super::counters::{count_alternations, count_language_tokens, count_matrix_tokens, is_code_switched};
use crate::core::{ExcludeSet, UtteranceProfile};
use crate::errors::{CodemixError, Result};

/// Added to the denominator so an utterance whose tokens are all excluded
/// scores 0.
const EPSILON: f64 = 1e-8;

/// Complexity score in `[0, 100]` from the three utterance counts.
///
/// `language_tokens` is N, `matrix_tokens` is M and `alternations` is A in
/// `100 * (N - M + A) / (2 * (N + eps))`.
pub fn complexity_score(language_tokens: usize, matrix_tokens: usize, alternations: usize) -> f64 {
    let n = language_tokens as f64;
    let m = matrix_tokens as f64;
    let a = alternations as f64;
    100.0 * ((n - m + a) / (2.0 * (n + EPSILON)))
}

/// Code-switching complexity of a single utterance.
///
/// 0 for a monolingual utterance, approaching 50 for a fully alternating
/// two-language utterance and approaching 100 for many languages with
/// frequent alternation.
///
/// ```
/// use codemix::complexity::evaluate_utterance;
/// use codemix::ExcludeSet;
///
/// let exclude: ExcludeSet = ["o"].into_iter().collect();
/// let score = evaluate_utterance(&["o", "ar", "en", "fr", "o", "de"], &exclude).unwrap();
/// assert!((score - 75.0).abs() < 1e-6);
/// ```
pub fn evaluate_utterance<T: AsRef<str>>(tags: &[T], exclude: &ExcludeSet) -> Result<f64> {
    if tags.is_empty() {
        return Err(CodemixError::EmptyUtterance { index: 0 });
    }

    let matrix = count_matrix_tokens(tags, exclude);
    Ok(complexity_score(
        count_language_tokens(tags, exclude),
        matrix.tokens,
        count_alternations(tags, exclude),
    ))
}

/// Computes every per-utterance count in one place.
pub fn profile_utterance<T: AsRef<str>>(tags: &[T], exclude: &ExcludeSet) -> Result<UtteranceProfile> {
    if tags.is_empty() {
        return Err(CodemixError::EmptyUtterance { index: 0 });
    }

    let matrix = count_matrix_tokens(tags, exclude);
    let language_tokens = count_language_tokens(tags, exclude);
    let alternations = count_alternations(tags, exclude);

    Ok(UtteranceProfile {
        tokens: tags.len(),
        language_tokens,
        matrix_tag: matrix.tag.map(String::from),
        matrix_tokens: matrix.tokens,
        alternations,
        code_switched: is_code_switched(tags, exclude),
        score: complexity_score(language_tokens, matrix.tokens, alternations),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exclude_o() -> ExcludeSet {
        ["o"].into_iter().collect()
    }

    fn assert_score(tags: &[&str], expected: f64) {
        let score = evaluate_utterance(tags, &exclude_o()).unwrap();
        assert!(
            (score - expected).abs() < 1e-4,
            "{:?}: expected {}, got {}",
            tags,
            expected,
            score
        );
    }

    #[test]
    fn test_monolingual_utterances_score_zero() {
        assert_score(&["o", "o", "o", "o"], 0.0);
        assert_score(&["o", "ar", "ar", "ar"], 0.0);
        assert_score(&["o", "ar", "o", "ar"], 0.0);
    }

    #[test]
    fn test_worked_values() {
        assert_score(&["o", "ar", "en", "o"], 50.0);
        assert_score(&["o", "ar", "en", "ar"], 50.0);
        assert_score(&["o", "ar", "en", "ar", "o", "ar"], 37.5);
        assert_score(&["o", "ar", "ar", "o", "en", "ar"], 37.5);
        assert_score(&["o", "ar", "en", "fr", "o", "de"], 75.0);
    }

    #[test]
    fn test_all_excluded_is_exactly_zero() {
        let score = evaluate_utterance(&["o", "o"], &exclude_o()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_utterance_is_rejected() {
        let empty: [&str; 0] = [];
        let err = evaluate_utterance(&empty, &exclude_o()).unwrap_err();
        assert!(matches!(err, CodemixError::EmptyUtterance { .. }));
        assert!(profile_utterance(&empty, &exclude_o()).is_err());
    }

    #[test]
    fn test_profile_matches_primitives() {
        let profile = profile_utterance(&["o", "ar", "en", "ar", "o", "ar"], &exclude_o()).unwrap();
        assert_eq!(profile.tokens, 6);
        assert_eq!(profile.language_tokens, 4);
        assert_eq!(profile.matrix_tag.as_deref(), Some("ar"));
        assert_eq!(profile.matrix_tokens, 3);
        assert_eq!(profile.alternations, 2);
        assert!(profile.code_switched);
        assert!((profile.score - 37.5).abs() < 1e-4);
    }
}
