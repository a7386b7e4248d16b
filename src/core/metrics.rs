use crate::core::UtteranceProfile;

pub fn calculate_average_score(profiles: &[UtteranceProfile]) -> f64 {
    if profiles.is_empty() {
        return 0.0;
    }

    let total: f64 = profiles.iter().map(|p| p.score).sum();
    total / profiles.len() as f64
}

pub fn find_max_score(profiles: &[UtteranceProfile]) -> f64 {
    profiles.iter().map(|p| p.score).fold(0.0, f64::max)
}

/// Number of adjacent utterance pairs whose matrix language differs.
pub fn count_matrix_changes(profiles: &[UtteranceProfile]) -> usize {
    profiles
        .windows(2)
        .filter(|pair| pair[0].matrix_tag != pair[1].matrix_tag)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(matrix: Option<&str>, alternations: usize, score: f64) -> UtteranceProfile {
        UtteranceProfile {
            tokens: 4,
            language_tokens: 4,
            matrix_tag: matrix.map(String::from),
            matrix_tokens: 2,
            alternations,
            code_switched: alternations > 0,
            score,
        }
    }

    #[test]
    fn test_empty_profiles() {
        assert_eq!(calculate_average_score(&[]), 0.0);
        assert_eq!(find_max_score(&[]), 0.0);
        assert_eq!(count_matrix_changes(&[]), 0);
    }

    #[test]
    fn test_summaries() {
        let profiles = vec![
            profile(Some("lang1"), 0, 0.0),
            profile(Some("lang1"), 2, 50.0),
            profile(Some("lang2"), 1, 25.0),
            profile(None, 0, 0.0),
        ];

        assert_eq!(calculate_average_score(&profiles), 18.75);
        assert_eq!(find_max_score(&profiles), 50.0);
        assert_eq!(count_matrix_changes(&profiles), 2);
    }
}
