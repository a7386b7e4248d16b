//! Counting primitives the complexity scores are built from.
//!
//! All functions treat tokens whose tag is in the [`ExcludeSet`] as
//! transparent: they are skipped as if they were not in the utterance.

use crate::core::{ExcludeSet, MatrixLanguage};
use std::collections::{HashMap, HashSet};

/// Non-excluded tags of an utterance, in token order.
pub fn language_tags<'a, T: AsRef<str>>(
    tags: &'a [T],
    exclude: &'a ExcludeSet,
) -> impl Iterator<Item = &'a str> + 'a {
    tags.iter()
        .map(|tag| tag.as_ref())
        .filter(move |tag| !exclude.contains(tag))
}

/// An utterance is code-switched when it holds more than one distinct
/// non-excluded tag.
pub fn is_code_switched<T: AsRef<str>>(tags: &[T], exclude: &ExcludeSet) -> bool {
    let distinct: HashSet<&str> = language_tags(tags, exclude).collect();
    distinct.len() > 1
}

/// Number of non-excluded tokens.
pub fn count_language_tokens<T: AsRef<str>>(tags: &[T], exclude: &ExcludeSet) -> usize {
    language_tags(tags, exclude).count()
}

/// Number of transitions between different non-excluded tags, scanning left
/// to right with excluded tokens skipped.
///
/// ```
/// use codemix::complexity::count_alternations;
/// use codemix::ExcludeSet;
///
/// let exclude: ExcludeSet = ["o"].into_iter().collect();
/// assert_eq!(count_alternations(&["ar", "ar", "o", "en", "ar"], &exclude), 2);
/// ```
pub fn count_alternations<T: AsRef<str>>(tags: &[T], exclude: &ExcludeSet) -> usize {
    let mut language = language_tags(tags, exclude);
    let Some(first) = language.next() else {
        return 0;
    };

    language
        .fold((first, 0), |(prev, alternations), tag| {
            if tag != prev {
                (tag, alternations + 1)
            } else {
                (tag, alternations)
            }
        })
        .1
}

/// Most frequent non-excluded tag and its token count.
///
/// Ties go to the tag whose first occurrence comes earliest in the
/// utterance. When every token is excluded the result has no tag and a
/// count of 0.
pub fn count_matrix_tokens<'a, T: AsRef<str>>(
    tags: &'a [T],
    exclude: &ExcludeSet,
) -> MatrixLanguage<'a> {
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    let mut first_seen: Vec<&'a str> = Vec::new();

    for tag in tags.iter().map(|tag| tag.as_ref()) {
        if exclude.contains(tag) {
            continue;
        }
        let count = counts.entry(tag).or_insert_with(|| {
            first_seen.push(tag);
            0
        });
        *count += 1;
    }

    first_seen.into_iter().fold(
        MatrixLanguage {
            tag: None,
            tokens: 0,
        },
        |best, tag| {
            let tokens = counts.get(tag).copied().unwrap_or(0);
            if tokens > best.tokens {
                MatrixLanguage {
                    tag: Some(tag),
                    tokens,
                }
            } else {
                best
            }
        },
    )
}
