//! Reader for tab-separated, language-tagged corpus files.
//!
//! The format is the CoNLL-style layout used by code-switching benchmarks:
//! one token per line as `token<TAB>tag`, utterances separated by blank
//! lines, and `#` comment lines skipped.
//!
//! ```text
//! # sent_enum = 1
//! I       lang1
//! am      lang1
//! feliz   lang2
//! .       other
//!
//! ```

use crate::core::{Corpus, ExcludeSet, Tag};
use crate::errors::{CodemixError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Language tags measured by default; every other tag is excluded.
pub const DEFAULT_LANGUAGES: [&str; 2] = ["lang1", "lang2"];

/// Utterances of a corpus and every distinct tag seen while reading it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaggedCorpus {
    pub utterances: Corpus,
    pub tags: BTreeSet<Tag>,
}

impl TaggedCorpus {
    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    /// Every seen tag except `languages`.
    pub fn exclude_all_but<S: AsRef<str>>(&self, languages: &[S]) -> ExcludeSet {
        self.tags
            .iter()
            .filter(|tag| !languages.iter().any(|lang| lang.as_ref() == tag.as_str()))
            .cloned()
            .collect()
    }
}

/// Parses corpus text. `path` is only used in error messages.
pub fn parse_corpus(text: &str, path: Option<&Path>) -> Result<TaggedCorpus> {
    let mut corpus = TaggedCorpus::default();
    let mut current: Vec<Tag> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            if !current.is_empty() {
                corpus.utterances.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let tag = line.split('\t').nth(1).ok_or_else(|| {
            CodemixError::parse(
                format!("expected `token<TAB>tag`, found {:?}", line),
                path.map(Path::to_path_buf),
                index + 1,
            )
        })?;
        corpus.tags.insert(tag.to_string());
        current.push(tag.to_string());
    }

    if !current.is_empty() {
        corpus.utterances.push(current);
    }

    Ok(corpus)
}

/// Reads and parses a corpus file.
pub fn load_corpus(path: &Path) -> Result<TaggedCorpus> {
    let text = fs::read_to_string(path).map_err(|e| CodemixError::io(path, e))?;
    let corpus = parse_corpus(&text, Some(path))?;
    log::debug!(
        "Loaded {} utterances with {} distinct tags from {}",
        corpus.len(),
        corpus.tags.len(),
        path.display()
    );
    Ok(corpus)
}

/// Dataset name shown in reports: the parent directory plus file stem,
/// e.g. `lid_spaeng/train`.
pub fn dataset_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match path
        .parent()
        .and_then(Path::file_name)
        .map(|dir| dir.to_string_lossy())
    {
        Some(dir) => format!("{}/{}", dir, stem),
        None => stem,
    }
}
