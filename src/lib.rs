//! Code-switching complexity for language-tagged corpora.
//!
//! Given utterances whose tokens carry language tags, codemix measures how
//! much an utterance, or a whole corpus, mixes languages. Scores are 0 for
//! monolingual text and grow toward 100 with heavy, rapidly alternating
//! mixing.
//!
//! ```
//! use codemix::{evaluate_corpus, ExcludeSet};
//!
//! let exclude: ExcludeSet = ["other"].into_iter().collect();
//! let corpus = vec![
//!     vec!["lang1", "lang1", "other"],
//!     vec!["lang1", "lang2", "lang1"],
//! ];
//! let score = evaluate_corpus(&corpus, &exclude).unwrap();
//! assert!(score > 0.0);
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod loader;

// Re-export commonly used types
pub use crate::core::{
    Corpus, CorpusReport, CorpusStats, ExcludeSet, MatrixLanguage, Tag, Utterance,
    UtteranceProfile,
};

pub use crate::complexity::{
    count_alternations, count_matrix_tokens, evaluate_corpus, evaluate_corpus_parallel,
    evaluate_utterance, get_stats, is_code_switched, profile_utterance, Evaluator,
};

pub use crate::errors::{CodemixError, Result};

pub use crate::loader::{load_corpus, parse_corpus, TaggedCorpus};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
