use crate::core::ExcludeSet;
use crate::io::output::OutputFormat;
use crate::loader::{TaggedCorpus, DEFAULT_LANGUAGES};
use serde::{Deserialize, Serialize};

/// Root configuration structure for codemix
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CodemixConfig {
    /// Which tags are measured and which are ignored
    #[serde(default)]
    pub tags: TagsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Parallelism configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Tag classification configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagsConfig {
    /// Language tags whose mixing is measured
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Explicit exclude set; when empty every seen tag other than
    /// `languages` is excluded
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            exclude: Vec::new(),
        }
    }
}

fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

impl TagsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.languages.is_empty() {
            return Err("tags.languages must name at least one language tag".to_string());
        }

        match self
            .exclude
            .iter()
            .find(|tag| self.languages.contains(tag))
        {
            Some(tag) => Err(format!(
                "tag '{}' is listed both as a language and as excluded",
                tag
            )),
            None => Ok(()),
        }
    }

    /// Exclude set to use for a loaded corpus.
    pub fn exclude_set(&self, corpus: &TaggedCorpus) -> ExcludeSet {
        if self.exclude.is_empty() {
            corpus.exclude_all_but(&self.languages)
        } else {
            self.exclude.iter().cloned().collect()
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}

/// Parallel processing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceConfig {
    /// Profile utterances and files on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

fn default_parallel() -> bool {
    true
}

impl CodemixConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.tags.validate()
    }
}
