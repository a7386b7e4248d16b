//! Analyze command: load each corpus file, score it and write the reports.

use crate::complexity::{score_profiles, Evaluator};
use crate::config::{load_config, load_config_from, CodemixConfig, TagsConfig};
use crate::core::CorpusReport;
use crate::errors::CodemixError;
use crate::io::output::{create_writer, OutputFormat};
use crate::loader::{dataset_name, load_corpus};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub paths: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub languages: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub per_utterance: bool,
    pub no_parallel: bool,
    pub plain: bool,
}

/// Settings after merging the config file with command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub tags: TagsConfig,
    pub format: OutputFormat,
    pub parallel: bool,
}

/// Command-line values win over the config file.
pub fn resolve_settings(file_config: CodemixConfig, cli: &AnalyzeConfig) -> Result<ResolvedSettings> {
    let mut tags = file_config.tags;
    if let Some(languages) = &cli.languages {
        tags.languages = languages.clone();
    }
    if let Some(exclude) = &cli.exclude {
        tags.exclude = exclude.clone();
    }
    tags.validate().map_err(|message| CodemixError::config(message, None))?;

    Ok(ResolvedSettings {
        tags,
        format: cli.format.unwrap_or(file_config.output.default_format),
        parallel: file_config.performance.parallel && !cli.no_parallel,
    })
}

/// Scores a single corpus file.
pub fn analyze_file(
    path: &Path,
    tags: &TagsConfig,
    evaluator: &Evaluator,
    per_utterance: bool,
) -> Result<CorpusReport> {
    let corpus = load_corpus(path)?;
    let exclude = tags.exclude_set(&corpus);
    log::debug!(
        "{}: excluding {} tags: {:?}",
        path.display(),
        exclude.len(),
        exclude.iter().collect::<Vec<_>>()
    );

    let stats = evaluator.get_stats(&corpus.utterances, &exclude);
    // Per-utterance reports score the profiles they already hold
    let scored = if per_utterance {
        evaluator
            .profile_corpus(&corpus.utterances, &exclude)
            .and_then(|profiles| Ok((score_profiles(&profiles)?, Some(profiles))))
    } else {
        evaluator
            .evaluate_corpus(&corpus.utterances, &exclude)
            .map(|score| (score, None))
    };
    let (score, profiles) =
        scored.with_context(|| format!("Failed to score {}", path.display()))?;

    Ok(CorpusReport {
        dataset: dataset_name(path),
        path: path.to_path_buf(),
        stats,
        switched_percent: stats.switched_ratio(),
        score,
        excluded_tags: exclude.iter().map(String::from).collect(),
        profiles,
    })
}

/// Scores every file, preserving argument order.
pub fn analyze_files(
    paths: &[PathBuf],
    settings: &ResolvedSettings,
    per_utterance: bool,
) -> Result<Vec<CorpusReport>> {
    let evaluator = Evaluator::new(settings.parallel);
    let analyze = |path: &PathBuf| analyze_file(path, &settings.tags, &evaluator, per_utterance);

    if settings.parallel {
        paths.par_iter().map(analyze).collect()
    } else {
        paths.iter().map(analyze).collect()
    }
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let settings = resolve_settings(file_config, &config)?;
    log::info!(
        "Analyzing {} file(s), languages: {}",
        config.paths.len(),
        settings.tags.languages.join(",")
    );

    let reports = analyze_files(&config.paths, &settings, config.per_utterance)?;

    if config.plain || config.output.is_some() {
        colored::control::set_override(false);
    }

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            create_writer(settings.format, BufWriter::new(file)).write_reports(&reports)?;
        }
        None => {
            let stdout = std::io::stdout();
            create_writer(settings.format, stdout.lock()).write_reports(&reports)?;
        }
    }

    Ok(())
}
