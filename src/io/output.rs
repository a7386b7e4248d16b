use crate::core::metrics::{calculate_average_score, count_matrix_changes, find_max_score};
use crate::core::{CorpusReport, UtteranceProfile};
use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Writers flush before returning, so a buffered sink reports write
/// failures instead of losing them on drop.
pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[CorpusReport]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[CorpusReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary_table(&mut self, reports: &[CorpusReport]) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "| Dataset | Tokens | Utterances | Switched | Switched % | Score |"
        )?;
        writeln!(
            self.writer,
            "|---------|--------|------------|----------|------------|-------|"
        )?;
        for report in reports {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {:.2} | {:.4} |",
                report.dataset,
                report.stats.tokens,
                report.stats.utterances,
                report.stats.switched,
                report.switched_percent,
                report.score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_utterances(
        &mut self,
        dataset: &str,
        profiles: &[UtteranceProfile],
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", dataset)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Tokens | Matrix | Alternations | Score |")?;
        writeln!(self.writer, "|---|--------|--------|--------------|-------|")?;
        for (index, profile) in profiles.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {:.2} |",
                index + 1,
                profile.tokens,
                profile.matrix_tag.as_deref().unwrap_or("-"),
                profile.alternations,
                profile.score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_reports(&mut self, reports: &[CorpusReport]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Code-Switching Complexity Report")?;
        writeln!(self.writer)?;
        self.write_summary_table(reports)?;
        for report in reports {
            if let Some(profiles) = &report.profiles {
                self.write_utterances(&report.dataset, profiles)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_report(&mut self, report: &CorpusReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", report.dataset.bold().blue())?;
        writeln!(self.writer, "Tokens: {}", report.stats.tokens)?;
        writeln!(self.writer, "Utters: {}", report.stats.utterances)?;
        writeln!(
            self.writer,
            "Switched Utters: {} ({:.2}%)",
            report.stats.switched, report.switched_percent
        )?;
        writeln!(
            self.writer,
            "Score: {}",
            format!("{:.4}", report.score).bold()
        )?;

        if let Some(profiles) = &report.profiles {
            self.write_utterances(profiles)?;
        }
        Ok(())
    }

    fn write_utterances(&mut self, profiles: &[UtteranceProfile]) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "Utterance scores: mean {:.2}, max {:.2}, matrix changes {}",
            calculate_average_score(profiles),
            find_max_score(profiles),
            count_matrix_changes(profiles)
        )?;
        for (index, profile) in profiles.iter().enumerate() {
            let line = format!(
                "  #{:<5} tokens={:<4} matrix={:<10} alternations={:<3} score={:.2}",
                index + 1,
                profile.tokens,
                profile.matrix_tag.as_deref().unwrap_or("-"),
                profile.alternations,
                profile.score
            );
            if profile.code_switched {
                writeln!(self.writer, "{}", line.yellow())?;
            } else {
                writeln!(self.writer, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[CorpusReport]) -> anyhow::Result<()> {
        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(self.writer)?;
            }
            self.write_report(report)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
