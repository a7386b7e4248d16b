use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codemix")]
#[command(about = "Code-switching complexity analyzer for language-tagged corpora", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more tagged corpus files
    Analyze {
        /// Corpus files (one per dataset split)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .codemix.toml)
        #[arg(short, long, env = "CODEMIX_CONFIG")]
        config: Option<PathBuf>,

        /// Language tags to measure; every other tag is excluded
        #[arg(long, value_delimiter = ',')]
        languages: Option<Vec<String>>,

        /// Explicit tags to exclude instead of deriving them
        #[arg(long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,

        /// Include each utterance's counts and score
        #[arg(long = "per-utterance")]
        per_utterance: bool,

        /// Disable parallel processing
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
