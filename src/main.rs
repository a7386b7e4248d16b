use anyhow::Result;
use clap::Parser;
use codemix::cli::{Cli, Commands};
use codemix::commands::{self, AnalyzeConfig};
use codemix::CodemixError;
use std::process::ExitCode;

/// Exit status for errors the user can fix in their corpus or config.
const EXIT_INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            paths,
            format,
            output,
            config,
            languages,
            exclude,
            per_utterance,
            no_parallel,
            plain,
        } => commands::handle_analyze(AnalyzeConfig {
            paths,
            format,
            output,
            config,
            languages,
            exclude,
            per_utterance,
            no_parallel,
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    match CodemixError::find_in(err) {
        Some(cause) => {
            eprintln!("Error [{}]: {:#}", cause.code(), err);
            if cause.is_user_fixable() {
                ExitCode::from(EXIT_INPUT_ERROR)
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
