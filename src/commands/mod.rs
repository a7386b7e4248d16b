//! CLI command implementations.
//!
//! - **analyze**: score tagged corpus files and report statistics
//! - **init**: write a default `.codemix.toml`

pub mod analyze;
pub mod init;

pub use analyze::{analyze_file, analyze_files, handle_analyze, AnalyzeConfig, ResolvedSettings};
pub use init::init_config;
