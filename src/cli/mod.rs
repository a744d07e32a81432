//! CLI interface for scrambled-matcher
//!
//! Argument parsing, the persisted configuration file, log setup and the
//! command implementations behind the `scrambled-matcher` binary.

pub mod args;
pub mod commands;
pub mod config;
pub mod logging;

pub use args::{Cli, Commands, OutputFormat};
pub use config::{config_dir, default_config_path, MatcherConfig};
