//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// transcript-stamp - anchor transcript offsets in time and merge segments
#[derive(Parser, Debug)]
#[command(name = "transcript-stamp")]
#[command(version)]
#[command(about = "Adjust relative transcript timestamps and merge transcript segments")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite HH:MM:SS offsets in a transcript as wall-clock times
    Update(UpdateArgs),
    /// Merge transcript segments in chronological order
    Merge(MergeArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `update`
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Transcript whose timestamps will be adjusted
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Wall-clock time the recording started (HH:MM:SS)
    #[arg(short = 't', long, value_name = "HH:MM:SS")]
    pub time: String,

    /// Date the recording started (YYYY-MM-DD)
    #[arg(short = 'd', long, value_name = "YYYY-MM-DD")]
    pub date: String,

    /// Root directory for nested YYYY/MM/DD output
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", conflicts_with = "flat")]
    pub output_dir: Option<PathBuf>,

    /// Write YYYYMMDD_HHMMSS_HHMMSS.txt into the current directory
    #[arg(long)]
    pub flat: bool,
}

/// Arguments for `merge`
#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Files or glob patterns to merge, e.g. 2025/01/27/*
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Explicit output file instead of the inferred YYYY-MM-DD.txt
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep the source segments instead of deleting them after merging
    #[arg(long = "no-delete")]
    pub no_delete: bool,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["output_dir", "flat", "keep_sources", "max_file_size"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
