//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--root, --config, --json, --color, --verbose) are inherited
//! by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// iconforge - SVG icon asset pipeline
#[derive(Parser, Debug)]
#[command(name = "iconforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/iconforge.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows every file)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the TypeScript icon enum
    Enum,

    /// Generate React components and their index, then mirror them into the package source
    Components {
        /// Do not mirror the generated directory into the package source
        #[arg(long)]
        no_mirror: bool,
    },

    /// Copy optimized illustrations and images into the distribution
    Copy,

    /// Insert or update license headers in SVG assets
    Headers,

    /// Run enum, components and copy
    Build,

    /// Compare generated output with the files on disk
    Diff {
        /// Exit non-zero when anything differs
        #[arg(long)]
        check: bool,
    },
}
