//! Command-line argument definitions for the chainviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments select which catalog entries to
//! render, the output format and location, configuration file
//! selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output format for rendered diagrams.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// HTML fragment for embedding in the course site.
    Html,
    /// Pretty-printed JSON tree.
    Json,
}

impl Format {
    /// The file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

/// Command-line arguments for the chainviz diagram exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Slug of the diagram to render (see --list)
    pub slug: Option<String>,

    /// Output file (single diagram) or directory (--all).
    /// Defaults to `<slug>.<ext>` or `diagrams/`.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Render every catalog entry into the output directory
    #[arg(long)]
    pub all: bool,

    /// List available diagram slugs and exit
    #[arg(long)]
    pub list: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
