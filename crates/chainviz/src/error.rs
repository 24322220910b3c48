//! Error types for chainviz operations.
//!
//! Diagram construction itself cannot fail: every catalog function
//! builds its tree from literal constants. Errors only arise around the
//! catalog, when resolving slugs, parsing configuration, or writing
//! exported output.

use std::io;

use thiserror::Error;

/// The main error type for chainviz operations.
#[derive(Debug, Error)]
pub enum ChainvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown diagram `{0}`; run with --list to see available slugs")]
    UnknownDiagram(String),
}
