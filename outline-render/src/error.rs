//! Error types for diagram generation and inspection formats

use crate::renderer::RenderError;
use outline_parser::ParseError;
use std::path::PathBuf;

/// Errors that abort a diagram generation.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot write output to {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid output name '{0}'")]
    InvalidBaseName(String),
}

/// Errors raised by inspection formats and the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
