//! Parse errors
//!
//! Every error aborts the whole parse; there is no partial outline.

/// Errors that can occur while parsing an outline
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing left after trimming the input.
    #[error("empty input: enter at least one outline line")]
    EmptyInput,

    /// A line that does not start with a numeric identifier, or a blank line between entries.
    #[error("line {line}: invalid line format: '{content}'")]
    MalformedLine { line: usize, content: String },

    /// A child whose parent identifier was never defined above it.
    #[error("line {line}: parent '{parent}' of '{identifier}' has not been defined")]
    UnresolvedParent {
        line: usize,
        identifier: String,
        parent: String,
    },
}

impl ParseError {
    /// 1-based source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::MalformedLine { line, .. } | ParseError::UnresolvedParent { line, .. } => {
                Some(*line)
            }
        }
    }
}
