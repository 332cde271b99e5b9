//! Outline identifiers
//!
//! An identifier is the numeric prefix of an outline line (`1.2.1`). Its canonical string form
//! joins the parsed segments with dots, so `01.2` and `1.2` name the same node.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,
    #[error("invalid identifier segment '{0}'")]
    InvalidSegment(String),
}

/// Hierarchical outline identifier, e.g. `[1, 2, 1]` for `1.2.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    segments: Vec<u64>,
}

impl Identifier {
    /// Build an identifier from its segments. Returns `None` for an empty slice.
    pub fn new(segments: impl Into<Vec<u64>>) -> Option<Self> {
        let segments = segments.into();
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// Nesting depth, 1 for top-level identifiers.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// The identifier minus its last segment (`1.2.1` → `1.2`).
    pub fn parent(&self) -> Option<Identifier> {
        match self.segments.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Identifier {
                segments: rest.to_vec(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdentifierError::Empty);
        }
        let segments = s
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(IdentifierError::InvalidSegment(part.to_string()));
                }
                part.parse::<u64>()
                    .map_err(|_| IdentifierError::InvalidSegment(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Identifier { segments })
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
