//! Format trait definition
//!
//! This module defines the Format trait implemented by every inspection format. A format turns
//! a [`Diagram`] into text without involving the rendering engine, which makes it the way to
//! look at what the parser produced.

use crate::diagram::Diagram;
use crate::error::FormatError;

/// Trait for text representations of a diagram
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError> {
///         Ok(format!("{} nodes", diagram.outline().len()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "dot", "json", "treeviz")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions conventionally used for this format
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Serialize a diagram into text
    fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError>;
}
