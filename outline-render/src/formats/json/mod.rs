//! JSON format
//!
//! The parsed outline as a JSON array, one object per node in input order:
//!
//! ```text
//! [
//!   { "identifier": "1", "label": "Root", "parent": null, "lines": ["Root"] },
//!   { "identifier": "1.1", "label": "Child", "parent": "1", "lines": ["Child"] }
//! ]
//! ```

use crate::diagram::Diagram;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the JSON node list
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Parsed outline nodes as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError> {
        serde_json::to_string_pretty(diagram.outline())
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
