//! Graphviz DOT format
//!
//! The exact source handed to the renderer. Useful to debug a layout, or to feed Graphviz by
//! hand:
//!
//! ```text
//! outline-graph inspect notes.txt --to dot | dot -Tsvg -o notes.svg
//! ```

use crate::diagram::Diagram;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for DOT source
pub struct DotFormat;

impl Format for DotFormat {
    fn name(&self) -> &str {
        "dot"
    }

    fn description(&self) -> &str {
        "Graphviz DOT source sent to the renderer"
    }

    fn file_extensions(&self) -> &[&str] {
        &["dot", "gv"]
    }

    fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError> {
        Ok(diagram.to_dot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DiagramStyle;
    use outline_parser::{parse_outline, ParseOptions};

    #[test]
    fn test_dot_format_matches_diagram() {
        let outline = parse_outline("1 A\n1.1 B", &ParseOptions::default()).unwrap();
        let diagram = Diagram::from_outline(outline, DiagramStyle::default());
        assert_eq!(DotFormat.serialize(&diagram).unwrap(), diagram.to_dot());
    }

    #[test]
    fn test_dot_format_extensions() {
        assert!(DotFormat.file_extensions().contains(&"gv"));
    }
}
