//! Outline parser
//!
//! A single top-to-bottom pass over the source lines:
//!
//! 1. Leading and trailing blank lines are dropped; nothing left is [`ParseError::EmptyInput`].
//! 2. Each remaining line must match the line grammar `<digits>(.<digits>)* <label>`. Blank
//!    lines between entries do not match and abort the parse.
//! 3. Labels lose one leading `.` separator (`1.Root` → `Root`) and are word wrapped.
//! 4. Multi-segment identifiers resolve their parent through a [`ParentLookup`] owned by the
//!    parse call. A parent that was not declared above its child is an error.

use crate::error::ParseError;
use crate::identifier::Identifier;
use crate::outline::{Outline, OutlineEntry, OutlineNode};
use crate::wrap::{wrap_label, DEFAULT_WRAP_WIDTH};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Line grammar: identifier prefix followed by free text.
static OUTLINE_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<identifier>[0-9]+(?:\.[0-9]+)*)(?P<label>.*)$").unwrap());

/// Separator that may sit between the identifier and the label.
const LABEL_SEPARATOR: char = '.';

/// Knobs for the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum label line width, in characters.
    pub wrap_width: usize,
}

impl ParseOptions {
    pub fn with_wrap_width(wrap_width: usize) -> Self {
        Self { wrap_width }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Identifier → index of the most recent node declared with it.
///
/// Lives for a single [`parse_outline`] call.
#[derive(Debug, Default)]
struct ParentLookup {
    registered: HashMap<Identifier, usize>,
}

impl ParentLookup {
    /// Register a node, returning the index previously held by the same identifier.
    fn register(&mut self, identifier: Identifier, index: usize) -> Option<usize> {
        self.registered.insert(identifier, index)
    }

    fn resolve(&self, identifier: &Identifier) -> Option<usize> {
        self.registered.get(identifier).copied()
    }
}

/// Parse outline source text.
pub fn parse_outline(source: &str, options: &ParseOptions) -> Result<Outline, ParseError> {
    let lines: Vec<&str> = source.lines().collect();

    let first = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .ok_or(ParseError::EmptyInput)?;
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(first);

    let mut lookup = ParentLookup::default();
    let mut nodes = Vec::with_capacity(last - first + 1);

    for (offset, line) in lines[first..=last].iter().enumerate() {
        let line_number = first + offset + 1;
        let entry = parse_line(line, line_number)?;
        let node = link_entry(entry, line_number, nodes.len(), &mut lookup, options)?;
        nodes.push(node);
    }

    debug!(nodes = nodes.len(), "parsed outline");
    Ok(Outline::new(nodes))
}

/// Match one line against the grammar.
fn parse_line(line: &str, line_number: usize) -> Result<OutlineEntry, ParseError> {
    let malformed = || ParseError::MalformedLine {
        line: line_number,
        content: line.to_string(),
    };

    let trimmed = line.trim();
    let caps = OUTLINE_LINE_REGEX.captures(trimmed).ok_or_else(malformed)?;
    let identifier: Identifier = caps["identifier"].parse().map_err(|_| malformed())?;

    Ok(OutlineEntry {
        identifier,
        label: clean_label(&caps["label"]),
    })
}

/// Trim the label and drop a single leading separator.
fn clean_label(raw: &str) -> String {
    let label = raw.trim();
    match label.strip_prefix(LABEL_SEPARATOR) {
        Some(rest) => rest.trim().to_string(),
        None => label.to_string(),
    }
}

/// Resolve the parent of `entry`, wrap its label and register it.
fn link_entry(
    entry: OutlineEntry,
    line_number: usize,
    index: usize,
    lookup: &mut ParentLookup,
    options: &ParseOptions,
) -> Result<OutlineNode, ParseError> {
    let parent = entry.identifier.parent();
    let parent_index = match &parent {
        None => None,
        Some(parent_id) => Some(lookup.resolve(parent_id).ok_or_else(|| {
            ParseError::UnresolvedParent {
                line: line_number,
                identifier: entry.identifier.to_string(),
                parent: parent_id.to_string(),
            }
        })?),
    };

    if let Some(previous) = lookup.register(entry.identifier.clone(), index) {
        warn!(
            identifier = %entry.identifier,
            line = line_number,
            previous,
            "identifier declared more than once; children now attach to the latest"
        );
    }

    debug!(
        identifier = %entry.identifier,
        parent = ?parent.as_ref().map(ToString::to_string),
        "outline node"
    );

    let label_lines = wrap_label(&entry.label, options.wrap_width);
    Ok(OutlineNode {
        entry,
        parent,
        label_lines,
        parent_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(source: &str) -> Result<Outline, ParseError> {
        parse_outline(source, &ParseOptions::default())
    }

    #[rstest]
    #[case("1.Root", "1", "Root")]
    #[case("1 Root", "1", "Root")]
    #[case("1. Root", "1", "Root")]
    #[case("1..Root", "1", ".Root")]
    #[case("  12   Spaced out  ", "12", "Spaced out")]
    #[case("3", "3", "")]
    #[case("3.", "3", "")]
    #[case("007 Bond", "7", "Bond")]
    #[case("1Root", "1", "Root")]
    fn test_parse_line(#[case] line: &str, #[case] identifier: &str, #[case] label: &str) {
        let entry = parse_line(line, 1).unwrap();
        assert_eq!(entry.identifier.to_string(), identifier);
        assert_eq!(entry.label, label);
    }

    #[test]
    fn test_multi_segment_prefix_is_greedy() {
        let entry = parse_line("1.2.1.Detail", 1).unwrap();
        assert_eq!(entry.identifier.segments(), &[1, 2, 1]);
        assert_eq!(entry.label, "Detail");
    }

    #[rstest]
    #[case("abc")]
    #[case(".1 Dot first")]
    #[case("- bullet")]
    #[case("   ")]
    #[case("99999999999 Too big")]
    fn test_parse_line_rejects(#[case] line: &str) {
        assert!(matches!(
            parse_line(line, 4),
            Err(ParseError::MalformedLine { line: 4, .. })
        ));
    }

    #[test]
    fn test_lookup_keeps_latest() {
        let mut lookup = ParentLookup::default();
        let id: Identifier = "1".parse().unwrap();
        assert_eq!(lookup.register(id.clone(), 0), None);
        assert_eq!(lookup.register(id.clone(), 3), Some(0));
        assert_eq!(lookup.resolve(&id), Some(3));
    }

    #[test]
    fn test_duplicate_parent_resolves_to_latest() {
        let outline = parse("1 First\n1 Again\n1.1 Child").unwrap();
        assert_eq!(outline.nodes()[2].parent_index, Some(1));
    }

    #[test]
    fn test_surrounding_blank_lines_ignored() {
        let outline = parse("\n\n1 Root\n1.1 Child\n\n").unwrap();
        assert_eq!(outline.len(), 2);
    }

    #[test]
    fn test_error_line_numbers_count_leading_blanks() {
        let err = parse("\n\n1 Root\noops").unwrap_err();
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_interior_blank_line_is_malformed() {
        let err = parse("1 Root\n\n2 Other").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedLine {
                line: 2,
                content: String::new()
            }
        );
    }

    #[test]
    fn test_crlf_input() {
        let outline = parse("1 Root\r\n1.1 Child\r\n").unwrap();
        assert_eq!(outline.nodes()[1].label(), "Child");
    }

    #[test]
    fn test_wrap_width_option() {
        let outline = parse_outline(
            "1 alpha beta gamma",
            &ParseOptions::with_wrap_width(10),
        )
        .unwrap();
        assert_eq!(outline.nodes()[0].label_lines, vec!["alpha beta", "gamma"]);
        assert_eq!(outline.nodes()[0].wrapped_label(), "alpha beta\\lgamma");
    }
}
