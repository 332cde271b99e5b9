//! Tree visualization
//!
//! Shows the outline as the tree the renderer will lay out, one node per line:
//!
//! ```text
//! ⧉ Outline (2 roots, 5 nodes)
//! ├─ 1 Main topic
//! │ ├─ 1.1 Subtopic 1
//! │ └─ 1.2 Subtopic 2
//! │   └─ 1.2.1 Detail A
//! └─ 2 Another topic
//! ```
//!
//! Wrapped labels are shown on one line, wrapped lines separated by ` ⏎ `.

use crate::diagram::Diagram;
use crate::error::FormatError;
use crate::format::Format;
use outline_parser::Outline;

const OUTLINE_ICON: &str = "⧉";
const WRAP_MARK: &str = " ⏎ ";

fn format_node(
    outline: &Outline,
    index: usize,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let node = &outline.nodes()[index];
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    let mut output = format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node.identifier(),
        node.label_lines.join(WRAP_MARK)
    );

    let children: Vec<usize> = outline.children_of(index).collect();
    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    for (i, child) in children.iter().enumerate() {
        output.push_str(&format_node(outline, *child, &child_prefix, i, children.len()));
    }

    output
}

/// Render the outline tree as text.
pub fn to_treeviz_str(outline: &Outline) -> String {
    let roots: Vec<usize> = outline
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, node)| node.is_root())
        .map(|(i, _)| i)
        .collect();

    let mut output = format!(
        "{} Outline ({} roots, {} nodes)\n",
        OUTLINE_ICON,
        roots.len(),
        outline.len()
    );
    for (i, root) in roots.iter().enumerate() {
        output.push_str(&format_node(outline, *root, "", i, roots.len()));
    }
    output
}

/// Format implementation for the tree visualization
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Outline tree with box-drawing connectors"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree"]
    }

    fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError> {
        Ok(to_treeviz_str(diagram.outline()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outline_parser::{parse_outline, ParseOptions};

    #[test]
    fn test_treeviz_sample() {
        let outline = parse_outline(
            "1.Main topic\n1.1 Subtopic 1\n1.2 Subtopic 2\n1.2.1 Detail A\n2.Another topic",
            &ParseOptions::default(),
        )
        .unwrap();

        insta::assert_snapshot!(to_treeviz_str(&outline), @r###"
        ⧉ Outline (2 roots, 5 nodes)
        ├─ 1 Main topic
        │ ├─ 1.1 Subtopic 1
        │ └─ 1.2 Subtopic 2
        │   └─ 1.2.1 Detail A
        └─ 2 Another topic
        "###);
    }

    #[test]
    fn test_treeviz_shows_wrapped_lines() {
        let outline = parse_outline("1 alpha beta gamma", &ParseOptions::with_wrap_width(10)).unwrap();
        assert_eq!(
            to_treeviz_str(&outline),
            "⧉ Outline (1 roots, 1 nodes)\n└─ 1 alpha beta ⏎ gamma\n"
        );
    }
}
