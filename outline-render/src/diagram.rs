//! Graph description
//!
//! A [`Diagram`] pairs a parsed outline with its presentation settings and knows how to write
//! itself as Graphviz DOT, the input of the rendering engine.
//!
//! ```text
//! digraph {
//!     graph [rankdir="TB", fontname="Microsoft YaHei"];
//!     "1" [label="Root", shape="ellipse", style="filled", ...];
//!     "1.1" [label="Child", ...];
//!     "1" -> "1.1" [color="#636e72", style="solid"];
//! }
//! ```
//!
//! Statements follow outline order: each node, then the edge from its parent, so every edge
//! only refers to nodes declared above it.

use crate::style::DiagramStyle;
use outline_parser::{Outline, OutlineNode, LINE_BREAK};
use std::fmt::Write;

const INDENT: &str = "    ";

/// An outline ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    outline: Outline,
    style: DiagramStyle,
}

impl Diagram {
    pub fn from_outline(outline: Outline, style: DiagramStyle) -> Self {
        Self { outline, style }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn style(&self) -> &DiagramStyle {
        &self.style
    }

    /// Graph-wide attributes.
    pub fn graph_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("rankdir", self.style.direction.rankdir().to_string()),
            ("fontname", self.style.font_name.clone()),
        ]
    }

    /// Attributes for one node, label first.
    pub fn node_attributes(&self, node: &OutlineNode) -> Vec<(&'static str, String)> {
        let style = &self.style.node;
        vec![
            ("label", dot_label(&node.label_lines)),
            ("shape", style.shape.as_str().to_string()),
            ("style", "filled".to_string()),
            ("fillcolor", style.fill_color.hex().to_string()),
            ("fontcolor", style.font_color.hex().to_string()),
            ("fontsize", style.font_size.to_string()),
            ("fontname", escape(&self.style.font_name)),
        ]
    }

    /// Attributes shared by every edge.
    pub fn edge_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("color", self.style.edge.color.hex().to_string()),
            ("style", self.style.edge.line.as_str().to_string()),
        ]
    }

    /// Serialize as DOT source.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");

        let graph_attrs: Vec<(&str, String)> = self
            .graph_attributes()
            .into_iter()
            .map(|(key, value)| (key, escape(&value)))
            .collect();
        let _ = writeln!(out, "{}graph [{}];", INDENT, attribute_list(&graph_attrs));

        let edge_attrs = attribute_list(&self.edge_attributes());
        for node in self.outline.nodes() {
            let id = node.identifier().to_string();
            let _ = writeln!(
                out,
                "{}\"{}\" [{}];",
                INDENT,
                id,
                attribute_list(&self.node_attributes(node))
            );
            if let Some(parent) = &node.parent {
                let _ = writeln!(
                    out,
                    "{}\"{}\" -> \"{}\" [{}];",
                    INDENT, parent, id, edge_attrs
                );
            }
        }

        out.push_str("}\n");
        out
    }
}

/// `key="value", ...` with values already escaped.
fn attribute_list(attrs: &[(&str, String)]) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape each wrapped line and join them with the left-justified break marker.
fn dot_label(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

/// Escape text for a double-quoted DOT string.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
