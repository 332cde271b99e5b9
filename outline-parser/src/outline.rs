//! Parsed outline types

use crate::identifier::Identifier;
use crate::wrap::LINE_BREAK;
use serde::Serialize;

/// One well-formed outline line: identifier plus label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub identifier: Identifier,
    pub label: String,
}

/// An entry with its parent resolved and its label wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    #[serde(flatten)]
    pub entry: OutlineEntry,
    pub parent: Option<Identifier>,
    #[serde(rename = "lines")]
    pub label_lines: Vec<String>,
    /// Index of the parent within [`Outline::nodes`].
    #[serde(skip)]
    pub parent_index: Option<usize>,
}

impl OutlineNode {
    pub fn identifier(&self) -> &Identifier {
        &self.entry.identifier
    }

    pub fn label(&self) -> &str {
        &self.entry.label
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The wrapped label joined with [`LINE_BREAK`] markers.
    pub fn wrapped_label(&self) -> String {
        self.label_lines.join(LINE_BREAK)
    }
}

/// Result of a parse: nodes in input order, each parent declared before its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    nodes: Vec<OutlineNode>,
}

impl Outline {
    pub(crate) fn new(nodes: Vec<OutlineNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[OutlineNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes, in input order.
    pub fn roots(&self) -> impl Iterator<Item = &OutlineNode> {
        self.nodes.iter().filter(|node| node.is_root())
    }

    /// `(parent, child)` identifier pairs, in input order.
    pub fn edges(&self) -> impl Iterator<Item = (&Identifier, &Identifier)> {
        self.nodes
            .iter()
            .filter_map(|node| node.parent.as_ref().map(|parent| (parent, node.identifier())))
    }

    /// Indices of the nodes attached to the node at `index`.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent_index == Some(index))
            .map(|(i, _)| i)
    }
}
