//! # outline-parser
//!
//! Parses numbered outlines into an ordered list of nodes.
//!
//! The Outline Format
//!
//!     Every line starts with a dot-separated run of integers, the identifier, followed by the
//!     label:
//!
//!         1.Main topic
//!         1.1 Subtopic
//!         1.2 Another subtopic
//!         1.2.1 Detail
//!         2.Second topic
//!
//!     The identifier minus its last segment names the parent. A parent must appear before any
//!     of its children, there is no lookahead.
//!
//! Pipeline
//!
//!     source text → lines → [`OutlineEntry`] (grammar match) → [`OutlineNode`] (parent
//!     resolution + label wrapping) → [`Outline`]
//!
//!     The parser does not know anything about shapes, colors or output formats. Those belong to
//!     the rendering side, see the outline-render crate.
//!
//! File Layout
//!
//!     .
//!     ├── error.rs         # ParseError
//!     ├── identifier.rs    # Identifier (1.2.1)
//!     ├── outline.rs       # OutlineEntry, OutlineNode, Outline
//!     ├── parser.rs        # line grammar and the single parsing pass
//!     └── wrap.rs          # label word wrapping

pub mod error;
pub mod identifier;
pub mod outline;
pub mod parser;
pub mod wrap;

pub use error::ParseError;
pub use identifier::{Identifier, IdentifierError};
pub use outline::{Outline, OutlineEntry, OutlineNode};
pub use parser::{parse_outline, ParseOptions};
pub use wrap::{wrap_label, DEFAULT_WRAP_WIDTH, LINE_BREAK};
