//! From parsed outlines to diagram files
//!
//!     This crate takes an [`outline_parser::Outline`], dresses it with presentation settings and
//!     hands it to a rendering engine. Layout and rasterization are not done here: the engine is
//!     Graphviz, reached through the [`DiagramRenderer`] capability.
//!
//! Architecture
//!
//!     - Diagram: outline + style, serializable to DOT
//!     - DiagramRenderer: one method, render a diagram to a file in a given format
//!     - publish / generate: collision-free output naming and the one-shot text → file operation
//!     - Format trait + FormatRegistry: text representations (dot, json, treeviz) for inspection
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # DiagramError, FormatError
//!     ├── style.rs                # shapes, colors, direction, export formats
//!     ├── diagram.rs              # Diagram and the DOT writer
//!     ├── renderer.rs             # DiagramRenderer, GraphvizRenderer
//!     ├── publish.rs              # output naming and writing
//!     ├── generate.rs             # parse → diagram → file
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   └── <format>/mod.rs
//!     └── lib.rs
//!
//!     Like the parser, this is a pure lib: nothing here prints, reads env vars or assumes a
//!     shell. The only process it spawns is the Graphviz executable.

pub mod diagram;
pub mod error;
pub mod format;
pub mod formats;
pub mod generate;
pub mod publish;
pub mod registry;
pub mod renderer;
pub mod style;

pub use diagram::Diagram;
pub use error::{DiagramError, FormatError};
pub use format::Format;
pub use generate::{build_diagram, generate, GenerateOptions};
pub use publish::{next_available_path, publish, PublishResult, PublishSpec};
pub use registry::FormatRegistry;
pub use renderer::{DiagramRenderer, GraphvizRenderer, RenderError};
pub use style::{
    Color, DiagramStyle, Direction, EdgeLine, EdgeStyle, ExportFormat, NodeShape, NodeStyle,
    StyleError, PALETTE,
};
