//! Format implementations
//!
//! Text representations of a diagram, used for inspection. None of them need the rendering
//! engine.

pub mod dot;
pub mod json;
pub mod treeviz;

pub use dot::DotFormat;
pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
