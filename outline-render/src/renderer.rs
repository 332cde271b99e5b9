//! Rendering engines
//!
//! Layout and rasterization are delegated to an external engine behind [`DiagramRenderer`].
//! [`GraphvizRenderer`] drives the Graphviz `dot` executable; tests plug in their own renderer
//! and never need Graphviz installed.

use crate::diagram::Diagram;
use crate::style::ExportFormat;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Name of the Graphviz layout executable looked up on `PATH`.
pub const GRAPHVIZ_EXECUTABLE: &str = "dot";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Graphviz executable '{name}' not found; install Graphviz or set render.executable")]
    ExecutableNotFound { name: String },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Graphviz failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },
}

/// Capability to turn a diagram into a file.
pub trait DiagramRenderer {
    /// Render `diagram` as `format` into `output`.
    fn render(
        &self,
        diagram: &Diagram,
        format: ExportFormat,
        output: &Path,
    ) -> Result<(), RenderError>;
}

/// Renderer backed by the Graphviz `dot` command.
#[derive(Debug, Clone, Default)]
pub struct GraphvizRenderer {
    executable: Option<PathBuf>,
}

impl GraphvizRenderer {
    /// Use `dot` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit executable instead of searching `PATH`.
    pub fn with_executable(path: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(path.into()),
        }
    }

    /// Resolve the executable that will be invoked.
    pub fn locate(&self) -> Result<PathBuf, RenderError> {
        let wanted = self
            .executable
            .clone()
            .unwrap_or_else(|| PathBuf::from(GRAPHVIZ_EXECUTABLE));
        which::which(&wanted).map_err(|_| RenderError::ExecutableNotFound {
            name: wanted.display().to_string(),
        })
    }
}

impl DiagramRenderer for GraphvizRenderer {
    fn render(
        &self,
        diagram: &Diagram,
        format: ExportFormat,
        output: &Path,
    ) -> Result<(), RenderError> {
        let program = self.locate()?;
        let program_name = program.display().to_string();
        let io_error = |source| RenderError::Io {
            program: program_name.clone(),
            source,
        };

        debug!(program = %program_name, format = format.as_str(), output = %output.display(), "invoking graphviz");

        let mut child = Command::new(&program)
            .arg(format!("-T{}", format.as_str()))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(io_error)?;

        // dot may exit before consuming its input; its exit status and stderr
        // take precedence over the resulting broken pipe.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(diagram.to_dot().as_bytes()),
            None => Ok(()),
        };

        let result = child.wait_with_output().map_err(io_error)?;
        if !result.status.success() {
            return Err(RenderError::Failed {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        written.map_err(io_error)
    }
}
