//! Writing diagrams to disk
//!
//! Output files are never overwritten: `graph.pdf` is tried first, then `graph_1.pdf`,
//! `graph_2.pdf`, ... until a free name turns up. When the renderer fails, whatever it left at
//! the target path is removed.

use crate::diagram::Diagram;
use crate::error::DiagramError;
use crate::renderer::DiagramRenderer;
use crate::style::ExportFormat;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default output file stem.
pub const DEFAULT_BASE_NAME: &str = "graph";

#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub diagram: &'a Diagram,
    pub format: ExportFormat,
    pub directory: PathBuf,
    pub base_name: String,
}

impl<'a> PublishSpec<'a> {
    pub fn new(diagram: &'a Diagram, format: ExportFormat) -> Self {
        Self {
            diagram,
            format,
            directory: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }

    pub fn with_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = directory.as_ref().to_path_buf();
        self
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub path: PathBuf,
}

pub fn publish(
    spec: PublishSpec<'_>,
    renderer: &dyn DiagramRenderer,
) -> Result<PublishResult, DiagramError> {
    validate_base_name(&spec.base_name)?;

    fs::create_dir_all(&spec.directory).map_err(|source| DiagramError::Output {
        path: spec.directory.clone(),
        source,
    })?;

    let path = next_available_path(&spec.directory, &spec.base_name, spec.format.extension());
    if let Err(err) = renderer.render(spec.diagram, spec.format, &path) {
        discard_partial(&path);
        return Err(err.into());
    }

    info!(path = %path.display(), "diagram written");
    Ok(PublishResult { path })
}

/// First `<base>.<ext>`, `<base>_1.<ext>`, `<base>_2.<ext>`, ... that does not exist yet.
pub fn next_available_path(directory: &Path, base_name: &str, extension: &str) -> PathBuf {
    let mut candidate = directory.join(format!("{}.{}", base_name, extension));
    let mut counter = 1;
    while candidate.exists() {
        candidate = directory.join(format!("{}_{}.{}", base_name, counter, extension));
        counter += 1;
    }
    candidate
}

fn validate_base_name(base_name: &str) -> Result<(), DiagramError> {
    let invalid = base_name.trim().is_empty()
        || base_name.contains(['/', '\\'])
        || base_name == "."
        || base_name == "..";
    if invalid {
        Err(DiagramError::InvalidBaseName(base_name.to_string()))
    } else {
        Ok(())
    }
}

fn discard_partial(path: &Path) {
    if path.exists() {
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %err, "could not remove partial output");
        }
    }
}
