//! One-shot generation: outline text in, diagram file out.

use crate::diagram::Diagram;
use crate::error::DiagramError;
use crate::publish::{publish, PublishResult, PublishSpec, DEFAULT_BASE_NAME};
use crate::renderer::DiagramRenderer;
use crate::style::{DiagramStyle, ExportFormat};
use outline_parser::{parse_outline, ParseOptions};
use std::path::PathBuf;
use tracing::debug;

/// Everything needed to go from outline text to a file.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub parse: ParseOptions,
    pub style: DiagramStyle,
    pub format: ExportFormat,
    pub directory: PathBuf,
    pub base_name: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            style: DiagramStyle::default(),
            format: ExportFormat::default(),
            directory: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }
}

/// Build the diagram for `source` without rendering it.
pub fn build_diagram(
    source: &str,
    parse: &ParseOptions,
    style: &DiagramStyle,
) -> Result<Diagram, DiagramError> {
    let outline = parse_outline(source, parse)?;
    Ok(Diagram::from_outline(outline, style.clone()))
}

/// Parse, build and render in one go. Any failure leaves no output file behind.
pub fn generate(
    source: &str,
    options: &GenerateOptions,
    renderer: &dyn DiagramRenderer,
) -> Result<PublishResult, DiagramError> {
    let diagram = build_diagram(source, &options.parse, &options.style)?;
    debug!(
        nodes = diagram.outline().len(),
        format = options.format.as_str(),
        "generating diagram"
    );

    publish(
        PublishSpec::new(&diagram, options.format)
            .with_directory(&options.directory)
            .with_base_name(options.base_name.clone()),
        renderer,
    )
}
