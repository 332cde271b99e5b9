//! Shared configuration loader for outline-graph.
//!
//! `defaults/outline.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`OutlineConfig`].
//!
//! Shapes, colors, directions and formats are validated while deserializing: an unknown value
//! fails the load instead of reaching the renderer.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use outline_parser::ParseOptions;
use outline_render::{DiagramStyle, ExportFormat, GenerateOptions, GraphvizRenderer};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/outline.default.toml");

/// Top-level configuration consumed by outline-graph applications.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    pub parse: ParseConfig,
    pub diagram: DiagramStyle,
    pub output: OutputConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Outline parsing knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub wrap_width: usize,
}

/// Where and how diagrams are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: ExportFormat,
    pub base_name: String,
    pub directory: PathBuf,
}

/// Rendering engine settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub executable: Option<PathBuf>,
}

impl OutlineConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::with_wrap_width(self.parse.wrap_width)
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            parse: self.parse_options(),
            style: self.diagram.clone(),
            format: self.output.format,
            directory: self.output.directory.clone(),
            base_name: self.output.base_name.clone(),
        }
    }

    pub fn renderer(&self) -> GraphvizRenderer {
        match &self.render.executable {
            Some(path) => GraphvizRenderer::with_executable(path),
            None => GraphvizRenderer::new(),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.parse.wrap_width == 0 {
            return Err(ConfigError::Message(
                "parse.wrap_width must be at least 1".to_string(),
            ));
        }
        if self.output.base_name.trim().is_empty() {
            return Err(ConfigError::Message(
                "output.base_name must not be empty".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<OutlineConfig, ConfigError> {
        self.builder
            .build()?
            .try_deserialize::<OutlineConfig>()?
            .validate()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<OutlineConfig, ConfigError> {
    Loader::new().build()
}
