//! Lookup table behind `inspect --to <name>`
//!
//! Maps a format name to the [`Format`] that prints a diagram in that form. The CLI asks it for
//! the requested name and lists its keys when the name is unknown.

use crate::diagram::Diagram;
use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;

/// Inspection formats keyed by name
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let dot = registry.serialize(&diagram, "dot")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// A registry with no formats; see [`FormatRegistry::with_defaults`] for the built-in set.
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Add `format` under its own name, replacing any earlier format of that name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Look up a format, failing with [`FormatError::FormatNotFound`] for unknown names.
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Format names in alphabetical order, as shown by `list-options`.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Print `diagram` in the named form.
    pub fn serialize(&self, diagram: &Diagram, format: &str) -> Result<String, FormatError> {
        self.get(format)?.serialize(diagram)
    }

    /// The `dot`, `json` and `treeviz` formats.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::DotFormat);
        registry.register(crate::formats::JsonFormat);
        registry.register(crate::formats::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
