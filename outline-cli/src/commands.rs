//! Subcommand handlers
//!
//! Each handler returns `Err(message)` on failure; `main` prints it and exits with status 1.

use clap::ArgMatches;
use outline_config::{Loader, OutlineConfig};
use outline_render::{
    build_diagram, generate, Direction, EdgeLine, ExportFormat, Format, FormatRegistry, NodeShape,
    PALETTE,
};
use std::io::Read;
use tracing::debug;

/// Config file picked up from the working directory when present.
const LOCAL_CONFIG_FILE: &str = "outline-graph.toml";

/// CLI flag → configuration key.
const STRING_OVERRIDES: &[(&str, &str)] = &[
    ("shape", "diagram.node.shape"),
    ("color", "diagram.node.fill_color"),
    ("direction", "diagram.direction"),
    ("format", "output.format"),
    ("output-dir", "output.directory"),
    ("name", "output.base_name"),
    ("dot", "render.executable"),
];

/// Defaults, then `./outline-graph.toml`, then `--config`, then individual flags.
fn load_config(matches: &ArgMatches) -> Result<OutlineConfig, String> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    for (arg, key) in STRING_OVERRIDES {
        // Not every subcommand defines every flag.
        if let Ok(Some(value)) = matches.try_get_one::<String>(arg) {
            loader = loader
                .set_override(key, value.as_str())
                .map_err(|e| e.to_string())?;
        }
    }
    if let Some(width) = matches.get_one::<u32>("wrap-width") {
        loader = loader
            .set_override("parse.wrap_width", i64::from(*width))
            .map_err(|e| e.to_string())?;
    }

    loader
        .build()
        .map_err(|e| format!("Invalid configuration: {}", e))
}

/// Read the outline from a file, or from stdin for `-`.
fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| format!("Error reading stdin: {}", e))?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Error reading {}: {}", path, e))
    }
}

/// Handle the render command
pub fn handle_render_command(matches: &ArgMatches) -> Result<(), String> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let config = load_config(matches)?;
    let source = read_source(path)?;

    debug!(path = %path, "rendering outline");
    let result = generate(&source, &config.generate_options(), &config.renderer())
        .map_err(|e| e.to_string())?;

    println!("Diagram saved to {}", result.path.display());
    Ok(())
}

/// Handle the inspect command
pub fn handle_inspect_command(matches: &ArgMatches) -> Result<(), String> {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let format = matches
        .get_one::<String>("to")
        .expect("to has a default value");
    let config = load_config(matches)?;
    let source = read_source(path)?;

    let diagram = build_diagram(&source, &config.parse_options(), &config.diagram)
        .map_err(|e| e.to_string())?;

    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&diagram, format).map_err(|e| {
        format!(
            "{} (available: {})",
            e,
            registry.list_formats().join(", ")
        )
    })?;

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Handle the list-options command
pub fn handle_list_options_command() {
    println!("Shapes:");
    for shape in NodeShape::ALL {
        println!("  {}", shape.as_str());
    }

    println!("\nColors (or any #rrggbb value):");
    for (name, hex) in PALETTE {
        println!("  {:<12} {}", name, hex);
    }

    println!("\nDirections:");
    for direction in Direction::ALL {
        println!("  {:<12} {}", direction.as_str(), direction.rankdir());
    }

    println!("\nEdge styles:");
    for line in EdgeLine::ALL {
        println!("  {}", line.as_str());
    }

    println!("\nOutput formats:");
    for format in ExportFormat::ALL {
        println!("  {}", format.as_str());
    }

    println!("\nInspect formats:");
    let registry = FormatRegistry::with_defaults();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let extensions = format
                .file_extensions()
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect::<Vec<_>>()
                .join(" ");
            println!("  {:<12} {:<10} {}", name, extensions, format.description());
        }
    }
}
