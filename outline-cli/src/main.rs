//! Command-line interface for outline-graph
//! Turns a numbered outline into a diagram through Graphviz, or shows what the parser made of it.
//!
//! Usage:
//!   outline-graph render `<path>` [--format pdf|png|svg] [--shape ...] [--color ...]  - Render a diagram file
//!   outline-graph inspect `<path>` [--to dot|json|treeviz]                            - Print an intermediate form
//!   outline-graph list-options                                                     - List shapes, colors, formats
//!   outline-graph completions `<shell>`                                              - Print a completion script
//!
//! `<path>` may be `-` to read the outline from stdin.
mod commands;

use clap::{value_parser, Arg, ArgAction, Command};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

fn style_args() -> Vec<Arg> {
    vec![
        Arg::new("config")
            .long("config")
            .short('c')
            .help("Configuration file layered over the defaults"),
        Arg::new("shape")
            .long("shape")
            .short('s')
            .help("Node shape (ellipse, box, circle, diamond, plaintext)"),
        Arg::new("color")
            .long("color")
            .help("Node fill color (#rrggbb or a palette name, see list-options)"),
        Arg::new("direction")
            .long("direction")
            .short('d')
            .help("Layout direction (top-bottom/TB, left-right/LR)"),
        Arg::new("wrap-width")
            .long("wrap-width")
            .short('w')
            .help("Maximum characters per label line")
            .value_parser(value_parser!(u32)),
    ]
}

fn build_cli() -> Command {
    Command::new("outline-graph")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn numbered outlines into diagrams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render an outline to a PDF, PNG or SVG file")
                .arg(
                    Arg::new("path")
                        .help("Path to the outline file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .args(style_args())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (pdf, png, svg)"),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .short('o')
                        .help("Directory the diagram is written to"),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .help("Output file name without extension"),
                )
                .arg(
                    Arg::new("dot")
                        .long("dot")
                        .help("Path to the Graphviz dot executable"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed outline without rendering it")
                .arg(
                    Arg::new("path")
                        .help("Path to the outline file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .args(style_args())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Representation to print (dot, json, treeviz)")
                        .default_value("dot"),
                ),
        )
        .subcommand(
            Command::new("list-options").about("List shapes, colors, directions and formats"),
        )
        .subcommand(
            Command::new("completions")
                .about("Print a shell completion script")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("render", render_matches)) => commands::handle_render_command(render_matches),
        Some(("inspect", inspect_matches)) => commands::handle_inspect_command(inspect_matches),
        Some(("list-options", _)) => {
            commands::handle_list_options_command();
            Ok(())
        }
        Some(("completions", completion_matches)) => {
            let shell = *completion_matches
                .get_one::<Shell>("shell")
                .expect("shell is required");
            clap_complete::generate(
                shell,
                &mut build_cli(),
                "outline-graph",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }
}
