//! Presentation settings
//!
//! Shapes, colors, layout direction and export formats are closed sets. Every type parses from
//! a string (CLI flags, config files) and rejects anything it does not recognize, so an invalid
//! choice fails before anything is rendered.
//!
//! Defaults reproduce the classic look: filled light-blue ellipses, black 24pt
//! "Microsoft YaHei" text, grey solid edges, top to bottom.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Named fill colors accepted in place of a hex value.
pub const PALETTE: &[(&str, &str)] = &[
    ("light-blue", "#ecf0f1"),
    ("sakura-pink", "#fde3e7"),
    ("mint-green", "#a3e4d7"),
    ("lavender", "#d7bde2"),
    ("peach", "#f9e79f"),
    ("coral", "#f5b7b1"),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    Unknown {
        kind: &'static str,
        value: String,
        expected: String,
    },
    #[error("invalid color '{0}' (expected #rrggbb, #rrggbbaa or a palette name)")]
    InvalidColor(String),
}

fn unknown(kind: &'static str, value: &str, expected: &[&str]) -> StyleError {
    StyleError::Unknown {
        kind,
        value: value.to_string(),
        expected: expected.join(", "),
    }
}

/// Node outline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum NodeShape {
    #[default]
    Ellipse,
    Box,
    Circle,
    Diamond,
    Plaintext,
}

impl NodeShape {
    pub const ALL: [NodeShape; 5] = [
        NodeShape::Ellipse,
        NodeShape::Box,
        NodeShape::Circle,
        NodeShape::Diamond,
        NodeShape::Plaintext,
    ];

    /// Graphviz shape keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeShape::Ellipse => "ellipse",
            NodeShape::Box => "box",
            NodeShape::Circle => "circle",
            NodeShape::Diamond => "diamond",
            NodeShape::Plaintext => "plaintext",
        }
    }
}

impl FromStr for NodeShape {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ellipse" => Ok(NodeShape::Ellipse),
            "box" | "rectangle" => Ok(NodeShape::Box),
            "circle" => Ok(NodeShape::Circle),
            "diamond" => Ok(NodeShape::Diamond),
            "plaintext" | "text" => Ok(NodeShape::Plaintext),
            _ => Err(unknown(
                "shape",
                s,
                &NodeShape::ALL.map(NodeShape::as_str),
            )),
        }
    }
}

/// Layout direction of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    #[default]
    TopBottom,
    LeftRight,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::TopBottom, Direction::LeftRight];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TopBottom => "top-bottom",
            Direction::LeftRight => "left-right",
        }
    }

    /// Graphviz `rankdir` value.
    pub fn rankdir(self) -> &'static str {
        match self {
            Direction::TopBottom => "TB",
            Direction::LeftRight => "LR",
        }
    }
}

impl FromStr for Direction {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top-bottom" | "tb" => Ok(Direction::TopBottom),
            "left-right" | "lr" => Ok(Direction::LeftRight),
            _ => Err(unknown(
                "direction",
                s,
                &Direction::ALL.map(Direction::as_str),
            )),
        }
    }
}

/// Output file format produced by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Png,
    Svg,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Png, ExportFormat::Svg];

    /// File extension, also the Graphviz `-T` output type.
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for ExportFormat {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "png" => Ok(ExportFormat::Png),
            "svg" => Ok(ExportFormat::Svg),
            _ => Err(unknown(
                "format",
                s,
                &ExportFormat::ALL.map(ExportFormat::as_str),
            )),
        }
    }
}

/// Edge stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EdgeLine {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Bold,
}

impl EdgeLine {
    pub const ALL: [EdgeLine; 4] = [
        EdgeLine::Solid,
        EdgeLine::Dashed,
        EdgeLine::Dotted,
        EdgeLine::Bold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EdgeLine::Solid => "solid",
            EdgeLine::Dashed => "dashed",
            EdgeLine::Dotted => "dotted",
            EdgeLine::Bold => "bold",
        }
    }
}

impl FromStr for EdgeLine {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(EdgeLine::Solid),
            "dashed" => Ok(EdgeLine::Dashed),
            "dotted" => Ok(EdgeLine::Dotted),
            "bold" => Ok(EdgeLine::Bold),
            _ => Err(unknown(
                "edge style",
                s,
                &EdgeLine::ALL.map(EdgeLine::as_str),
            )),
        }
    }
}

/// Validated color, stored as lowercase `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color(String);

impl Color {
    pub fn hex(&self) -> &str {
        &self.0
    }

    fn from_hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        let valid_len = digits.len() == 6 || digits.len() == 8;
        if valid_len && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Color(value.to_ascii_lowercase()))
        } else {
            None
        }
    }

    fn from_palette(name: &str) -> Option<Self> {
        PALETTE
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, hex)| Color(hex.to_string()))
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Color::from_palette(value)
            .or_else(|| Color::from_hex(value))
            .ok_or_else(|| StyleError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! try_from_string {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = StyleError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }
        )*
    };
}

try_from_string!(NodeShape, Direction, ExportFormat, EdgeLine, Color);

/// Attributes applied to every node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeStyle {
    pub shape: NodeShape,
    pub fill_color: Color,
    pub font_color: Color,
    pub font_size: u32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            shape: NodeShape::Ellipse,
            fill_color: Color("#ecf0f1".to_string()),
            font_color: Color("#000000".to_string()),
            font_size: 24,
        }
    }
}

/// Attributes applied to every edge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EdgeStyle {
    pub color: Color,
    pub line: EdgeLine,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: Color("#636e72".to_string()),
            line: EdgeLine::Solid,
        }
    }
}

/// Everything the diagram needs besides the outline itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiagramStyle {
    pub direction: Direction,
    pub font_name: String,
    pub node: NodeStyle,
    pub edge: EdgeStyle,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            direction: Direction::TopBottom,
            font_name: "Microsoft YaHei".to_string(),
            node: NodeStyle::default(),
            edge: EdgeStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ellipse", NodeShape::Ellipse)]
    #[case("box", NodeShape::Box)]
    #[case("Rectangle", NodeShape::Box)]
    #[case("circle", NodeShape::Circle)]
    #[case("diamond", NodeShape::Diamond)]
    #[case("plaintext", NodeShape::Plaintext)]
    #[case("text", NodeShape::Plaintext)]
    fn test_shape_parsing(#[case] input: &str, #[case] expected: NodeShape) {
        assert_eq!(input.parse::<NodeShape>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_shape_lists_choices() {
        let err = "hexagon".parse::<NodeShape>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown shape 'hexagon' (expected one of: ellipse, box, circle, diamond, plaintext)"
        );
    }

    #[rstest]
    #[case("TB", Direction::TopBottom, "TB")]
    #[case("top-bottom", Direction::TopBottom, "TB")]
    #[case("lr", Direction::LeftRight, "LR")]
    #[case("left-right", Direction::LeftRight, "LR")]
    fn test_direction(#[case] input: &str, #[case] expected: Direction, #[case] rankdir: &str) {
        let direction: Direction = input.parse().unwrap();
        assert_eq!(direction, expected);
        assert_eq!(direction.rankdir(), rankdir);
    }

    #[rstest]
    #[case("PDF", ExportFormat::Pdf)]
    #[case("png", ExportFormat::Png)]
    #[case("svg", ExportFormat::Svg)]
    fn test_export_format(#[case] input: &str, #[case] expected: ExportFormat) {
        assert_eq!(input.parse::<ExportFormat>().unwrap(), expected);
    }

    #[test]
    fn test_unsupported_export_format() {
        assert!("jpeg".parse::<ExportFormat>().is_err());
    }

    #[rstest]
    #[case("#ECF0F1", "#ecf0f1")]
    #[case("#a3e4d7", "#a3e4d7")]
    #[case("#a3e4d780", "#a3e4d780")]
    #[case("sakura-pink", "#fde3e7")]
    #[case("Coral", "#f5b7b1")]
    fn test_valid_colors(#[case] input: &str, #[case] hex: &str) {
        assert_eq!(input.parse::<Color>().unwrap().hex(), hex);
    }

    #[rstest]
    #[case("ecf0f1")]
    #[case("#ecf")]
    #[case("#ecf0fg")]
    #[case("red")]
    #[case("")]
    fn test_invalid_colors(#[case] input: &str) {
        assert_eq!(
            input.parse::<Color>(),
            Err(StyleError::InvalidColor(input.to_string()))
        );
    }

    #[test]
    fn test_palette_entries_are_valid_hex() {
        for (_, hex) in PALETTE {
            assert!(Color::from_hex(hex).is_some(), "{hex}");
        }
    }

    #[test]
    fn test_default_style() {
        let style = DiagramStyle::default();
        assert_eq!(style.direction, Direction::TopBottom);
        assert_eq!(style.node.shape, NodeShape::Ellipse);
        assert_eq!(style.node.fill_color.hex(), "#ecf0f1");
        assert_eq!(style.edge.color.hex(), "#636e72");
        assert_eq!(style.edge.line, EdgeLine::Solid);
    }
}
