//! Label word wrapping
//!
//! Long labels are broken into lines so that the rendered node keeps a readable width. Breaks
//! only ever happen at whitespace; a single word longer than the width gets a line of its own.

/// Default maximum label line width, in characters.
pub const DEFAULT_WRAP_WIDTH: usize = 30;

/// Graphviz escape for a left-justified line break inside a label.
pub const LINE_BREAK: &str = "\\l";

/// Wrap `label` to lines of at most `width` characters.
///
/// A label that already fits is returned verbatim as a single line (internal spacing
/// included). Otherwise words are packed greedily and joined by single spaces.
pub fn wrap_label(label: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if label.chars().count() <= width {
        return vec![label.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in label.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
