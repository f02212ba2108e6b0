//! Template preview rendering
//!
//! Produces a tree-style text block of what a template would create. No
//! filesystem access happens here, so it is safe to call on every redraw.

use crate::template::{File, Template};
use unicode_width::UnicodeWidthStr;

const HEADER_MARKER: &str = "-> ";
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";

/// Padding and width of the preview frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub padding_x: usize,
    pub padding_y: usize,
    /// Minimum outer width, including borders
    pub min_width: usize,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            padding_x: 2,
            padding_y: 1,
            min_width: 45,
        }
    }
}

/// Render the un-framed preview tree
///
/// The header shows the unexpanded folder pattern. Every line ends with the
/// template separator, where the two-character sequence `\n` is shown as a
/// real line break.
pub fn render_preview(template: &Template) -> String {
    let endl = template.endline_format.replace("\\n", "\n");
    let group = template.repeated_group();

    let mut out = String::new();
    out.push_str(HEADER_MARKER);
    out.push_str(&group.folder);
    out.push_str(&endl);

    push_entries(&mut out, &group.files, &endl);
    // Connector choice restarts for the root list.
    push_entries(&mut out, &template.root, &endl);

    out
}

fn push_entries(out: &mut String, files: &[File], endl: &str) {
    for (i, file) in files.iter().enumerate() {
        let connector = if i + 1 == files.len() {
            LAST_BRANCH
        } else {
            BRANCH
        };
        out.push_str(connector);
        out.push_str(&file.filename);
        out.push('.');
        out.push_str(&file.ext);
        out.push_str(endl);
    }
}

/// Draw a rounded, padded box around `text`
pub fn frame(text: &str, style: &BoxStyle) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    let inner = (content_width + style.padding_x * 2).max(style.min_width.saturating_sub(2));

    let mut out = String::new();
    out.push('╭');
    out.push_str(&"─".repeat(inner));
    out.push_str("╮\n");

    let blank = format!("│{}│\n", " ".repeat(inner));
    for _ in 0..style.padding_y {
        out.push_str(&blank);
    }
    for line in &lines {
        let fill = inner - style.padding_x - line.width();
        out.push('│');
        out.push_str(&" ".repeat(style.padding_x));
        out.push_str(line);
        out.push_str(&" ".repeat(fill));
        out.push_str("│\n");
    }
    for _ in 0..style.padding_y {
        out.push_str(&blank);
    }

    out.push('╰');
    out.push_str(&"─".repeat(inner));
    out.push('╯');
    out
}

/// Preview tree wrapped in a frame
pub fn generate_preview(template: &Template, style: &BoxStyle) -> String {
    frame(&render_preview(template), style)
}
