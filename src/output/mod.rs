// src/output/mod.rs
pub mod writer;

use crate::extractors::{ExtractedSection, Node};
use crate::utils::error::OutputError;

pub use writer::OutputWriter;

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE_INDENT: &str = "│  ";
const BLANK_INDENT: &str = "   ";

/// Renders the heading forest as a box-drawing tree, one line per heading.
pub fn render_tree(nodes: &[Node]) -> String {
    let mut out = String::new();
    render_level(&mut out, nodes, "");
    out
}

fn render_level(out: &mut String, nodes: &[Node], prefix: &str) {
    for (idx, node) in nodes.iter().enumerate() {
        let is_last = idx + 1 == nodes.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        let marker = "#".repeat(node.heading.level);
        out.push_str(&format!("{prefix}{connector}{marker} {}\n", node.heading.text));

        let child_prefix = format!("{prefix}{}", if is_last { BLANK_INDENT } else { PIPE_INDENT });
        render_level(out, &node.children, &child_prefix);
    }
}

/// Plain-text section output: the trimmed body plus a trailing newline.
pub fn render_section(section: &ExtractedSection) -> String {
    format!("{}\n", section.content)
}

/// Pretty JSON array of the heading forest.
pub fn tree_json(nodes: &[Node]) -> Result<String, OutputError> {
    let mut json = serde_json::to_string_pretty(nodes)?;
    json.push('\n');
    Ok(json)
}

/// Pretty JSON object describing an extracted section and its body.
pub fn section_json(section: &ExtractedSection) -> Result<String, OutputError> {
    let value = serde_json::json!({
        "heading": section.heading.text,
        "level": section.heading.level,
        "offset": section.heading.offset,
        "line_end": section.heading.line_end,
        "content": section.content,
        "content_length": section.content.len(),
    });
    let mut json = serde_json::to_string_pretty(&value)?;
    json.push('\n');
    Ok(json)
}
