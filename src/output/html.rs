//! HTML fragment rendering for the built tree.
//!
//! This is a pure pass over the tree: no filesystem access, so rendering the
//! same tree twice yields byte-identical output.

use crate::format::{format_size, format_timestamp};
use crate::tree::TreeNode;

const FOLDER_GLYPH: &str = "\u{1F4C1}"; // 📁
const FILE_GLYPH: &str = "\u{1F4C4}"; // 📄

/// Escape characters with markup meaning so names never become structure.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats a [`TreeNode`] tree as a nested `<details>`/`<ul>` HTML fragment.
///
/// Directories become open `<details>` groups with a summary line carrying
/// the cumulative size and modification time; files become `<li>` lines.
/// Children appear in the tree's fixed order.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.format_node(node, 0, &mut output);
        output
    }

    fn format_node(&self, node: &TreeNode, depth: usize, output: &mut String) {
        let pad = "  ".repeat(depth);
        let name = escape_html(node.name());
        let size = format_size(node.size());
        let modified = format_timestamp(node.modified());

        if node.is_dir() {
            output.push_str(&format!(
                "{pad}<details open>\n\
                 {pad}  <summary>{FOLDER_GLYPH} <strong>{name}/</strong> ({size}, modified {modified})</summary>\n\
                 {pad}  <ul>\n"
            ));
            for child in node.children() {
                self.format_node(child, depth + 2, output);
            }
            output.push_str(&format!("{pad}  </ul>\n{pad}</details>\n"));
        } else {
            output.push_str(&format!(
                "{pad}<li>{FILE_GLYPH} {name} <small>({size}, modified {modified})</small></li>\n"
            ));
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
