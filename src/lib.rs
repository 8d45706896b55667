//! Canopy - generate a chronologically-sorted HTML tree view of a directory

pub mod format;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use format::{format_size, format_timestamp};
pub use output::{HtmlFormatter, print_json, render_document};
pub use tree::{TreeNode, TreeWalker};
