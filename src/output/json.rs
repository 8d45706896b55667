//! JSON output formatting

use std::io;

use crate::tree::TreeNode;

/// Print the built tree as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let json = serde_json::to_string_pretty(node).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
