//! Recursive filesystem walk producing a [`TreeNode`] tree.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::tree::TreeNode;
use crate::tree::node::display_name;

/// Walks a directory tree depth-first, collecting sizes and timestamps.
///
/// The walk never fails: entries whose metadata cannot be read degrade into
/// ghost nodes (at the root) or are dropped (below it), and unlistable
/// directories are treated as empty. Warnings for every degraded entry go to
/// stderr.
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Build the tree rooted at `path`.
    ///
    /// Children of each directory are sorted by descending modification time
    /// as observed during enumeration; ties keep the filesystem's order.
    /// Directory sizes are the sum of their children's sizes.
    pub fn walk(&self, path: &Path) -> TreeNode {
        let meta = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("canopy: warning: skipping {}: {}", path.display(), e);
                return TreeNode::ghost(path);
            }
        };

        let created = meta.created().unwrap_or(SystemTime::UNIX_EPOCH);
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        let name = display_name(path);

        if !meta.is_dir() {
            return TreeNode::File {
                name,
                path: path.to_path_buf(),
                size: meta.len(),
                created,
                modified,
            };
        }

        let mut entries = match fs::read_dir(path) {
            Ok(iter) => iter
                .filter_map(|e| e.ok())
                .filter_map(|entry| {
                    let entry_path = entry.path();
                    match fs::metadata(&entry_path) {
                        Ok(m) => {
                            let mtime = m.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                            Some((entry_path, mtime))
                        }
                        Err(e) => {
                            eprintln!(
                                "canopy: warning: skipping {}: {}",
                                entry_path.display(),
                                e
                            );
                            None
                        }
                    }
                })
                .collect::<Vec<_>>(),
            Err(e) => {
                eprintln!("canopy: warning: cannot list {}: {}", path.display(), e);
                Vec::new()
            }
        };

        // Newest first; stable sort keeps enumeration order for equal mtimes
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        let children: Vec<TreeNode> = entries
            .iter()
            .map(|(entry_path, _)| self.walk(entry_path))
            .collect();
        let size = children.iter().map(|child| child.size()).sum();

        TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            size,
            created,
            modified,
            children,
        }
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}
