//! Tree node data model.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Serialize, Serializer};

use crate::format::format_timestamp;

fn serialize_time<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(*time))
}

/// One filesystem entry in the built tree.
///
/// Directory sizes are cumulative (sum of all descendant sizes, computed
/// bottom-up by the walker); timestamps always come from the entry's own
/// metadata. `children` order is fixed at construction time, descending by
/// modification time, and is never re-sorted.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        size: u64,
        #[serde(serialize_with = "serialize_time")]
        created: SystemTime,
        #[serde(serialize_with = "serialize_time")]
        modified: SystemTime,
    },
    Dir {
        name: String,
        path: PathBuf,
        size: u64,
        #[serde(serialize_with = "serialize_time")]
        created: SystemTime,
        #[serde(serialize_with = "serialize_time")]
        modified: SystemTime,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    /// Leaf node for an entry whose metadata could not be read: zero size,
    /// epoch timestamps, never a directory.
    pub fn ghost(path: &Path) -> Self {
        TreeNode::File {
            name: display_name(path),
            path: path.to_path_buf(),
            size: 0,
            created: SystemTime::UNIX_EPOCH,
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            TreeNode::File { size, .. } => *size,
            TreeNode::Dir { size, .. } => *size,
        }
    }

    pub fn created(&self) -> SystemTime {
        match self {
            TreeNode::File { created, .. } => *created,
            TreeNode::Dir { created, .. } => *created,
        }
    }

    pub fn modified(&self) -> SystemTime {
        match self {
            TreeNode::File { modified, .. } => *modified,
            TreeNode::Dir { modified, .. } => *modified,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children in display order; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }
}

/// Display name for a path: the final component, or the full path string
/// when there is none (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_component() {
        assert_eq!(display_name(Path::new("/tmp/report.html")), "report.html");
        assert_eq!(display_name(Path::new("relative/dir")), "dir");
    }

    #[test]
    fn test_display_name_falls_back_to_full_path() {
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    fn test_ghost_node() {
        let ghost = TreeNode::ghost(Path::new("/gone/away.txt"));
        assert!(!ghost.is_dir());
        assert_eq!(ghost.name(), "away.txt");
        assert_eq!(ghost.size(), 0);
        assert_eq!(ghost.created(), SystemTime::UNIX_EPOCH);
        assert_eq!(ghost.modified(), SystemTime::UNIX_EPOCH);
        assert!(ghost.children().is_empty());
    }

    #[test]
    fn test_json_serialization() {
        let node = TreeNode::Dir {
            name: "root".to_string(),
            path: PathBuf::from("/root"),
            size: 5,
            created: SystemTime::UNIX_EPOCH,
            modified: SystemTime::UNIX_EPOCH,
            children: vec![TreeNode::File {
                name: "a.txt".to_string(),
                path: PathBuf::from("/root/a.txt"),
                size: 5,
                created: SystemTime::UNIX_EPOCH,
                modified: SystemTime::UNIX_EPOCH,
            }],
        };

        let value: serde_json::Value = serde_json::from_str(
            &serde_json::to_string(&node).expect("serialization should succeed"),
        )
        .expect("round-trip through string");

        assert_eq!(value["type"], "dir");
        assert_eq!(value["size"], 5);
        assert_eq!(value["children"][0]["type"], "file");
        assert_eq!(value["children"][0]["name"], "a.txt");
        // Timestamps serialize as formatted strings, not raw structs
        assert!(value["modified"].as_str().is_some_and(|s| s.len() == 19));
    }
}
