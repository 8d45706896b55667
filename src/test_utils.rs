//! Test utilities for building temporary directory trees with pinned
//! modification times.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Provides methods for creating files and directories and for pinning
/// modification times, so ordering assertions are deterministic. The
/// directory is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file with the given content, creating parent directories as
    /// needed.
    pub fn add_file(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a file and pin its modification time to `mtime_secs` (seconds
    /// since the Unix epoch).
    pub fn add_file_with_mtime(&self, path: &str, content: &[u8], mtime_secs: i64) -> PathBuf {
        let full_path = self.add_file(path, content);
        self.set_mtime(&full_path, mtime_secs);
        full_path
    }

    /// Create an empty directory, including parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Pin the modification time of an existing entry.
    ///
    /// Writing into a directory bumps its mtime, so pin directories after
    /// their contents.
    pub fn set_mtime(&self, path: &Path, mtime_secs: i64) {
        filetime::set_file_mtime(path, FileTime::from_unix_time(mtime_secs, 0))
            .expect("Failed to set mtime");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
