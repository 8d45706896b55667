//! Test harness for canopy integration tests

use std::path::Path;
use std::process::Command;

pub use canopy::test_utils::TestDir;

/// Run the canopy binary with the given working directory and arguments.
///
/// Returns (stdout, stderr, success).
pub fn run_canopy(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_canopy");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run canopy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("test.txt", b"contents");
        assert!(file_path.exists());
    }

    #[test]
    fn test_harness_pins_mtime() {
        let dir = TestDir::new();
        let file_path = dir.add_file_with_mtime("pinned.txt", b"x", 1_000);
        let mtime = std::fs::metadata(&file_path).unwrap().modified().unwrap();
        let expected =
            std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000);
        assert_eq!(mtime, expected);
    }
}
