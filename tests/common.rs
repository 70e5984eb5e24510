// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn projcat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("projcat"))
}

/// Writes `content` at `relative_path` under `root`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, content: impl AsRef<[u8]>) -> std::io::Result<()> {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
