// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, projcat_cmd};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_error_missing_project_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    projcat_cmd()
        .current_dir(temp.path())
        .arg("missing_dir")
        .arg("out.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Project directory 'missing_dir' not found or is not a directory.",
        ))
        .stdout(predicate::str::contains("Successfully").not());

    assert!(!temp.path().join("out.txt").exists());
    Ok(())
}

#[test]
fn test_error_project_dir_is_a_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "file.py", "x")?;

    projcat_cmd()
        .current_dir(temp.path())
        .arg("file.py")
        .arg("out.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project directory 'file.py' not found"));

    assert!(!temp.path().join("out.txt").exists());
    Ok(())
}

#[test]
fn test_error_unwritable_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let out_dir = tempdir()?;
    let out = out_dir.path().join("missing").join("context.txt");
    create_file(temp.path(), "a.py", "x")?;

    projcat_cmd()
        .arg(temp.path())
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "Error: Could not write to output file '{}'. Reason:",
            out.display()
        )))
        .stdout(predicate::str::contains("Successfully").not());

    assert!(!out.exists());
    Ok(())
}

#[test]
fn test_error_output_is_a_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let out_dir = tempdir()?;
    create_file(temp.path(), "a.py", "x")?;
    fs::create_dir(out_dir.path().join("taken"))?;

    projcat_cmd()
        .arg(temp.path())
        .arg(out_dir.path().join("taken"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not write to output file"));

    assert!(out_dir.path().join("taken").is_dir());
    Ok(())
}

#[test]
fn test_error_missing_arguments() -> Result<(), Box<dyn std::error::Error>> {
    projcat_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn test_error_non_numeric_max_size() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    projcat_cmd()
        .arg(temp.path())
        .arg("out.txt")
        .args(["--max-file-size", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-file-size"));
    Ok(())
}
