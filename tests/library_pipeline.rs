mod common;

use common::create_file;
use projcat::config::ConfigBuilder;
use projcat::errors::Error;
use projcat::{concatenate, run, CancellationToken, FileDecision, SkipReason, Verdict};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_run_writes_file_and_returns_summary() -> anyhow::Result<()> {
    // 1. Setup
    let temp_dir = tempdir()?;
    let out_dir = tempdir()?;
    let output_file_path = out_dir.path().join("context.txt");
    create_file(temp_dir.path(), "b.txt", "Content B")?;
    create_file(temp_dir.path(), "a.rs", "fn a() {}")?;
    create_file(temp_dir.path(), "c.md", "# C")?;

    let config = ConfigBuilder::new()
        .project_dir(temp_dir.path().to_str().unwrap())
        .output_file(output_file_path.to_str().unwrap())
        .no_header(true)
        .build()?;

    // 2. Execute
    let summary = run(&config, &CancellationToken::new(), None)?;

    // 3. Assert
    let expected_content = "--- START FILE: b.txt ---\nContent B\n--- END FILE: b.txt ---\n\n\
                            --- START FILE: c.md ---\n# C\n--- END FILE: c.md ---\n\n";
    assert_eq!(fs::read_to_string(&output_file_path)?, expected_content);
    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_included, 2);
    assert_eq!(summary.skipped.extension_mismatch, 1);
    assert_eq!(summary.bytes_included, 12);
    assert_eq!(summary.output_bytes, expected_content.len());
    Ok(())
}

#[test]
fn test_concatenate_reports_each_decision() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    create_file(temp_dir.path(), "keep.py", "keep = True\n")?;
    create_file(temp_dir.path(), "app.log", "log line")?;
    create_file(temp_dir.path(), "big.txt", "x".repeat(2048))?;
    create_file(temp_dir.path(), "empty.txt", "")?;

    let config = ConfigBuilder::new()
        .project_dir(temp_dir.path().to_str().unwrap())
        .extensions(vec![".py".into(), ".txt".into(), ".log".into()])
        .max_file_size(1.0 / 1024.0)
        .skip_empty(true)
        .build()?;

    let mut decisions: Vec<FileDecision> = Vec::new();
    let result = concatenate(&config, &CancellationToken::new(), Some(&mut decisions))?;

    let verdicts: Vec<(&str, &Verdict)> = decisions
        .iter()
        .map(|d| (d.relative_path.as_str(), &d.verdict))
        .collect();
    assert_eq!(
        verdicts,
        vec![
            ("app.log", &Verdict::Skip(SkipReason::ExcludedName)),
            ("big.txt", &Verdict::Skip(SkipReason::TooLarge { size: 2048 })),
            ("empty.txt", &Verdict::Skip(SkipReason::Empty)),
            ("keep.py", &Verdict::Include),
        ]
    );
    assert_eq!(result.summary.files_scanned, decisions.len());
    assert!(result.output.contains("--- START FILE: keep.py ---\nkeep = True\n\n"));
    assert!(result.output.starts_with("# Project: "));
    Ok(())
}

#[test]
fn test_cancelled_run_writes_nothing() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    let out_dir = tempdir()?;
    let output_file_path = out_dir.path().join("context.txt");
    create_file(temp_dir.path(), "a.py", "x")?;

    let config = ConfigBuilder::new()
        .project_dir(temp_dir.path().to_str().unwrap())
        .output_file(output_file_path.to_str().unwrap())
        .build()?;

    // Simulate an immediate stop signal
    let token = CancellationToken::new();
    token.cancel();

    let result = run(&config, &token, None);
    assert!(matches!(result, Err(Error::Interrupted)));
    assert!(!output_file_path.exists());
    Ok(())
}

#[test]
fn test_invalid_project_dir_from_builder() {
    let result = ConfigBuilder::new()
        .project_dir("no/such/project/for/projcat")
        .build();
    assert!(matches!(result, Err(Error::InvalidProjectDir(_))));
}
