//! CLI-level tests exercising the compiled binary.

use super::test_utils::fixture_content_dir;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_cli_build_generates_outputs() {
    let content = fixture_content_dir();
    let output = TempDir::new().unwrap();

    let bin = env!("CARGO_BIN_EXE_cvgen");
    let result = Command::new(bin)
        .arg("--content-dir")
        .arg(content.path())
        .arg("--output-dir")
        .arg(output.path())
        .arg("build")
        .output()
        .unwrap();

    assert!(
        result.status.success(),
        "cvgen build should succeed: stderr={:?}",
        String::from_utf8_lossy(&result.stderr)
    );
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("cv.typ"));
    assert!(output.path().join("cv.typ").exists());
    assert!(output.path().join("cv-ats.typ").exists());
}

#[test]
fn test_cli_build_single_variant() {
    let content = fixture_content_dir();
    let output = TempDir::new().unwrap();

    let bin = env!("CARGO_BIN_EXE_cvgen");
    let result = Command::new(bin)
        .arg("--content-dir")
        .arg(content.path())
        .arg("--output-dir")
        .arg(output.path())
        .arg("build")
        .arg("--variant")
        .arg("ats")
        .output()
        .unwrap();

    assert!(result.status.success());
    assert!(output.path().join("cv-ats.typ").exists());
    assert!(!output.path().join("cv.typ").exists());
}

#[test]
fn test_cli_unknown_variant_fails_with_diagnostic() {
    let content = fixture_content_dir();
    let output = TempDir::new().unwrap();

    let bin = env!("CARGO_BIN_EXE_cvgen");
    let result = Command::new(bin)
        .arg("--content-dir")
        .arg(content.path())
        .arg("--output-dir")
        .arg(output.path())
        .arg("build")
        .arg("--variant")
        .arg("nope")
        .output()
        .unwrap();

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Unknown variant"));
}

#[test]
fn test_missing_glossary_warns_on_default_run() {
    let content = fixture_content_dir();
    fs::remove_file(content.path().join("glossary.json")).unwrap();
    let output = TempDir::new().unwrap();

    let bin = env!("CARGO_BIN_EXE_cvgen");
    let result = Command::new(bin)
        .arg("--content-dir")
        .arg(content.path())
        .arg("--output-dir")
        .arg(output.path())
        .arg("build")
        .output()
        .unwrap();

    // Degradation is non-fatal, but the warning must be surfaced even
    // without --verbose.
    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("Glossary not loaded"),
        "expected glossary warning on stderr, got: {}",
        stderr
    );
}

#[test]
fn test_cli_variants_lists_builtins() {
    let bin = env!("CARGO_BIN_EXE_cvgen");
    let result = Command::new(bin).arg("variants").output().unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("cv.typ"));
    assert!(stdout.contains("cv-ats.typ"));
}
