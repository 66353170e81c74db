//! Integration tests for the `emitpath` planning binary

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run_emitpath(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_emitpath"))
        .args(args)
        .output()
        .expect("failed to run emitpath");

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (stdout, stderr, output.status.success())
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_directory_plan_preserves_structure() {
    let input_dir = tempdir().unwrap();
    fs::create_dir_all(input_dir.path().join("nested")).unwrap();
    fs::write(input_dir.path().join("root.js"), "var a = 1;").unwrap();
    fs::write(input_dir.path().join("nested/deep.js"), "var b = 2;").unwrap();
    fs::write(input_dir.path().join("nested/readme.md"), "docs").unwrap();

    let output_root = tempdir().unwrap();
    let output_dir = output_root.path().join("foo.bar");

    let (stdout, stderr, success) = run_emitpath(&[
        &path_arg(input_dir.path()),
        "--output",
        &path_arg(&output_dir),
        "--json",
    ]);
    assert!(success, "stderr: {}", stderr);

    let plan: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let outputs = plan["outputs"].as_array().unwrap();
    assert_eq!(outputs.len(), 2);

    let codes: Vec<&str> = outputs.iter().map(|o| o["code"].as_str().unwrap()).collect();
    assert!(codes.contains(&path_arg(&output_dir.join("root.js")).as_str()));
    assert!(codes.contains(&path_arg(&output_dir.join("nested").join("deep.js")).as_str()));

    // planning never touches the filesystem
    assert!(!output_dir.exists());
}

#[test]
fn test_file_plan_with_named_source_map() {
    let input_dir = tempdir().unwrap();
    let input = input_dir.path().join("app.js");
    fs::write(&input, "var a = 1;").unwrap();

    let output = input_dir.path().join("dist").join("bundle.js");
    let (stdout, stderr, success) = run_emitpath(&[
        &path_arg(&input),
        "-o",
        &path_arg(&output),
        "--source-map",
        "--source-map-file-name",
        "maps/bundle",
    ]);
    assert!(success, "stderr: {}", stderr);

    let expected_map = input_dir.path().join("dist").join("maps").join("bundle.js.map");
    assert!(stdout.contains(&path_arg(&output)), "stdout: {}", stdout);
    assert!(stdout.contains(&path_arg(&expected_map)), "stdout: {}", stdout);
}

#[test]
fn test_directory_input_with_file_output_fails() {
    let input_dir = tempdir().unwrap();
    fs::write(input_dir.path().join("a.js"), "var a = 1;").unwrap();

    let output = input_dir.path().join("out.js");
    let (_stdout, stderr, success) = run_emitpath(&[&path_arg(input_dir.path()), "-o", &path_arg(&output)]);

    assert!(!success);
    assert!(stderr.contains("should be a directory path"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_fails() {
    let input_dir = tempdir().unwrap();
    let missing = input_dir.path().join("missing");

    let (_stdout, stderr, success) = run_emitpath(&[&path_arg(&missing)]);
    assert!(!success);
    assert!(stderr.contains("Input path does not exist"), "stderr: {}", stderr);
}

#[test]
fn test_quiet_suppresses_plan_lines() {
    let input_dir = tempdir().unwrap();
    fs::write(input_dir.path().join("a.js"), "var a = 1;").unwrap();

    let (stdout, _stderr, success) = run_emitpath(&[&path_arg(input_dir.path()), "--quiet"]);
    assert!(success);
    assert!(stdout.is_empty());
}
