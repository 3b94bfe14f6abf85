//! Integration tests for the `aurora` binary
//!
//! Runs the compiled CLI in scratch directories and checks the
//! non-interactive commands end to end.

use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run `aurora <args>` in `cwd` with an isolated home directory
fn aurora(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aurora"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", cwd)
        .env("AURORA_CONFIG_DIR", cwd.join(".aurora-config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run aurora")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_extension(workspace: &Path, id: &str) {
    let dir = workspace.join("extensions").join(id);
    fs::create_dir_all(&dir).unwrap();
    let manifest = json!({
        "name": id,
        "description": "d",
        "icon": "",
        "categories": ["Snippets"],
        "version": "0.0.1",
        "type": "javascript",
        "author": {"name": "A", "email": "", "company": ""},
        "license": "MIT",
        "editor": ["1.0.0"]
    });
    fs::write(
        dir.join("extension.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_help_json() {
    let temp = TempDir::new().unwrap();
    let output = aurora(temp.path(), &["help", "--json"]);

    assert!(output.status.success());
    let help: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(help["name"], "aurora");
    assert_eq!(help["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(help["commands"].as_array().unwrap().len(), 4);
}

#[test]
fn test_plain_help() {
    let temp = TempDir::new().unwrap();
    let output = aurora(temp.path(), &["help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("extension"));
    assert!(text.contains("profile"));
    assert!(text.contains("project"));
}

#[test]
fn test_list_without_extensions_directory() {
    let temp = TempDir::new().unwrap();
    let output = aurora(temp.path(), &["extension", "--list"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("No extensions directory found."));
    assert!(!temp.path().join("extensions").exists());
    assert!(!temp.path().join("error.log").exists());
}

#[test]
fn test_list_numbers_extensions() {
    let temp = TempDir::new().unwrap();
    write_extension(temp.path(), "beta");
    write_extension(temp.path(), "alpha");

    let output = aurora(temp.path(), &["extension", "--list"]);

    let text = stdout(&output);
    assert!(text.contains("Created extensions:"));
    assert!(text.contains("1. alpha"));
    assert!(text.contains("2. beta"));
}

#[test]
fn test_extension_without_action() {
    let temp = TempDir::new().unwrap();
    let output = aurora(temp.path(), &["extension"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("No valid extension command provided."));
}

#[test]
fn test_remove_missing_extension_is_handled() {
    let temp = TempDir::new().unwrap();
    let output = aurora(temp.path(), &["extension", "--remove", "ghost"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Extension with ID ghost not found"));
    assert!(!temp.path().join("error.log").exists());
}

#[test]
fn test_update_and_deprecate() {
    let temp = TempDir::new().unwrap();
    write_extension(temp.path(), "demo");

    let output = aurora(temp.path(), &["extension", "--update", "demo"]);
    assert!(stdout(&output).contains("Extension with ID demo is valid"));

    let output = aurora(temp.path(), &["extension", "--deprecate", "demo"]);
    assert!(output.status.success());
    let manifest: Value = serde_json::from_str(
        &fs::read_to_string(temp.path().join("extensions/demo/extension.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["deprecated"], true);
}

#[test]
fn test_remove_extension() {
    let temp = TempDir::new().unwrap();
    write_extension(temp.path(), "demo");

    let output = aurora(temp.path(), &["extension", "--remove", "demo"]);

    assert!(stdout(&output).contains("Extension with ID demo has been removed."));
    assert!(!temp.path().join("extensions/demo").exists());
}

#[test]
fn test_upload_validates_current_directory() {
    let temp = TempDir::new().unwrap();
    write_extension(temp.path(), "demo");
    let dir = temp.path().join("extensions/demo");

    let output = aurora(&dir, &["extension", "--upload"]);
    assert!(stdout(&output).contains("Uploading extension demo v0.0.1"));
    assert!(stderr(&output).contains("No extension registry is available yet"));

    let output = aurora(temp.path(), &["extension", "--upload"]);
    assert!(stderr(&output).contains("extension.json in"));
}

#[test]
fn test_profile_account_is_pending() {
    let temp = TempDir::new().unwrap();
    let output = aurora(temp.path(), &["profile", "--account", "link"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Account link is not available yet"));
}

#[test]
fn test_profile_account_rejects_unknown_action() {
    let temp = TempDir::new().unwrap();
    let output = aurora(temp.path(), &["profile", "--account", "delete"]);

    assert!(!output.status.success());
}

#[test]
fn test_profile_remove_without_profile() {
    let temp = TempDir::new().unwrap();
    let output = aurora(temp.path(), &["profile", "--remove"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Profile not found"));
}

#[cfg(not(target_os = "macos"))]
#[test]
fn test_macos_only_commands() {
    let temp = TempDir::new().unwrap();

    let output = aurora(temp.path(), &["project", "--open"]);
    assert!(stderr(&output).contains("The open project command is only supported on macOS"));

    write_extension(temp.path(), "demo");
    let output = aurora(&temp.path().join("extensions/demo"), &["extension", "--install"]);
    assert!(stderr(&output).contains("The install command is only supported on macOS"));
    assert!(!temp.path().join("Library").exists());
}
