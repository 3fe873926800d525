use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn accessormap() -> Command {
    Command::cargo_bin("accessormap").unwrap()
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("T.java"),
        "class T { private int a; int getA() { return a; } void setA(int a) { a++; } }",
    )
    .unwrap();
    dir
}

#[test]
fn check_prints_verdict() {
    let dir = project();
    let file = dir.path().join("T.java");

    let output = accessormap()
        .args(["check", file.to_str().unwrap(), "T.getA"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");

    let output = accessormap()
        .args(["check", file.to_str().unwrap(), "T.setA"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}

#[test]
fn check_unknown_method_fails() {
    let dir = project();
    let file = dir.path().join("T.java");

    accessormap()
        .args(["check", file.to_str().unwrap(), "T.missing"])
        .assert()
        .failure();
}

#[test]
fn scan_json_output() {
    let dir = project();

    let output = accessormap()
        .current_dir(dir.path())
        .args(["scan", ".", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["getters"], 1);
    assert_eq!(value["summary"]["setters"], 0);
}

#[test]
fn scan_terminal_output_uses_config_file() {
    let dir = project();
    fs::write(
        dir.path().join(".accessormap.toml"),
        "[output]\nshow_all = true\n",
    )
    .unwrap();

    let output = accessormap()
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["scan", "."])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("T.getA  getter (a)"));
    assert!(stdout.contains("T.setA  -"));
}

#[test]
fn init_creates_config_once() {
    let dir = TempDir::new().unwrap();

    accessormap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    assert!(dir.path().join(".accessormap.toml").exists());

    accessormap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();
}
