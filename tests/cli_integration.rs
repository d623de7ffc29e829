use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fstree_html() -> Command {
    Command::cargo_bin("fstree-html").unwrap()
}

#[test]
fn shows_help() {
    fstree_html()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("interactive HTML"));
}

#[test]
fn shows_version() {
    fstree_html()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    fstree_html()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn render_subcommand_help() {
    fstree_html()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--from-dir"));
}

#[test]
fn invalid_config_path_fails() {
    fstree_html()
        .args(["--config", "/nonexistent/path.toml", "example"])
        .assert()
        .failure();
}

#[test]
fn example_prints_json() {
    fstree_html()
        .args(["example", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\"home\""))
        .stdout(predicate::str::contains("\"nginx.conf\":\"-rw-r--r--\""));
}

#[test]
fn render_writes_page() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("filesystem.json");
    let output = dir.path().join("out.html");
    fs::write(&input, r#"{"etc": {"hosts": "-rw-r--r--"}}"#).unwrap();

    fstree_html()
        .arg("render")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"))
        .stdout(predicate::str::contains("1 directories and 1 files"));

    let page = fs::read_to_string(&output).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(r#"title="Permissions: drwxr-xr-x""#));
    assert!(page.contains(r#"data-file-type="generic""#));
}

#[test]
fn render_missing_input_uses_example() {
    let dir = TempDir::new().unwrap();

    fstree_html()
        .arg("render")
        .arg(dir.path().join("missing.json"))
        .args(["--fragment", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nginx.conf"))
        .stdout(predicate::str::contains("<html>").not());
}

#[test]
fn render_rejects_non_object_root() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("list.json");
    fs::write(&input, "[1, 2, 3]").unwrap();

    fstree_html()
        .arg("render")
        .arg(&input)
        .args(["-o", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn render_from_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/guide.md"), "# guide").unwrap();

    fstree_html()
        .arg("render")
        .arg("--from-dir")
        .arg(dir.path())
        .args(["--fragment", "--no-pretty", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"data-file-type="md""#))
        .stdout(predicate::str::contains(">guide.md</span></div>"));
}

#[test]
fn capture_then_render() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();
    let json = dir.path().join("tree.json");

    fstree_html()
        .arg("capture")
        .arg(&root)
        .arg("-o")
        .arg(&json)
        .assert()
        .success();

    let captured = fs::read_to_string(&json).unwrap();
    assert!(captured.contains("\"project\""));
    assert!(captured.contains("\"main.rs\""));

    fstree_html()
        .arg("render")
        .arg(&json)
        .args(["--fragment", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"data-file-type="rs""#));
}

#[test]
fn completions_for_bash() {
    fstree_html()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fstree-html"));
}

#[test]
fn man_page_renders() {
    fstree_html()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}
