//! Integration tests for the pkgdoc binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
inventories:
  letters:
    description: Letters and numbers
    command: [sh, -c, "printf 'b 2\na 1\nnot-a-record\n'"]
    pattern: '(?P<name>\S+) (?P<version>\S+)'
    columns:
      - { field: name, title: Name }
      - { field: version, title: Version }
  ghost:
    command: [/nonexistent/pkgdoc-ghost]
    columns: [{ field: line, title: Line }]
"#;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pkgdoc.yml"), config).unwrap();
    temp
}

fn pkgdoc(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("pkgdoc"));
    cmd.current_dir(temp.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pkgdoc"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Document the packages"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("expand"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pkgdoc"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pkgdoc"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn list_shows_builtin_and_configured_directives() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    pkgdoc(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("packages:deb"))
        .stdout(predicate::str::contains("packages:pyversions"))
        .stdout(predicate::str::contains("packages:letters"))
        .stdout(predicate::str::contains("Letters and numbers"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn render_configured_inventory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    let output = pkgdoc(&temp)
        .args(["render", "letters", "--format", "markdown"])
        .output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(String::from_utf8(output.stdout)?, @r"
    | Name | Version |
    | --- | --- |
    | a | 1 |
    | b | 2 |
    ");
    Ok(())
}

#[cfg(unix)]
#[test]
fn render_json_is_a_node_tree() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    let output = pkgdoc(&temp)
        .args(["render", "packages:letters", "--format", "json"])
        .output()?;

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["type"], "table");
    Ok(())
}

#[test]
fn render_missing_command_shows_error_node() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    pkgdoc(&temp)
        .args(["render", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(".. error::"))
        .stdout(predicate::str::contains(
            "Command not found: /nonexistent/pkgdoc-ghost",
        ));
    Ok(())
}

#[test]
fn render_unknown_directive_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    pkgdoc(&temp)
        .args(["render", "rpm"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown directive: packages:rpm"));
    Ok(())
}

#[test]
fn render_rejects_bin_on_other_directives() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    pkgdoc(&temp)
        .args(["render", "letters", "--bin", "python3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not accept option 'bin'"));
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("inventories:\n  rpm:\n    command: []\n    columns: [{field: line, title: Line}]\n");
    pkgdoc(&temp)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty command"));
    Ok(())
}

#[test]
fn explicit_config_file_is_used() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let path = temp.path().join("other.yml");
    fs::write(&path, CONFIG)?;

    pkgdoc(&temp)
        .args(["--config", path.to_str().unwrap(), "list", "--names-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("packages:ghost"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn expand_rst_document() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    fs::write(
        temp.path().join("index.rst"),
        "Tools\n=====\n\n.. packages:letters::\n\nDone.\n",
    )?;

    let output = pkgdoc(&temp).args(["expand", "index.rst"]).output()?;

    assert!(output.status.success());
    insta::assert_snapshot!(String::from_utf8(output.stdout)?, @r"
    Tools
    =====

    .. list-table::
       :header-rows: 1

       * - Name
         - Version
       * - a
         - 1
       * - b
         - 2

    Done.
    ");
    Ok(())
}

#[cfg(unix)]
#[test]
fn expand_markdown_document_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    fs::write(
        temp.path().join("index.md"),
        "# Tools\n\n```{packages:letters}\n```\n\n```{packages:ghost}\n```\n",
    )?;

    pkgdoc(&temp)
        .args(["expand", "index.md", "-o", "out.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));

    let expanded = fs::read_to_string(temp.path().join("out.md"))?;
    assert!(expanded.starts_with("# Tools\n\n| Name | Version |\n"));
    assert!(expanded.contains("| b | 2 |\n"));
    assert!(expanded.ends_with("> **Error:** Command not found: /nonexistent/pkgdoc-ghost\n"));
    Ok(())
}

#[test]
fn expand_reports_directive_errors() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    fs::write(temp.path().join("index.rst"), "Intro\n\n.. packages:letters:: args\n")?;

    pkgdoc(&temp)
        .args(["expand", "index.rst"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 3"));
    Ok(())
}

#[test]
fn config_prints_resolved_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(CONFIG);
    pkgdoc(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("format: rst"))
        .stdout(predicate::str::contains("letters:"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("pkgdoc"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pkgdoc"));
    Ok(())
}
