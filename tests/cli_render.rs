//! Integration tests for `glyphgrid render` and `glyphgrid table`.
//!
//! Documents come from `tests/fixtures/` or stdin, so nothing here needs
//! network access.

#![allow(deprecated)] // cargo_bin deprecation; replacement not yet stable

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `glyphgrid` binary.
fn glyphgrid() -> Command {
    Command::cargo_bin("glyphgrid").expect("binary 'glyphgrid' should be built")
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Point the config lookup at an empty directory so a developer's own
/// `~/.config/glyphgrid/config.toml` cannot leak into the tests.
fn isolated() -> Command {
    let mut cmd = glyphgrid();
    let empty = std::env::temp_dir().join("glyphgrid-test-config");
    cmd.env("XDG_CONFIG_HOME", &empty).env("HOME", &empty);
    cmd
}

// ─── render ──────────────────────────────────────────────────────────────────

#[test]
fn render_draws_first_table() {
    isolated()
        .args(["render", "--file"])
        .arg(fixture("message.html"))
        .assert()
        .success()
        .stdout("\u{2588}\u{2580}\u{2580}\u{2580}\n\u{2588}\u{2580}\u{2580} \n\u{2588}   \n");
}

#[test]
fn render_without_table_reports_no_data() {
    isolated()
        .args(["render", "--file"])
        .arg(fixture("no_table.html"))
        .assert()
        .success()
        .stdout("No data found.\n");
}

#[test]
fn render_header_only_is_single_space() {
    isolated()
        .args(["render", "--file"])
        .arg(fixture("header_only.html"))
        .assert()
        .success()
        .stdout(" \n");
}

#[test]
fn render_unknown_header_uses_positional_columns() {
    isolated()
        .args(["render", "--file"])
        .arg(fixture("fallback.html"))
        .assert()
        .success()
        .stdout("   X\n    \n    \n    \n    \n    \n");
}

#[test]
fn render_reads_stdin() {
    isolated()
        .args(["render", "--file", "-"])
        .write_stdin(
            "<table><tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>\
             <tr><td>1</td><td>o</td><td>0</td></tr></table>",
        )
        .assert()
        .success()
        .stdout(" o\n");
}

#[test]
fn render_rejects_invalid_utf8() {
    isolated()
        .args(["render", "--file", "-"])
        .write_stdin(vec![b'<', b't', 0xff, 0xfe])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn render_missing_file_fails() {
    isolated()
        .args(["render", "--file", "/nonexistent/glyphgrid/doc.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn render_unreachable_url_fails() {
    isolated()
        .args(["render", "--timeout", "5", "http://127.0.0.1:1/doc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch document"));
}

#[test]
fn render_rejects_non_http_url() {
    isolated()
        .args(["render", "ftp://example.com/doc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported scheme"));
}

#[test]
fn render_honors_config_cell_limit() {
    let dir = std::env::temp_dir().join(format!("glyphgrid-limit-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.toml");
    std::fs::write(&config, "max_cells = 4\n").unwrap();

    isolated()
        .arg("--config")
        .arg(&config)
        .args(["render", "--file"])
        .arg(fixture("message.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cell limit"));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn render_rejects_invalid_config() {
    let dir = std::env::temp_dir().join(format!("glyphgrid-badcfg-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.toml");
    std::fs::write(&config, "timeout_secs = \"never\"\n").unwrap();

    isolated()
        .arg("--config")
        .arg(&config)
        .args(["render", "--file"])
        .arg(fixture("message.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid TOML"));

    std::fs::remove_dir_all(&dir).ok();
}

// ─── table ───────────────────────────────────────────────────────────────────

#[test]
fn table_prints_markdown_of_first_table() {
    isolated()
        .args(["table", "--file"])
        .arg(fixture("message.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "| x-coordinate | Character | y-coordinate |",
        ))
        .stdout(predicate::str::contains("| --- | --- | --- |"))
        .stdout(predicate::str::contains("| n/a | ? | 9 |\n(10 rows)\n"))
        .stdout(predicate::str::contains("| 40 |").not())
        .stdout(predicate::str::contains("| 9 | F |").not());
}

#[test]
fn table_without_table_reports_no_data() {
    isolated()
        .args(["table", "--file"])
        .arg(fixture("no_table.html"))
        .assert()
        .success()
        .stdout("No data found.\n");
}
