use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "1.Main topic\n1.1 Subtopic 1\n1.2 Subtopic 2\n1.2.1 Detail A\n2.Another topic\n";

fn write_outline(dir: &std::path::Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("outline.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn inspect_prints_dot_by_default() {
    let dir = tempdir().unwrap();
    let path = write_outline(dir.path(), SAMPLE);

    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.arg("inspect").arg(&path);

    cmd.assert().success().stdout(
        predicate::str::starts_with("digraph {")
            .and(predicate::str::contains("\"1.2\" -> \"1.2.1\""))
            .and(predicate::str::contains("rankdir=\"TB\"")),
    );
}

#[test]
fn inspect_applies_style_flags() {
    let dir = tempdir().unwrap();
    let path = write_outline(dir.path(), SAMPLE);

    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.arg("inspect")
        .arg(&path)
        .args(["--shape", "box", "--color", "peach", "--direction", "LR"]);

    cmd.assert().success().stdout(
        predicate::str::contains("shape=\"box\"")
            .and(predicate::str::contains("fillcolor=\"#f9e79f\""))
            .and(predicate::str::contains("rankdir=\"LR\"")),
    );
}

#[test]
fn inspect_treeviz_from_stdin() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["inspect", "-", "--to", "treeviz"])
        .write_stdin("1.Root\n1.1.Child\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("└─ 1 Root").and(predicate::str::contains("1.1 Child")));
}

#[test]
fn inspect_json() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["inspect", "-", "--to", "json"])
        .write_stdin("1.A\n2.B\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"identifier\": \"2\""));
}

#[test]
fn inspect_unknown_format_lists_available() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["inspect", "-", "--to", "yaml"]).write_stdin("1 A\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("format 'yaml' not found").and(
            predicate::str::contains("available: dot, json, treeviz"),
        ));
}

#[test]
fn malformed_line_is_reported() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["inspect", "-"]).write_stdin("abc\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: line 1: invalid line format: 'abc'"));
}

#[test]
fn orphan_is_reported() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["inspect", "-"]).write_stdin("1.1.Orphan\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("parent '1' of '1.1' has not been defined"));
}

#[test]
fn empty_input_is_reported() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["inspect", "-"]).write_stdin("");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn invalid_color_is_rejected() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["inspect", "-", "--color", "chartreuse"])
        .write_stdin("1 A\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn render_without_graphviz_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = write_outline(dir.path(), SAMPLE);
    let out = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.arg("render")
        .arg(&path)
        .arg("--output-dir")
        .arg(&out)
        .args(["--dot", "/nonexistent/graphviz/dot"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Graphviz executable"));
    assert!(!out.join("graph.pdf").exists());
}

#[test]
fn render_parse_error_skips_renderer() {
    let dir = tempdir().unwrap();
    let path = write_outline(dir.path(), "1 Root\n\n2 Other\n");

    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.arg("render")
        .arg(&path)
        .arg("--output-dir")
        .arg(dir.path())
        .args(["--dot", "/nonexistent/graphviz/dot"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 2: invalid line format"));
}

#[test]
fn config_file_is_layered() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[diagram.edge]\nline = \"dashed\"\ncolor = \"#000000\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["inspect", "-", "--config"])
        .arg(&config)
        .write_stdin("1 A\n1.1 B\n");

    cmd.assert().success().stdout(predicate::str::contains(
        "\"1\" -> \"1.1\" [color=\"#000000\", style=\"dashed\"]",
    ));
}

#[test]
fn list_options_shows_choices() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.arg("list-options");

    cmd.assert().success().stdout(
        predicate::str::contains("diamond")
            .and(predicate::str::contains("sakura-pink"))
            .and(predicate::str::contains("left-right"))
            .and(predicate::str::contains("svg"))
            .and(predicate::str::contains("treeviz")),
    );
}

#[test]
fn list_options_shows_inspect_extensions() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.arg("list-options");

    cmd.assert().success().stdout(
        predicate::str::contains(".dot .gv")
            .and(predicate::str::contains(".json"))
            .and(predicate::str::contains(".tree")),
    );
}

#[test]
fn completions_for_bash() {
    let mut cmd = cargo_bin_cmd!("outline-graph");
    cmd.args(["completions", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("outline-graph"));
}
