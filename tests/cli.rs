//! Integration tests for the nbctl binary
//!
//! A shell script stands in for nbconvert. It is run through `sh` (set in a
//! config file) so the tests never need `jupyter` installed.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const FAKE_NBCONVERT: &str = r#"
for last; do :; done
echo "$*" >> "$NBCTL_FAKE_LOG"
case "$last" in
  *fail*) echo "kernel died" >&2; exit 3 ;;
esac
echo '{"nbformat": 4, "cells": []}'
"#;

const CLEAN: &str = r#"{"nbformat": 4, "nbformat_minor": 5, "metadata": {}, "cells": [
    {"cell_type": "code", "source": "x = 1", "outputs": [], "metadata": {}}
]}"#;

const DIRTY: &str = r#"{"nbformat": 4, "nbformat_minor": 5, "metadata": {}, "cells": [
    {"cell_type": "code", "source": "x", "metadata": {},
     "outputs": [{"output_type": "execute_result", "data": {"text/plain": "1"}}]}
]}"#;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("fake-nbconvert.sh");
        fs::write(&script, FAKE_NBCONVERT).unwrap();
        fs::write(
            dir.path().join("nbctl.toml"),
            format!(
                "[tool]\nprogram = \"sh\"\nsubcommand = \"{}\"\n",
                script.display()
            ),
        )
        .unwrap();
        fs::create_dir(dir.path().join("work")).unwrap();
        Self { dir }
    }

    fn work(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn nbctl(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_nbctl"))
            .arg("--config")
            .arg(self.dir.path().join("nbctl.toml"))
            .args(args)
            .current_dir(self.dir.path())
            .env("NBCTL_FAKE_LOG", self.log_path())
            .env_remove("NBCTL_JUPYTER")
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_check_stripped_scenario() {
    let sb = Sandbox::new();
    sb.write("a.ipynb", CLEAN);
    sb.write("b.ipynb", DIRTY);
    sb.write(".ipynb_checkpoints/a.ipynb", DIRTY);

    let out = sb.nbctl(&["--format", "json", "check-stripped", "-d", &arg(&sb.work())]);

    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files
        .iter()
        .all(|f| !f["path"].as_str().unwrap().contains(".ipynb_checkpoints")));
    assert!(sb.calls().is_empty());
}

#[test]
fn test_check_stripped_clean_directory_passes() {
    let sb = Sandbox::new();
    sb.write("a.ipynb", CLEAN);
    sb.write("nested/b.ipynb", CLEAN);

    let out = sb.nbctl(&["check-stripped", "-d", &arg(&sb.work())]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn test_strip_wrong_extension_never_runs_tool() {
    let sb = Sandbox::new();
    let path = sb.write("notes.txt", CLEAN);

    let out = sb.nbctl(&["strip", "-f", &arg(&path)]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a notebook"));
    assert!(sb.calls().is_empty());
}

#[test]
fn test_strip_directory_continues_after_failure() {
    let sb = Sandbox::new();
    sb.write("a.ipynb", CLEAN);
    sb.write("will-fail.ipynb", CLEAN);
    sb.write("z.ipynb", CLEAN);

    let out = sb.nbctl(&["strip", "-d", &arg(&sb.work())]);

    assert_eq!(out.status.code(), Some(1));
    let calls = sb.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls
        .iter()
        .all(|c| c.contains("--ClearOutputPreprocessor.enabled=True --inplace")));
    assert!(String::from_utf8_lossy(&out.stderr).contains("kernel died"));
}

#[test]
fn test_run_single_file_passes_timeout() {
    let sb = Sandbox::new();
    let path = sb.write("a.ipynb", CLEAN);

    let out = sb.nbctl(&["run", "-f", &arg(&path), "--timeout", "42"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(sb.calls()[0].contains("--ExecutePreprocessor.timeout=42"));
}

#[test]
fn test_to_html_empty_directory_succeeds() {
    let sb = Sandbox::new();

    let out = sb.nbctl(&["to-html", "-d", &arg(&sb.work()), "-o", "site"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(sb.calls().is_empty());
}

#[test]
fn test_to_html_output_dir() {
    let sb = Sandbox::new();
    let path = sb.write("a.ipynb", CLEAN);

    let out = sb.nbctl(&["to-html", "-f", &arg(&path), "-o", "site"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(sb.calls()[0].contains("--to html --output-dir=site"));
}

#[test]
fn test_strip_stdout_prints_tool_output() {
    let sb = Sandbox::new();
    let path = sb.write("a.ipynb", DIRTY);

    let out = sb.nbctl(&["strip-stdout", "-f", &arg(&path)]);

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains(r#""cells": []"#));
    assert!(sb.calls()[0].contains("--stdout"));
}

#[test]
fn test_usage_errors_exit_with_one() {
    let sb = Sandbox::new();

    let both = sb.nbctl(&["strip", "-f", "a.ipynb", "-d", "docs"]);
    assert_eq!(both.status.code(), Some(1));

    let missing_file = sb.nbctl(&["strip-stdout"]);
    assert_eq!(missing_file.status.code(), Some(1));

    assert!(sb.calls().is_empty());
}

#[test]
fn test_help_exits_with_zero() {
    let sb = Sandbox::new();
    assert_eq!(sb.nbctl(&["--help"]).status.code(), Some(0));
}

#[test]
fn test_strip_directory_inside_checkpoints_touches_nothing() {
    let sb = Sandbox::new();
    let copy = sb.write("docs/.ipynb_checkpoints/a-checkpoint.ipynb", DIRTY);

    let out = sb.nbctl(&["strip", "-d", &arg(copy.parent().unwrap())]);

    assert_eq!(out.status.code(), Some(0));
    assert!(sb.calls().is_empty());
}

#[test]
fn test_run_checkpoint_copy_rejected() {
    let sb = Sandbox::new();
    let copy = sb.write(".ipynb_checkpoints/a-checkpoint.ipynb", CLEAN);

    let out = sb.nbctl(&["run", "-f", &arg(&copy)]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("checkpoint copy"));
    assert!(sb.calls().is_empty());
}

#[test]
fn test_missing_tool_reports_hint() {
    let sb = Sandbox::new();
    let path = sb.write("a.ipynb", CLEAN);

    let out = Command::new(env!("CARGO_BIN_EXE_nbctl"))
        .arg("strip")
        .arg("-f")
        .arg(&path)
        .current_dir(sb.work())
        .env("NBCTL_JUPYTER", "nbctl-missing-jupyter")
        .env_remove("NBCTL_CONFIG")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Hint"));
}
