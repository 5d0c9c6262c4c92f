//! Integration tests for the mark binary
//!
//! Each test gets its own HOME and working directories so the real `~/.mark`
//! is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
    dirs: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
            dirs: TempDir::new().unwrap(),
        }
    }

    /// Create (if needed) and return a canonical working directory
    fn dir(&self, name: &str) -> PathBuf {
        let path = self.dirs.path().join(name);
        fs::create_dir_all(&path).unwrap();
        path.canonicalize().unwrap()
    }

    fn mark_file(&self) -> PathBuf {
        self.home.path().join(".mark")
    }

    fn mark_in(&self, cwd: &Path) -> Command {
        let mut cmd = Command::cargo_bin("mark").unwrap();
        cmd.env("HOME", self.home.path()).current_dir(cwd);
        cmd
    }

    fn mark(&self) -> Command {
        self.mark_in(self.dirs.path())
    }

    fn stored(&self) -> Vec<String> {
        fs::read_to_string(self.mark_file())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_bare_invocation_marks_cwd() {
    let sandbox = Sandbox::new();
    let dir = sandbox.dir("project");

    sandbox.mark_in(&dir).assert().success();

    assert_eq!(sandbox.stored(), vec![display(&dir)]);
}

#[test]
fn test_list_is_most_recent_first() {
    let sandbox = Sandbox::new();
    let x = sandbox.dir("x");
    let y = sandbox.dir("y");

    sandbox.mark_in(&x).arg("add").assert().success();
    sandbox.mark_in(&y).arg("add").assert().success();

    sandbox
        .mark()
        .arg("list")
        .assert()
        .success()
        .stdout(format!("[0] {}\n[1] {}\n", display(&y), display(&x)));

    sandbox
        .mark()
        .arg("get")
        .assert()
        .success()
        .stdout(format!("{}\n", display(&y)));
}

#[test]
fn test_readding_moves_to_front() {
    let sandbox = Sandbox::new();
    let a = sandbox.dir("a");
    let b = sandbox.dir("b");
    let c = sandbox.dir("c");

    for dir in [&a, &b, &c] {
        sandbox.mark_in(dir).assert().success();
    }

    sandbox
        .mark_in(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("path already exists. Moving to top."));

    assert_eq!(
        sandbox.stored(),
        vec![display(&a), display(&c), display(&b)]
    );
}

#[test]
fn test_delete_and_clear() {
    let sandbox = Sandbox::new();
    let a = sandbox.dir("a");
    let b = sandbox.dir("b");
    let c = sandbox.dir("c");
    for dir in [&a, &b, &c] {
        sandbox.mark_in(dir).assert().success();
    }

    sandbox.mark().args(["delete", "1"]).assert().success();
    assert_eq!(sandbox.stored(), vec![display(&c), display(&a)]);

    sandbox.mark().arg("clear").assert().success();
    assert!(sandbox.mark_file().exists());
    assert!(sandbox.stored().is_empty());

    sandbox.mark().arg("clear").assert().success();
    sandbox.mark().arg("list").assert().success().stdout("");
}

#[test]
fn test_index_errors_exit_with_one() {
    let sandbox = Sandbox::new();
    let a = sandbox.dir("a");
    sandbox.mark_in(&a).assert().success();

    sandbox
        .mark()
        .args(["get", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid index"));

    sandbox
        .mark()
        .args(["get", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid index"));

    sandbox
        .mark()
        .args(["delete", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("index is not a number"));

    sandbox
        .mark()
        .arg("delete")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid number of arguments"));

    sandbox
        .mark()
        .args(["list", "extra"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid number of arguments"));

    assert_eq!(sandbox.stored(), vec![display(&a)]);
}

#[test]
fn test_get_on_empty_store_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .mark()
        .arg("get")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid index"));

    assert!(sandbox.mark_file().exists());
}

#[cfg(unix)]
#[test]
fn test_back_walks_up_from_cwd() {
    let sandbox = Sandbox::new();
    let deep = sandbox.dir("one/two");
    let parent = deep.parent().unwrap().to_path_buf();

    sandbox
        .mark_in(&deep)
        .args(["back", "0"])
        .assert()
        .success()
        .stdout(format!("{}\n", display(&deep)));

    sandbox
        .mark_in(&deep)
        .args(["back", "1"])
        .assert()
        .success()
        .stdout(format!("{}\n", display(&parent)));

    let segments = deep
        .components()
        .filter(|c| matches!(c, std::path::Component::Normal(_)))
        .count();

    sandbox
        .mark_in(&deep)
        .args(["back", &(segments - 1).to_string()])
        .assert()
        .success()
        .stdout("/\n");

    sandbox
        .mark_in(&deep)
        .args(["back", &segments.to_string()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid index"));

    sandbox
        .mark_in(&deep)
        .args(["back", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid index"));
}

#[test]
fn test_unknown_command_shows_help_and_succeeds() {
    let sandbox = Sandbox::new();

    sandbox
        .mark()
        .arg("jump")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid option. displaying help."))
        .stdout(predicate::str::contains("Available Commands:"));
}

#[test]
fn test_unknown_flag_shows_help_and_succeeds() {
    let sandbox = Sandbox::new();

    sandbox
        .mark()
        .arg("-x")
        .assert()
        .success()
        .stderr("invalid option. displaying help.\n")
        .stdout(predicate::str::contains("Available Commands:"));
}

#[test]
fn test_unknown_command_notice_is_the_only_stderr() {
    let sandbox = Sandbox::new();

    sandbox
        .mark()
        .arg("jump")
        .assert()
        .success()
        .stderr("invalid option. displaying help.\n");
}

#[test]
fn test_usage_errors_exit_with_one() {
    let sandbox = Sandbox::new();

    sandbox
        .mark()
        .arg("--file")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn test_help_flag_prints_same_text_as_help_command() {
    let sandbox = Sandbox::new();

    let command = sandbox.mark().arg("help").output().unwrap();
    let flag = sandbox.mark().arg("--help").output().unwrap();

    assert!(flag.status.success());
    assert_eq!(flag.stdout, command.stdout);
    assert!(String::from_utf8_lossy(&flag.stdout).contains("Available Commands:"));
}

#[cfg(unix)]
#[test]
fn test_cwd_with_line_break_is_refused() {
    let sandbox = Sandbox::new();
    let a = sandbox.dir("a");
    let odd = sandbox.dir("a\nb");
    sandbox.mark_in(&a).assert().success();

    sandbox
        .mark_in(&odd)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line break"));

    assert_eq!(sandbox.stored(), vec![display(&a)]);
    sandbox
        .mark()
        .arg("list")
        .assert()
        .success()
        .stdout(format!("[0] {}\n", display(&a)));
}

#[test]
fn test_help_and_install_print_text() {
    let sandbox = Sandbox::new();

    sandbox
        .mark()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mark [command]"));

    sandbox
        .mark()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("$(mark get $1)"));

    assert!(!sandbox.mark_file().exists());
}

#[test]
fn test_file_flag_uses_other_store() {
    let sandbox = Sandbox::new();
    let a = sandbox.dir("a");
    let custom = sandbox.home.path().join("nested").join("marks.txt");

    sandbox
        .mark_in(&a)
        .arg("--file")
        .arg(&custom)
        .arg("add")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&custom).unwrap(),
        format!("{}\n", display(&a))
    );
    assert!(!sandbox.mark_file().exists());
}
