#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str = "# Title\n\nStatus: Active\nSummary: Example document\n\n";

pub struct TestEnv {
    tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    /// Empty repository root with a `docs/` directory.
    pub fn new() -> Self {
        let env = Self::bare();
        fs::create_dir_all(env.root.join("docs")).expect("create docs dir");
        env
    }

    /// Repository root without a `docs/` directory.
    pub fn bare() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("repo");
        fs::create_dir_all(&root).expect("create repo root");
        Self { tmp, root }
    }

    pub fn write(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, body).expect("write fixture file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).expect("read output file")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("docgate");
        cmd.env_remove("DOCGATE_LOG")
            .env("GIT_CEILING_DIRECTORIES", self.tmp.path())
            .arg("--root")
            .arg(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str], code: i32) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .code(code)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn git(&self, args: &[&str]) -> bool {
        std::process::Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .env("GIT_CEILING_DIRECTORIES", self.tmp.path())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// `git init` in the root; false when git is unavailable.
    pub fn git_init(&self) -> bool {
        self.git(&["init", "-q"])
    }
}
