use chrono::{DateTime, SecondsFormat};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Read-only version-control queries. Paths are relative to the repository
/// root. `None` means "unknown": no repository, no `git`, or the query failed.
pub trait VersionControl {
    fn name(&self) -> &'static str;
    fn created_at(&self, rel: &str) -> Option<String>;
    fn updated_at(&self, rel: &str) -> Option<String>;
    fn is_ignored(&self, rel: &str) -> Option<bool>;
    fn is_tracked(&self, rel: &str) -> Option<bool>;
}

#[derive(Debug, Default)]
pub struct NoVcs;

impl VersionControl for NoVcs {
    fn name(&self) -> &'static str {
        "none"
    }

    fn created_at(&self, _rel: &str) -> Option<String> {
        None
    }

    fn updated_at(&self, _rel: &str) -> Option<String> {
        None
    }

    fn is_ignored(&self, _rel: &str) -> Option<bool> {
        None
    }

    fn is_tracked(&self, _rel: &str) -> Option<bool> {
        None
    }
}

#[derive(Debug)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn run(&self, args: &[&str]) -> Option<Output> {
        match Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
        {
            Ok(out) => Some(out),
            Err(err) => {
                tracing::debug!(?args, %err, "git invocation failed");
                None
            }
        }
    }

    fn stdout(&self, args: &[&str]) -> Option<String> {
        let out = self.run(args)?;
        if !out.status.success() {
            tracing::debug!(?args, status = %out.status, "git query returned failure");
            return None;
        }
        Some(String::from_utf8_lossy(&out.stdout).into_owned())
    }

    /// Maps exit 0 → true, exit 1 → false, anything else → unknown.
    fn yes_no(&self, args: &[&str]) -> Option<bool> {
        let out = self.run(args)?;
        match out.status.code() {
            Some(0) => Some(true),
            Some(1) => Some(false),
            _ => {
                tracing::debug!(?args, status = %out.status, "git query inconclusive");
                None
            }
        }
    }
}

/// Normalizes one `%aI` line; malformed output counts as no data.
pub fn parse_iso_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
        Err(err) => {
            tracing::debug!(raw, %err, "unparseable git timestamp");
            None
        }
    }
}

impl VersionControl for GitCli {
    fn name(&self) -> &'static str {
        "git"
    }

    fn created_at(&self, rel: &str) -> Option<String> {
        let out = self.stdout(&["log", "--diff-filter=A", "--format=%aI", "--", rel])?;
        // newest first; the add that created the file is the last line
        out.lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .and_then(parse_iso_timestamp)
    }

    fn updated_at(&self, rel: &str) -> Option<String> {
        let out = self.stdout(&["log", "-1", "--format=%aI", "--", rel])?;
        parse_iso_timestamp(&out)
    }

    fn is_ignored(&self, rel: &str) -> Option<bool> {
        self.yes_no(&["check-ignore", "-q", rel])
    }

    fn is_tracked(&self, rel: &str) -> Option<bool> {
        self.yes_no(&["ls-files", "--error-unmatch", rel])
    }
}

/// Picks `GitCli` when `root` is inside a git work tree, `NoVcs` otherwise.
pub fn detect(root: &Path) -> Box<dyn VersionControl> {
    let inside = Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(root)
        .output()
        .map(|o| o.status.success() && String::from_utf8_lossy(&o.stdout).trim() == "true")
        .unwrap_or(false);
    if inside {
        tracing::debug!(root = %root.display(), "using git for version-control queries");
        Box::new(GitCli::new(root))
    } else {
        tracing::debug!(root = %root.display(), "no git work tree; version-control data unavailable");
        Box::new(NoVcs)
    }
}
