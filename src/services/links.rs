use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn link_regex() -> &'static Regex {
    LINK_REGEX.get_or_init(|| Regex::new(r"\]\(([^)]+)\)").expect("Invalid link regex"))
}

/// Targets of every `](target)` in `text`, trimmed, in document order.
pub fn iter_links(text: &str) -> impl Iterator<Item = &str> + '_ {
    link_regex()
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Empty,
    Anchor,
    Opaque,
    External,
    RepoRoot(&'a str),
    Docs(&'a str),
    Relative(&'a str),
}

pub fn is_external(target: &str) -> bool {
    target.contains("://") || target.starts_with("mailto:")
}

/// Drops a trailing `#fragment` and surrounding whitespace.
pub fn strip_fragment(target: &str) -> &str {
    target.split('#').next().unwrap_or(target).trim()
}

pub fn classify<'a>(target: &'a str, docs_prefix: &str) -> LinkTarget<'a> {
    let target = target.trim();
    if target.is_empty() {
        return LinkTarget::Empty;
    }
    if target.starts_with('#') {
        return LinkTarget::Anchor;
    }
    if target.starts_with('<') && target.ends_with('>') {
        return LinkTarget::Opaque;
    }
    if is_external(target) {
        return LinkTarget::External;
    }
    classify_local(strip_fragment(target), docs_prefix)
}

/// Classification for targets already known to be filesystem paths.
fn classify_local<'a>(path: &'a str, docs_prefix: &str) -> LinkTarget<'a> {
    if path.is_empty() {
        LinkTarget::Empty
    } else if path.starts_with('/') {
        LinkTarget::RepoRoot(path)
    } else if path.starts_with(docs_prefix) {
        LinkTarget::Docs(path)
    } else {
        LinkTarget::Relative(path)
    }
}

/// Lexically resolves `.` and `..` so missing intermediate directories do not
/// hide an otherwise valid target.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

pub struct LinkResolver<'r> {
    root: &'r Path,
    docs_prefix: String,
}

impl<'r> LinkResolver<'r> {
    pub fn new(root: &'r Path, docs_prefix: impl Into<String>) -> Self {
        Self {
            root,
            docs_prefix: docs_prefix.into(),
        }
    }

    fn local_path(&self, from: &Path, target: LinkTarget<'_>) -> Option<PathBuf> {
        let base = from.parent().unwrap_or(self.root);
        let joined = match target {
            LinkTarget::RepoRoot(p) => self.root.join(p.trim_start_matches('/')),
            LinkTarget::Docs(p) => self.root.join(p),
            LinkTarget::Relative(p) => base.join(p),
            LinkTarget::Empty
            | LinkTarget::Anchor
            | LinkTarget::Opaque
            | LinkTarget::External => return None,
        };
        Some(normalize_path(&joined))
    }

    /// Whether a link in document `from` points at something that exists.
    pub fn resolves(&self, from: &Path, target: &str) -> bool {
        let classified = classify(target, &self.docs_prefix);
        let Some(resolved) = self.local_path(from, classified) else {
            return true;
        };
        if strip_fragment(target).ends_with('/') {
            resolved.is_dir()
        } else {
            resolved.exists()
        }
    }

    /// Location named by a `Replaced-by:` value. External and anchor forms
    /// are not special-cased here; only the path prefix decides the base.
    pub fn replacement_path(&self, from: &Path, value: &str) -> PathBuf {
        let path = strip_fragment(value);
        match classify_local(path, &self.docs_prefix) {
            LinkTarget::Empty => from.parent().unwrap_or(self.root).to_path_buf(),
            local => self
                .local_path(from, local)
                .unwrap_or_else(|| self.root.join(path)),
        }
    }
}
