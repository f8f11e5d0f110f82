use crate::domain::models::{DocsError, Document, Workspace};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// `/`-separated path of `path` relative to `root`.
pub fn rel_display(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Entries below `dir`; walk errors are logged and skipped.
fn walk(dir: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::warn!(%err, "skipping unreadable directory entry");
                None
            }
        })
}

/// Sorted document paths under the docs dir, minus the generated index.
pub fn document_paths(ws: &Workspace) -> anyhow::Result<Vec<PathBuf>> {
    let docs = ws.docs_dir();
    if !docs.is_dir() {
        return Err(DocsError::DocsDirMissing(ws.settings.docs_dir.clone()).into());
    }
    let ext = ws.settings.extension.trim_start_matches('.');
    // symlinked documents count; `is_file` follows the link
    let mut paths: Vec<PathBuf> = walk(&docs)
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().is_some_and(|e| e == ext))
        .filter(|p| p.file_name() != Some(OsStr::new(&ws.settings.index_file)))
        .collect();
    paths.sort();
    tracing::debug!(count = paths.len(), docs = %docs.display(), "scanned documents");
    Ok(paths)
}

/// Reads a document; I/O failures yield empty text. A leading BOM is dropped
/// so a first-line `Status:` still starts its line.
pub fn read_document(root: &Path, path: &Path) -> Document {
    let text = match std::fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            text.strip_prefix('\u{FEFF}').unwrap_or(&text).to_string()
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "unreadable document treated as empty");
            String::new()
        }
    };
    Document {
        path: path.to_path_buf(),
        rel_path: rel_display(root, path),
        text,
    }
}

pub fn load_documents(ws: &Workspace) -> anyhow::Result<Vec<Document>> {
    Ok(document_paths(ws)?
        .iter()
        .map(|p| read_document(&ws.root, p))
        .collect())
}

/// Files named `file_name` anywhere below `dir`, sorted.
pub fn find_named(dir: &Path, file_name: &str) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut found: Vec<PathBuf> = walk(dir)
        .filter(|e| e.file_name() == file_name)
        .map(|e| e.into_path())
        .collect();
    found.sort();
    found
}
