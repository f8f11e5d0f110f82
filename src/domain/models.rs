use crate::domain::constants::{
    DEFAULT_DOCS_DIR, DEFAULT_EXTENSION, DEFAULT_INDEX_FILE, DEFAULT_NOISE_FILE,
    DEFAULT_NOISE_ROOTS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(thiserror::Error, Debug)]
pub enum DocsError {
    #[error("{0}/ directory not found")]
    DocsDirMissing(String),
    #[error("config file not found: {0}")]
    ConfigMissing(String),
    #[error("invalid config {path}: {reason}")]
    ConfigInvalid { path: String, reason: String },
}

fn default_docs_dir() -> String {
    DEFAULT_DOCS_DIR.to_string()
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_noise_file() -> String {
    DEFAULT_NOISE_FILE.to_string()
}

fn default_noise_roots() -> Vec<String> {
    DEFAULT_NOISE_ROOTS.iter().map(|s| s.to_string()).collect()
}

/// Contents of `docgate.toml`. Every key is optional.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
    #[serde(default = "default_index_file")]
    pub index_file: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_noise_roots")]
    pub noise_roots: Vec<String>,
    #[serde(default = "default_noise_file")]
    pub noise_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            index_file: default_index_file(),
            extension: default_extension(),
            noise_roots: default_noise_roots(),
            noise_file: default_noise_file(),
        }
    }
}

impl Settings {
    /// Prefix that marks a link as relative to the repository root rather
    /// than the referencing document.
    pub fn docs_prefix(&self) -> String {
        format!("{}/", self.docs_dir.trim_end_matches('/'))
    }
}

/// Resolved locations for one run.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub settings: Settings,
}

impl Workspace {
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(&self.settings.docs_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.docs_dir().join(&self.settings.index_file)
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    /// Path relative to the repository root, always `/`-separated.
    pub rel_path: String,
    pub text: String,
}

/// Recognized header fields; a missing key means the field is absent.
pub type MetadataFields = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub path: String,
    pub message: String,
}

impl Problem {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub struct CheckReport {
    pub problems: Vec<Problem>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexRow {
    pub no: usize,
    pub path: String,
    pub status: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Serialize)]
pub struct IndexReport {
    pub output: Option<String>,
    pub rows: Vec<IndexRow>,
}
