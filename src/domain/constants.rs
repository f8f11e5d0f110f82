/// Header presence check only looks this far into a document.
pub const HEADER_WINDOW_CHARS: usize = 800;

/// Field extraction window; wider than the presence check.
pub const FIELD_WINDOW_CHARS: usize = 1200;

/// The index generator reads `Status:` from this many leading lines.
pub const INDEX_STATUS_LINES: usize = 5;
pub const INDEX_SUMMARY_LINES: usize = 8;

pub const FIELD_STATUS: &str = "Status";
pub const FIELD_SUMMARY: &str = "Summary";
pub const FIELD_REPLACED_BY: &str = "Replaced-by";
pub const RECOGNIZED_FIELDS: [&str; 3] = [FIELD_STATUS, FIELD_SUMMARY, FIELD_REPLACED_BY];

pub const STATUS_SUPERSEDED: &str = "Superseded";

pub const DEFAULT_DOCS_DIR: &str = "docs";
pub const DEFAULT_INDEX_FILE: &str = "DOCS_INDEX.md";
pub const DEFAULT_EXTENSION: &str = "md";
pub const DEFAULT_NOISE_FILE: &str = ".DS_Store";
pub const DEFAULT_NOISE_ROOTS: [&str; 2] = ["docs", ".github"];

pub const CONFIG_FILE_NAME: &str = "docgate.toml";
pub const LOG_ENV: &str = "DOCGATE_LOG";
