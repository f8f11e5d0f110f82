//! Service layer containing the rule engine and side-effect helpers.
//!
//! ## Service map
//! - `header.rs` — lead-window header fields and index descriptions.
//! - `links.rs` — `](target)` extraction, classification, resolution.
//! - `rules.rs` — per-document rules plus repository hygiene rules.
//! - `scan.rs` — docs tree enumeration and lossy document reads.
//! - `vcs.rs` — version-control capability (`git` or nothing).
//! - `index.rs` — docs index rows and Markdown table rendering.
//! - `settings.rs` — optional `docgate.toml` loading.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`scan`, `vcs`).
//! - Keep command handlers thin; delegate to services.

pub mod header;
pub mod index;
pub mod links;
pub mod output;
pub mod rules;
pub mod scan;
pub mod settings;
pub mod vcs;
