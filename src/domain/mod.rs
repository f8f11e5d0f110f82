//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep document/problem/report structs in one place.
//! - Avoid cyclic imports between the rule engine and the index generator.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — documents, problems, index rows, report/output structs.
//! - `constants.rs` — lead-window sizes, field names, default paths.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
