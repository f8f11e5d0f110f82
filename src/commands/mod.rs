//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `check.rs` — `docgate check` (also the default command).
//! - `index.rs` — `docgate index`.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior, exit codes and output schema stable.

pub mod check;
pub mod index;

pub use check::handle_check_command;
pub use index::handle_index_command;
