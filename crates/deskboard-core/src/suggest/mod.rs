//! Heuristic suggestion generators.
//!
//! Keyword and length rules only; the output is deterministic for a given
//! input and never calls out to a service.

mod note;
mod task;

pub use note::{suggest_for_note, summarize_note};
pub use task::{BUSY_THRESHOLD, suggest_for_task};
