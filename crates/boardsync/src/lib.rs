//! boardsync — structural diff/patch and board reconciliation.
//!
//! A kanban board parsed from markdown is re-parsed from scratch after
//! every edit. Handing the fresh parse straight to the presentation
//! layer would discard the object identity of every lane and card, so
//! instead the fresh value is *reconciled* against the previous one:
//! the [`patch::diff`] engine computes a minimal operation list, and
//! [`patch::diff_apply`] replays it onto the previous value with
//! copy-on-write, leaving every unchanged subtree reference-shared.
//!
//! # Example
//!
//! ```
//! use boardsync::{diff, diff_apply};
//! use boardsync_value::from_json;
//! use serde_json::json;
//!
//! let previous = from_json(json!({"children": [{"title": "Todo"}]}));
//! let next = from_json(json!({"children": [{"title": "Doing"}]}));
//!
//! let ops = diff(&previous, &next)?;
//! let patched = diff_apply(&previous, &ops)?;
//! assert_eq!(patched, next);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod patch;
pub mod reconcile;

pub use patch::{diff, diff_apply, diff_with, DiffError, Op, PatchError};
pub use reconcile::{is_generated_field, reconcile, stringify_for_diff, ReconcileError};
