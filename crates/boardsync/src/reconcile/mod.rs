//! Board reconciliation.
//!
//! Every edit re-parses the markdown into a fresh board value with
//! fresh instance ids, parsed dates, and caches. The presentation
//! layer keys off object identity, so the fresh value is never handed
//! over directly: [`reconcile`] diffs it against the previously held
//! board, ignoring the regenerated fields, and patches the *previous*
//! value, so every lane and card whose content did not change keeps its
//! identity.

use boardsync_path::Key;
use boardsync_value::{canonical, Value};
use thiserror::Error;

use crate::patch::{diff_apply, diff_with, DiffError, PatchError};

/// Fields the parser regenerates on every parse. Diffs on these would
/// be false positives, so they are excluded wholesale.
const GENERATED_FIELDS: &[&str] = &["id", "date", "time", "titleSearch", "file"];

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("diff failed: {0}")]
    Diff(#[from] DiffError),
    #[error("patch failed: {0}")]
    Patch(#[from] PatchError),
}

/// Skip predicate for regenerated fields: matches any path whose final
/// segment is one of the parser-owned property names, at any depth.
pub fn is_generated_field(path: &[Key], _value: Option<&Value>) -> bool {
    matches!(path.last(), Some(Key::Prop(name)) if GENERATED_FIELDS.contains(&name.as_str()))
}

/// Leaf stringifier for board diffs.
///
/// Dates compare by their ISO form and file references by their link
/// form, so re-parsed wrappers holding the same content are equal even
/// though the wrapper instances are new. Everything else uses the
/// canonical form.
pub fn stringify_for_diff(value: &Value) -> String {
    match value {
        Value::Date(date) => date.to_iso_string(),
        Value::FileRef(file) => file.to_link_string(),
        other => canonical(other),
    }
}

/// Merge a freshly parsed board into the previously held one.
///
/// Computes the operation list from `previous` to `next` (with
/// generated fields excluded) and applies it to `previous`. The result
/// carries the content of `next`, but every subtree that did not
/// change, the regenerated fields of otherwise-unchanged entries
/// included, is the previous value's, reference and all.
pub fn reconcile(previous: &Value, next: &Value) -> Result<Value, ReconcileError> {
    let ops = diff_with(previous, next, is_generated_field, stringify_for_diff)?;
    Ok(diff_apply(previous, &ops)?)
}
