//! Core types for the patch module.

use boardsync_path::{format_path, Path};
use boardsync_value::{canonical, Value};
use thiserror::Error;

/// A single edit operation.
///
/// Paths are relative to the diffed root. `Remove` carries no value;
/// `Replace` and `Add` install the value at the path.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Add { path: Path, value: Value },
}

impl Op {
    /// Returns the operation name string.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Add { .. } => "add",
        }
    }

    /// Returns the path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Remove { path } => path,
            Op::Replace { path, .. } => path,
            Op::Add { path, .. } => path,
        }
    }

    /// Returns the value installed by the operation, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Op::Remove { .. } => None,
            Op::Replace { value, .. } => Some(value),
            Op::Add { value, .. } => Some(value),
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("diff roots must be two mappings or two sequences")]
    InvalidArgument,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An operation addressed a path that does not exist in the base
    /// value: the operation list and the base are out of sync. The
    /// snapshot of the base is kept for diagnostics; the caller's
    /// recovery is to re-diff from scratch.
    #[error("expected to find path {} in value {}", format_path(.path), canonical(.base))]
    PreconditionViolation { path: Path, base: Value },

    /// The operation path contains a reserved structural identifier.
    #[error("setting of reserved path segments is not supported: {}", format_path(.path))]
    ForbiddenPath { path: Path },
}
