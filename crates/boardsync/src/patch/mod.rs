//! Structural diff and patch for board values.
//!
//! [`diff`] compares two board values and produces an ordered list of
//! [`Op`]s (`remove`, `replace`, `add`) that transforms the first into
//! the second. [`diff_apply`] replays such a list against a base value,
//! copying only the containers along edited paths so that everything
//! else stays reference-shared with the base.

pub mod types;
pub use types::{DiffError, Op, PatchError};

pub mod diff;
pub use diff::{diff, diff_with};

pub mod apply;
pub use apply::diff_apply;

pub mod util;
pub use util::{container_keys, get_key, get_path, has_key};
