//! Board value model for boardsync.
//!
//! A board parsed from markdown is held in memory as a tree of
//! [`Value`]s: insertion-ordered mappings, sequences, scalars, and two
//! opaque leaf wrappers (parsed dates and file references) that are
//! compared by their string form rather than recursed into.
//!
//! Containers are reference-counted, so cloning a value is cheap and
//! two values can share unchanged subtrees. [`Value::ptr_eq`] observes
//! that sharing; the patch applier in the `boardsync` crate relies on
//! it to produce identity-stable results.
//!
//! # Example
//!
//! ```
//! use boardsync_value::{classify, from_json, Kind};
//!
//! let board = from_json(serde_json::json!({"children": [], "data": {}}));
//! assert_eq!(classify(&board), Kind::Mapping);
//! ```

pub mod value;
pub use value::{classify, DateValue, FileRef, Kind, Map, Value};

pub mod json;
pub use json::{from_json, to_json};

pub mod stringify;
pub use stringify::canonical;
