//! Path utilities for boardsync.
//!
//! A path locates a value inside a nested board structure. Each step is
//! either a mapping property or a sequence index, so steps are a proper
//! sum type rather than stringly-typed keys.
//!
//! # Example
//!
//! ```
//! use boardsync_path::{format_path, parse_path, Key};
//!
//! let path = parse_path("lanes/0/title");
//! assert_eq!(
//!     path,
//!     vec![Key::prop("lanes"), Key::index(0), Key::prop("title")]
//! );
//! assert_eq!(format_path(&path), "/lanes/0/title");
//! ```

pub mod types;
pub use types::{Key, Path};

pub mod util;
pub use util::{
    escape_component, format_path, is_child, is_valid_index, parent, parse_path,
    path_starts_with, unescape_component,
};

pub mod validate;
pub use validate::{is_forbidden_segment, validate_path, ValidationError};
