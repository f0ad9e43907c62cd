//! Path formatting, parsing, and relationship helpers.

use crate::types::{Key, Path};

/// Unescapes a path component.
///
/// `~1` is replaced with `/` and `~0` is replaced with `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a path component.
///
/// `/` is replaced with `~1` and `~` is replaced with `~0`.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Format a path as a `/`-separated string.
///
/// The root path formats as the empty string. Property names containing
/// `/` or `~` are escaped.
pub fn format_path(path: &[Key]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for key in path {
        out.push('/');
        out.push_str(&key.to_string());
    }
    out
}

/// Parse a `/`-separated string into a path.
///
/// A leading `/` is optional. Components that look like valid sequence
/// indices (digits, no leading zero) parse as [`Key::Index`]; everything
/// else is a property step, with `~0`/`~1` escapes decoded.
pub fn parse_path(raw: &str) -> Path {
    let raw = raw.strip_prefix('/').unwrap_or(raw);
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('/')
        .map(|component| {
            if is_valid_index(component) {
                match component.parse::<usize>() {
                    Ok(idx) => Key::Index(idx),
                    Err(_) => Key::Prop(unescape_component(component)),
                }
            } else {
                Key::Prop(unescape_component(component))
            }
        })
        .collect()
}

/// Check if a string represents a valid non-negative sequence index.
///
/// Multi-digit indices must not have a leading zero.
pub fn is_valid_index(component: &str) -> bool {
    if component.is_empty() {
        return false;
    }
    let bytes = component.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Returns `true` if `path` starts with `prefix` (path == prefix, or
/// path is longer and all prefix steps match).
pub fn path_starts_with(path: &[Key], prefix: &[Key]) -> bool {
    if path.len() < prefix.len() {
        return false;
    }
    path[..prefix.len()] == *prefix
}

/// Check if `parent` path strictly contains the `child` path.
pub fn is_child(parent: &[Key], child: &[Key]) -> bool {
    parent.len() < child.len() && path_starts_with(child, parent)
}

/// Get the parent path of a given path, or `None` for the root.
pub fn parent(path: &[Key]) -> Option<Path> {
    if path.is_empty() {
        return None;
    }
    Some(path[..path.len() - 1].to_vec())
}
