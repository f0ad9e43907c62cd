//! Type definitions for board paths.

use std::fmt;

use crate::util::escape_component;

/// A step in a board path.
///
/// Mapping entries are addressed by property name, sequence elements by
/// integer index. Keeping the two apart lets consumers dispatch on the
/// container kind a step expects instead of re-parsing strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A mapping property name.
    Prop(String),
    /// A sequence index.
    Index(usize),
}

/// A path from the root of a board value to a nested location.
pub type Path = Vec<Key>;

impl Key {
    /// Build a property step.
    pub fn prop(name: impl Into<String>) -> Self {
        Key::Prop(name.into())
    }

    /// Build an index step.
    pub fn index(idx: usize) -> Self {
        Key::Index(idx)
    }

    /// The property name, if this is a property step.
    pub fn as_prop(&self) -> Option<&str> {
        match self {
            Key::Prop(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    /// The sequence index, if this is an index step.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Prop(_) => None,
            Key::Index(idx) => Some(*idx),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Prop(name) => write!(f, "{}", escape_component(name)),
            Key::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Prop(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Prop(name)
    }
}

impl From<usize> for Key {
    fn from(idx: usize) -> Self {
        Key::Index(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_and_index_accessors() {
        let prop = Key::prop("title");
        assert_eq!(prop.as_prop(), Some("title"));
        assert_eq!(prop.as_index(), None);

        let idx = Key::index(3);
        assert_eq!(idx.as_prop(), None);
        assert_eq!(idx.as_index(), Some(3));
    }

    #[test]
    fn display_escapes_property_names() {
        assert_eq!(Key::prop("a/b").to_string(), "a~1b");
        assert_eq!(Key::prop("a~b").to_string(), "a~0b");
        assert_eq!(Key::index(7).to_string(), "7");
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Key::from("x"), Key::prop("x"));
        assert_eq!(Key::from(2usize), Key::index(2));
    }
}
