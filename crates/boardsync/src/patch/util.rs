//! Keyed access into board values.

use boardsync_path::Key;
use boardsync_value::Value;

/// Get the child of a container addressed by a single key.
///
/// Property keys address mappings, index keys address sequences; any
/// other pairing yields `None`.
pub fn get_key<'a>(value: &'a Value, key: &Key) -> Option<&'a Value> {
    match (value, key) {
        (Value::Object(map), Key::Prop(name)) => map.get(name),
        (Value::Array(items), Key::Index(idx)) => items.get(*idx),
        _ => None,
    }
}

/// `true` if the container has an entry at the key.
pub fn has_key(value: &Value, key: &Key) -> bool {
    get_key(value, key).is_some()
}

/// The keys of a container, in order. Leaves have none.
pub fn container_keys(value: &Value) -> Vec<Key> {
    match value {
        Value::Object(map) => map.keys().map(|k| Key::Prop(k.clone())).collect(),
        Value::Array(items) => (0..items.len()).map(Key::Index).collect(),
        _ => Vec::new(),
    }
}

/// Walk a path from the root of a value.
pub fn get_path<'a>(value: &'a Value, path: &[Key]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = get_key(current, key)?;
    }
    Some(current)
}
