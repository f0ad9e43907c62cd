//! Replay an operation list against a base value.

use std::cmp::Ordering;
use std::rc::Rc;

use boardsync_path::{is_forbidden_segment, Key, Path};
use boardsync_value::Value;

use super::types::{Op, PatchError};

/// Apply `ops` to `base`, producing the patched value.
///
/// The base is never mutated: containers along each operation path are
/// shallow-copied on first touch, and every subtree no operation
/// reaches stays reference-shared with the base. Callers holding the
/// base elsewhere observe no change.
///
/// # Errors
///
/// - [`PatchError::InvalidArgument`] if the base is not a container or
///   an operation path is empty.
/// - [`PatchError::PreconditionViolation`] if an operation addresses a
///   path the base does not have (remove/replace of a missing key,
///   descent into a leaf, a sequence index out of range).
/// - [`PatchError::ForbiddenPath`] if any path segment is a reserved
///   structural identifier; checked before the operation touches
///   anything.
pub fn diff_apply(base: &Value, ops: &[Op]) -> Result<Value, PatchError> {
    if !base.is_diffable() {
        return Err(PatchError::InvalidArgument(
            "base value must be a mapping or a sequence",
        ));
    }

    let mut patched = base.clone();
    for op in ops {
        apply_op(&mut patched, op, base)?;
    }
    Ok(patched)
}

fn apply_op(root: &mut Value, op: &Op, base: &Value) -> Result<(), PatchError> {
    let path = op.path();
    let Some((last, parents)) = path.split_last() else {
        return Err(PatchError::InvalidArgument(
            "operation path must not be empty",
        ));
    };

    // screen the whole path, intermediate segments included, before
    // anything is touched
    if path.iter().any(is_forbidden_segment) {
        return Err(PatchError::ForbiddenPath { path: path.clone() });
    }

    let mut parent: &mut Value = root;
    for key in parents {
        parent = descend(parent, key).ok_or_else(|| missing(path, base))?;
    }

    match op {
        Op::Remove { .. } => {
            remove_at(parent, last).ok_or_else(|| missing(path, base))?;
        }
        Op::Replace { value, .. } => {
            replace_at(parent, last, value.clone()).ok_or_else(|| missing(path, base))?;
        }
        Op::Add { value, .. } => {
            add_at(parent, last, value.clone()).ok_or_else(|| missing(path, base))?;
        }
    }
    Ok(())
}

fn missing(path: &Path, base: &Value) -> PatchError {
    PatchError::PreconditionViolation {
        path: path.clone(),
        base: base.clone(),
    }
}

/// Step one segment down, copying the container on first touch.
///
/// A missing intermediate mapping key is created as an empty mapping;
/// anything else that fails to resolve is a stale-path condition the
/// caller reports.
fn descend<'a>(parent: &'a mut Value, key: &Key) -> Option<&'a mut Value> {
    match (parent, key) {
        (Value::Object(map), Key::Prop(name)) => {
            let map = Rc::make_mut(map);
            Some(
                map.entry(name.clone())
                    .or_insert_with(Value::empty_object),
            )
        }
        (Value::Array(items), Key::Index(idx)) => Rc::make_mut(items).get_mut(*idx),
        _ => None,
    }
}

fn remove_at(parent: &mut Value, key: &Key) -> Option<Value> {
    match (parent, key) {
        (Value::Object(map), Key::Prop(name)) => Rc::make_mut(map).shift_remove(name),
        (Value::Array(items), Key::Index(idx)) => {
            let items = Rc::make_mut(items);
            (*idx < items.len()).then(|| items.remove(*idx))
        }
        _ => None,
    }
}

fn replace_at(parent: &mut Value, key: &Key, value: Value) -> Option<Value> {
    match (parent, key) {
        (Value::Object(map), Key::Prop(name)) => {
            let map = Rc::make_mut(map);
            if map.contains_key(name) {
                map.insert(name.clone(), value)
            } else {
                None
            }
        }
        (Value::Array(items), Key::Index(idx)) => Rc::make_mut(items)
            .get_mut(*idx)
            .map(|slot| std::mem::replace(slot, value)),
        _ => None,
    }
}

fn add_at(parent: &mut Value, key: &Key, value: Value) -> Option<()> {
    match (parent, key) {
        (Value::Object(map), Key::Prop(name)) => {
            Rc::make_mut(map).insert(name.clone(), value);
            Some(())
        }
        (Value::Array(items), Key::Index(idx)) => {
            let items = Rc::make_mut(items);
            match (*idx).cmp(&items.len()) {
                Ordering::Less => {
                    items[*idx] = value;
                    Some(())
                }
                Ordering::Equal => {
                    items.push(value);
                    Some(())
                }
                Ordering::Greater => None,
            }
        }
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use boardsync_path::parse_path;
    use boardsync_value::from_json;
    use serde_json::json;

    fn apply(
        base: serde_json::Value,
        ops: Vec<Op>,
    ) -> Result<Value, PatchError> {
        diff_apply(&from_json(base), &ops)
    }

    #[test]
    fn add_to_mapping() {
        let patched = apply(
            json!({"a": 1}),
            vec![Op::Add {
                path: parse_path("b"),
                value: Value::from(2),
            }],
        )
        .unwrap();
        assert_eq!(patched, from_json(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn add_appends_to_sequence() {
        let patched = apply(
            json!([1, 2, 3]),
            vec![Op::Add {
                path: parse_path("3"),
                value: Value::from(4),
            }],
        )
        .unwrap();
        assert_eq!(patched, from_json(json!([1, 2, 3, 4])));
    }

    #[test]
    fn add_at_existing_index_assigns() {
        let patched = apply(
            json!([1, 2]),
            vec![Op::Add {
                path: parse_path("1"),
                value: Value::from(99),
            }],
        )
        .unwrap();
        assert_eq!(patched, from_json(json!([1, 99])));
    }

    #[test]
    fn add_past_the_end_is_a_stale_path() {
        let err = apply(
            json!([1]),
            vec![Op::Add {
                path: parse_path("5"),
                value: Value::from(9),
            }],
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::PreconditionViolation { .. }));
    }

    #[test]
    fn remove_splices_sequence() {
        let patched = apply(
            json!(["a", "b", "c"]),
            vec![Op::Remove {
                path: parse_path("1"),
            }],
        )
        .unwrap();
        assert_eq!(patched, from_json(json!(["a", "c"])));
    }

    #[test]
    fn remove_deletes_mapping_key_preserving_order() {
        let patched = apply(
            json!({"a": 1, "b": 2, "c": 3}),
            vec![Op::Remove {
                path: parse_path("b"),
            }],
        )
        .unwrap();
        let keys: Vec<&String> = patched.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn reversed_removes_do_not_drift() {
        let patched = apply(
            json!(["a", "b", "c", "d"]),
            vec![
                Op::Remove {
                    path: parse_path("2"),
                },
                Op::Remove {
                    path: parse_path("1"),
                },
            ],
        )
        .unwrap();
        assert_eq!(patched, from_json(json!(["a", "d"])));
    }

    #[test]
    fn replace_assigns_existing_key() {
        let patched = apply(
            json!({"a": {"b": 1}}),
            vec![Op::Replace {
                path: parse_path("a/b"),
                value: Value::from(5),
            }],
        )
        .unwrap();
        assert_eq!(patched, from_json(json!({"a": {"b": 5}})));
    }

    #[test]
    fn remove_missing_key_is_a_precondition_violation() {
        let err = apply(
            json!({"a": 1}),
            vec![Op::Remove {
                path: parse_path("z"),
            }],
        )
        .unwrap_err();
        match err {
            PatchError::PreconditionViolation { path, base } => {
                assert_eq!(path, parse_path("z"));
                assert_eq!(base, from_json(json!({"a": 1})));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn replace_missing_key_is_a_precondition_violation() {
        let err = apply(
            json!({"a": 1}),
            vec![Op::Replace {
                path: parse_path("z"),
                value: Value::from(1),
            }],
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::PreconditionViolation { .. }));
    }

    #[test]
    fn add_creates_missing_intermediate_mappings() {
        let patched = apply(
            json!({}),
            vec![Op::Add {
                path: parse_path("a/b"),
                value: Value::from(1),
            }],
        )
        .unwrap();
        assert_eq!(patched, from_json(json!({"a": {"b": 1}})));
    }

    #[test]
    fn descending_into_a_leaf_is_a_precondition_violation() {
        let err = apply(
            json!({"a": 5}),
            vec![Op::Replace {
                path: parse_path("a/b"),
                value: Value::from(1),
            }],
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::PreconditionViolation { .. }));
    }

    #[test]
    fn forbidden_segments_are_rejected() {
        for raw in ["__proto__/x", "a/constructor", "prototype"] {
            let err = apply(
                json!({"a": {}}),
                vec![Op::Add {
                    path: parse_path(raw),
                    value: Value::from(1),
                }],
            )
            .unwrap_err();
            assert!(
                matches!(err, PatchError::ForbiddenPath { .. }),
                "path {raw} was not rejected"
            );
        }
    }

    #[test]
    fn forbidden_path_leaves_the_base_untouched() {
        let base = from_json(json!({"a": {"b": 1}}));
        let before = base.clone();
        let err = diff_apply(
            &base,
            &[
                Op::Replace {
                    path: parse_path("a/b"),
                    value: Value::from(2),
                },
                Op::Add {
                    path: parse_path("__proto__/x"),
                    value: Value::from(1),
                },
            ],
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::ForbiddenPath { .. }));
        assert_eq!(base, before);
        assert!(Value::ptr_eq(&base, &before));
    }

    #[test]
    fn scalar_base_is_rejected() {
        let err = diff_apply(&Value::from(1), &[]).unwrap_err();
        assert!(matches!(err, PatchError::InvalidArgument(_)));
    }

    #[test]
    fn empty_op_path_is_rejected() {
        let err = apply(
            json!({}),
            vec![Op::Remove { path: vec![] }],
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::InvalidArgument(_)));
    }

    #[test]
    fn empty_op_list_shares_the_whole_base() {
        let base = from_json(json!({"a": [1, 2]}));
        let patched = diff_apply(&base, &[]).unwrap();
        assert!(Value::ptr_eq(&base, &patched));
    }
}
