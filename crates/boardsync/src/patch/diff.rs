//! Structural diff between two board values.

use boardsync_path::{Key, Path};
use boardsync_value::{canonical, classify, Kind, Value};

use super::types::{DiffError, Op};
use super::util::{container_keys, get_key, has_key};

// ── Public API ────────────────────────────────────────────────────────────

/// Compute the operation list that transforms `source` into `target`.
///
/// No paths are skipped and leaves are compared by their canonical
/// string form. See [`diff_with`] for the hook-taking variant.
pub fn diff(source: &Value, target: &Value) -> Result<Vec<Op>, DiffError> {
    diff_with(source, target, |_, _| false, canonical)
}

/// Compute the operation list that transforms `source` into `target`.
///
/// `skip` is consulted for every visited path (with the target value
/// when one exists); a `true` return excludes that path from the diff
/// entirely, so regenerated fields never produce operations.
/// `stringify` decides equality of two leaves that are not trivially
/// equal, and drives the sequence alignment heuristic.
///
/// The returned list is ordered `remove*, replace*, add*`, with the
/// removes reversed from discovery order so that applying them one by
/// one never invalidates a pending sequence index.
///
/// # Errors
///
/// Both roots must be containers of the same kind (two mappings or two
/// sequences); anything else is [`DiffError::InvalidArgument`].
pub fn diff_with<S, F>(
    source: &Value,
    target: &Value,
    skip: S,
    stringify: F,
) -> Result<Vec<Op>, DiffError>
where
    S: Fn(&[Key], Option<&Value>) -> bool,
    F: Fn(&Value) -> String,
{
    if !source.is_diffable() || !target.is_diffable() || classify(source) != classify(target) {
        return Err(DiffError::InvalidArgument);
    }

    let mut buckets = Buckets::default();
    get_diff(source, target, &[], &[], &mut buckets, &skip, &stringify);

    // reverse removes since we want to maintain indexes
    let Buckets {
        mut remove,
        replace,
        add,
    } = buckets;
    remove.reverse();
    remove.extend(replace);
    remove.extend(add);
    Ok(remove)
}

// ── Core recursive differ ─────────────────────────────────────────────────

/// Operations bucketed by kind until the final ordering pass.
#[derive(Default)]
struct Buckets {
    remove: Vec<Op>,
    replace: Vec<Op>,
    add: Vec<Op>,
}

/// Recursive comparison of two containers.
///
/// `base_path` addresses the pair in target coordinates; `removes_path`
/// addresses it in source coordinates. The two only diverge below a
/// left-trimmed sequence: removes are applied (reversed) before any
/// replace, so they must use indices as they are in the source, while
/// replaces and adds run after all removes and use target indices.
fn get_diff<S, F>(
    obj1: &Value,
    obj2: &Value,
    base_path: &[Key],
    removes_path: &[Key],
    out: &mut Buckets,
    skip: &S,
    stringify: &F,
) where
    S: Fn(&[Key], Option<&Value>) -> bool,
    F: Fn(&Value) -> String,
{
    if !obj1.is_diffable() || !obj2.is_diffable() {
        return;
    }

    if trim_from_right(obj1, obj2, stringify) {
        for key in container_keys(obj1) {
            if !has_key(obj2, &key) {
                let path = join(removes_path, key);
                if skip(&path, None) {
                    continue;
                }
                out.remove.push(Op::Remove { path });
            }
        }

        for key in container_keys(obj2) {
            let Some(value2) = get_key(obj2, &key) else {
                continue;
            };
            let path = join(base_path, key.clone());
            let removes = join(removes_path, key.clone());
            push_replaces(
                get_key(obj1, &key),
                value2,
                path,
                removes,
                out,
                skip,
                stringify,
            );
        }
    } else if let (Some(items1), Some(items2)) = (obj1.as_array(), obj2.as_array()) {
        // trim from left: the excess leading elements go away, the rest
        // is compared right-aligned
        let delta = items1.len() - items2.len();

        for i in 0..delta {
            let path = join(removes_path, Key::Index(i));
            if skip(&path, None) {
                continue;
            }
            out.remove.push(Op::Remove { path });
        }

        for i in 0..items2.len() {
            let path = join(base_path, Key::Index(i));
            // nested removes run before the leading removes above, so
            // they address the element by its source index
            let removes = join(removes_path, Key::Index(i + delta));
            push_replaces(
                Some(&items1[i + delta]),
                &items2[i],
                path,
                removes,
                out,
                skip,
                stringify,
            );
        }
    }
}

/// Compare the values at one key and emit the appropriate operation.
fn push_replaces<S, F>(
    value1: Option<&Value>,
    value2: &Value,
    path: Path,
    removes_path: Path,
    out: &mut Buckets,
    skip: &S,
    stringify: &F,
) where
    S: Fn(&[Key], Option<&Value>) -> bool,
    F: Fn(&Value) -> String,
{
    if skip(&path, Some(value2)) {
        return;
    }

    let Some(value1) = value1 else {
        out.add.push(Op::Add {
            path,
            value: value2.clone(),
        });
        return;
    };

    if Value::ptr_eq(value1, value2) {
        return;
    }

    match (classify(value1), classify(value2)) {
        (Kind::Mapping, Kind::Mapping) | (Kind::Sequence, Kind::Sequence) => {
            get_diff(value1, value2, &path, &removes_path, out, skip, stringify);
        }
        (Kind::Leaf, Kind::Leaf) if same_wrapper(value1, value2) => {
            // opaque leaves carry no diffable structure; their string
            // form decides equality
            if stringify(value1) != stringify(value2) {
                out.replace.push(Op::Replace {
                    path,
                    value: value2.clone(),
                });
            }
        }
        _ => {
            out.replace.push(Op::Replace {
                path,
                value: value2.clone(),
            });
        }
    }
}

/// `true` when both values are the same opaque wrapper type.
fn same_wrapper(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Date(_), Value::Date(_)) | (Value::FileRef(_), Value::FileRef(_))
    )
}

/// Decide whether a length difference between two sequences is better
/// explained by elements missing at the back (`true`) or at the front
/// (`false`).
///
/// Only a longer source with a shorter target needs the decision;
/// every other pairing compares index-for-index.
fn trim_from_right<F>(obj1: &Value, obj2: &Value, stringify: &F) -> bool
where
    F: Fn(&Value) -> String,
{
    let (Some(items1), Some(items2)) = (obj1.as_array(), obj2.as_array()) else {
        return true;
    };
    let (len1, len2) = (items1.len(), items2.len());
    if len1 <= len2 {
        return true;
    }
    let delta = len1 - len2;

    let mut left_matches = 0;
    for i in 0..len2 {
        if stringify(&items1[i]) == stringify(&items2[i]) {
            left_matches += 1;
        } else {
            break;
        }
    }

    let mut right_matches = 0;
    for i in (0..len2).rev() {
        if stringify(&items1[i + delta]) == stringify(&items2[i]) {
            right_matches += 1;
        } else {
            break;
        }
    }

    // bias to trim right because it requires less index shifting
    left_matches >= right_matches
}

fn join(base: &[Key], key: Key) -> Path {
    let mut path = base.to_vec();
    path.push(key);
    path
}

// ── Tests ─────────────────────────────────────────────────────────────────
