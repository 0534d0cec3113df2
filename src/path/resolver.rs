use super::{NodePath, PathSegment, ROOT_PATH};
use serde_json::Value;
use tracing::{debug, trace};

/// Moves one segment deeper. Index segments index into arrays; on records they
/// fall back to a field lookup by their text.
fn step<'v>(current: &'v Value, segment: &PathSegment) -> Option<&'v Value> {
    match (current, segment) {
        (Value::Array(items), PathSegment::Index(index)) => items.get(*index),
        (Value::Object(map), PathSegment::Field(name)) => map.get(name),
        (Value::Object(map), PathSegment::Index(index)) => map.get(&index.to_string()),
        _ => None,
    }
}

fn step_mut<'v>(current: &'v mut Value, segment: &PathSegment) -> Option<&'v mut Value> {
    match (current, segment) {
        (Value::Array(items), PathSegment::Index(index)) => items.get_mut(*index),
        (Value::Object(map), PathSegment::Field(name)) => map.get_mut(name),
        (Value::Object(map), PathSegment::Index(index)) => map.get_mut(&index.to_string()),
        _ => None,
    }
}

/// Walks pre-parsed segments from `root`, stopping at the first one that does not resolve.
pub fn walk<'v>(root: &'v Value, segments: &[PathSegment]) -> Option<&'v Value> {
    segments
        .iter()
        .try_fold(root, |current, segment| step(current, segment))
}

pub fn walk_mut<'v>(root: &'v mut Value, segments: &[PathSegment]) -> Option<&'v mut Value> {
    segments
        .iter()
        .try_fold(root, |current, segment| step_mut(current, segment))
}

/// Resolves `path` inside `root`.
///
/// The empty path resolves to nothing and [`ROOT_PATH`] resolves to `root` itself.
/// Out-of-range indices, missing fields and shape mismatches all yield `None`.
pub fn resolve<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return None;
    }
    if path == ROOT_PATH {
        return Some(root);
    }
    walk(root, NodePath::parse(path).segments())
}

pub fn resolve_mut<'v>(root: &'v mut Value, path: &str) -> Option<&'v mut Value> {
    if path.is_empty() {
        return None;
    }
    if path == ROOT_PATH {
        return Some(root);
    }
    walk_mut(root, NodePath::parse(path).segments())
}

/// Writes `value` at `path` in place. Returns whether anything was written.
///
/// [`ROOT_PATH`] merges the fields of an object `value` into the root record.
/// Any other path must already resolve; its value is replaced. Nothing is ever
/// inserted, so a stale path cannot add keys to an action element.
pub fn update(root: &mut Value, path: &str, value: Value) -> bool {
    if path.is_empty() {
        return false;
    }
    if path == ROOT_PATH {
        return merge_root(root, value);
    }

    let path = NodePath::parse(path);
    match walk_mut(root, path.segments()) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => {
            debug!(path = %path, "update target does not resolve");
            false
        }
    }
}

fn merge_root(root: &mut Value, value: Value) -> bool {
    match (root, value) {
        (Value::Object(root), Value::Object(fields)) => {
            for (key, field) in fields {
                root.insert(key, field);
            }
            true
        }
        _ => {
            trace!("root update ignored: root and value must both be records");
            false
        }
    }
}

/// Removes the action element addressed by `path` and returns it.
///
/// Accepts both `…actions.<i>` and `…actions.<i>.<kind>`; the trailing kind is
/// redundant. Everything nested below the removed element goes with it.
pub fn remove_at(root: &mut Value, path: &str) -> Option<Value> {
    if path.is_empty() || path == ROOT_PATH {
        return None;
    }

    let path = NodePath::parse(path);
    let Some((container, index)) = path.removal_target() else {
        debug!(path = %path, "path does not address a sequence element");
        return None;
    };

    match walk_mut(root, container) {
        Some(Value::Array(items)) if index < items.len() => Some(items.remove(index)),
        _ => {
            debug!(path = %path, "removal target does not resolve");
            None
        }
    }
}
