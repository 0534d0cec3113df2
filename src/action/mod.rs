//! Decoding of raw action elements.
//!
//! Every element of an `actions` sequence is a single-key record whose key is the
//! action kind (`print`, `iterate`, ...). Elements are decoded once into an
//! [`Action`] rather than re-sniffing their keys on every access.

use crate::path::is_index;
use itertools::Itertools;
use serde_json::Value;

/// Field holding an ordered action sequence, both on the document root and inside
/// container kinds.
pub const ACTIONS_FIELD: &str = "actions";

/// A decoded action element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action<'a> {
    /// A well-formed element: exactly one key naming its kind.
    Step { kind: &'a str, value: &'a Value },
    /// Anything else: not a record, or a record with zero or several keys.
    Unknown,
}

impl<'a> Action<'a> {
    pub fn decode(raw: &'a Value) -> Self {
        raw.as_object()
            .and_then(|map| map.iter().exactly_one().ok())
            .map_or(Action::Unknown, |(kind, value)| Action::Step {
                kind: kind.as_str(),
                value,
            })
    }

    pub fn kind(&self) -> Option<&'a str> {
        match self {
            Action::Step { kind, .. } => Some(*kind),
            Action::Unknown => None,
        }
    }

    /// The kind's own parameter record.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Action::Step { value, .. } => Some(*value),
            Action::Unknown => None,
        }
    }

    /// The nested action sequence of a container kind.
    pub fn nested_actions(&self) -> Option<&'a [Value]> {
        self.value()?
            .get(ACTIONS_FIELD)?
            .as_array()
            .map(Vec::as_slice)
    }

    pub fn is_container(&self) -> bool {
        self.nested_actions().is_some()
    }
}

/// Returns the kind of a raw action element, or `None` when the element does not
/// have exactly one key.
pub fn extract_action_name(raw: &Value) -> Option<&str> {
    Action::decode(raw).kind()
}

/// Returns the trailing non-index segment of `path`, which names the action kind
/// for paths like `actions.0.print`.
pub fn extract_action_name_from_path(path: &str) -> Option<&str> {
    path.split('.')
        .rev()
        .find(|segment| !segment.is_empty() && !is_index(segment))
}
