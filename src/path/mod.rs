//! Dot-separated addressing into nested test documents.
//!
//! A path such as `actions.1.iterate.actions.0.print` is parsed once into a
//! sequence of [`PathSegment`]s. Pure base-10 digit runs are array indices, every
//! other segment is a field (or action kind) name.

use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

mod resolver;

pub use resolver::{remove_at, resolve, resolve_mut, update, walk, walk_mut};

/// Reserved path addressing the document root.
///
/// Distinct from the empty string, which callers use for "no path given".
pub const ROOT_PATH: &str = "#";

/// Returns `true` when `raw` is a non-negative base-10 integer.
pub(crate) fn is_index(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// One step of a [`NodePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Index(usize),
    Field(String),
}

impl PathSegment {
    fn parse(raw: &str) -> Self {
        if is_index(raw) {
            // Digit runs too long for usize can never address an element; keep them as names.
            if let Ok(index) = raw.parse::<usize>() {
                return PathSegment::Index(index);
            }
        }
        PathSegment::Field(raw.to_string())
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(index) => Some(*index),
            PathSegment::Field(_) => None,
        }
    }

    pub fn as_field(&self) -> Option<&str> {
        match self {
            PathSegment::Field(name) => Some(name),
            PathSegment::Index(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{}", index),
            PathSegment::Field(name) => write!(f, "{}", name),
        }
    }
}

/// A parsed, document-relative path. The empty path addresses the root value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    /// Parses a dot-separated path. Never fails: segments that cannot address
    /// anything simply fail to resolve later.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self(path.split('.').map(PathSegment::parse).collect())
    }

    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.0.last()
    }

    /// The enclosing path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .split_last()
            .map(|(_, parent)| Self(parent.to_vec()))
    }

    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn child_field(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Field(name.to_string()));
        Self(segments)
    }

    /// The trailing field segment, which names the action kind for action paths.
    pub fn action_kind(&self) -> Option<&str> {
        self.0.iter().rev().find_map(PathSegment::as_field)
    }

    /// Splits a removal address into the containing sequence and the element index.
    ///
    /// Both `actions.<i>` and `actions.<i>.<kind>` name element `<i>` of `actions`.
    pub fn removal_target(&self) -> Option<(&[PathSegment], usize)> {
        match self.0.as_slice() {
            [container @ .., PathSegment::Index(index)] => Some((container, *index)),
            [container @ .., PathSegment::Index(index), PathSegment::Field(_)] => {
                Some((container, *index))
            }
            _ => None,
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("."))
    }
}

impl FromStr for NodePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}
