//! # Navigation Paths
//!
//! A [`NavigationPath`] is the canonical description of "where the app is":
//! an ordered, root-first sequence of [`PathSegment`]s. Paths are values.
//! Navigation never edits a segment in place; it produces a new path with
//! segments appended, replaced, or truncated.
//!
//! ## Invariants
//!
//! - A path is never empty: the sentinel root segment (`"root"`) is always
//!   the first segment. Constructors re-insert it when callers omit it.
//! - Equality is structural: same segments in the same order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::screen::ScreenDescriptor;

/// Identifier of the sentinel root segment.
pub const ROOT_SEGMENT: &str = "root";

// ============================================================================
// Segment Parameters
// ============================================================================

/// A typed parameter value carried by a [`PathSegment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Free-form text
    Text(String),
}

impl ParamValue {
    /// Borrow the value as text, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Parameter bag keyed by name. Ordered so that equality and debug output
/// are deterministic.
pub type Params = BTreeMap<String, ParamValue>;

// ============================================================================
// Path Segment
// ============================================================================

/// One level of navigation intent.
///
/// The `path` identifier is the key used for routing-table lookup. An empty
/// identifier marks the "empty segment" used past the end of a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    #[serde(default)]
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    up_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    up_title: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    params: Params,
    /// Screen supplied directly by the dispatcher instead of a routing table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline: Option<Box<ScreenDescriptor>>,
}

impl PathSegment {
    /// Create a segment with the given routing identifier.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// The sentinel root segment.
    pub fn root() -> Self {
        Self::new(ROOT_SEGMENT)
    }

    /// Create a segment that carries its own screen descriptor.
    ///
    /// Inline segments are resolved without a routing-table entry; the
    /// identifier is optional and only used for display and equality.
    pub fn inline(path: impl Into<String>, screen: ScreenDescriptor) -> Self {
        Self {
            path: path.into(),
            inline: Some(Box::new(screen)),
            ..Self::default()
        }
    }

    /// Attach a parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Attach back-reference metadata for the "up" affordance.
    #[must_use]
    pub fn with_up_link(mut self, link: impl Into<String>, title: impl Into<String>) -> Self {
        self.up_link = Some(link.into());
        self.up_title = Some(title.into());
        self
    }

    /// Routing identifier.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Link target for the "up" affordance.
    pub fn up_link(&self) -> Option<&str> {
        self.up_link.as_deref()
    }

    /// Label for the "up" affordance.
    pub fn up_title(&self) -> Option<&str> {
        self.up_title.as_deref()
    }

    /// Look up a single parameter.
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Look up a text parameter. `None` if missing or of another type.
    pub fn str_param(&self, key: &str) -> Option<&str> {
        self.param(key).and_then(ParamValue::as_str)
    }

    /// Look up an integer parameter. `None` if missing or of another type.
    pub fn int_param(&self, key: &str) -> Option<i64> {
        self.param(key).and_then(ParamValue::as_i64)
    }

    /// Look up a boolean parameter. `None` if missing or of another type.
    pub fn bool_param(&self, key: &str) -> Option<bool> {
        self.param(key).and_then(ParamValue::as_bool)
    }

    /// Inline screen carried by this segment.
    pub fn inline_screen(&self) -> Option<&ScreenDescriptor> {
        self.inline.as_deref()
    }

    /// True for the placeholder segment used past the end of a path.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.inline.is_none()
    }

    /// True for the sentinel root segment.
    pub fn is_root(&self) -> bool {
        self.path == ROOT_SEGMENT
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() && self.inline.is_some() {
            write!(f, "<inline>")
        } else {
            write!(f, "{}", self.path)
        }
    }
}

// ============================================================================
// Navigation Path
// ============================================================================

/// Ordered, root-first sequence of path segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PathSegment>", into = "Vec<PathSegment>")]
pub struct NavigationPath {
    segments: Vec<PathSegment>,
}

impl Default for NavigationPath {
    fn default() -> Self {
        Self::root()
    }
}

impl NavigationPath {
    /// The root-only path.
    pub fn root() -> Self {
        Self {
            segments: vec![PathSegment::root()],
        }
    }

    /// Build a path from segments, inserting the root segment if missing.
    pub fn new(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        let mut segments: Vec<PathSegment> = segments.into_iter().collect();
        if !segments.first().is_some_and(PathSegment::is_root) {
            segments.insert(0, PathSegment::root());
        }
        Self { segments }
    }

    /// Build a path from bare identifiers below the root.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids.into_iter().map(PathSegment::new))
    }

    /// Segments, root first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments, including the root.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if this is the root-only path.
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Deepest segment.
    pub fn last(&self) -> &PathSegment {
        // Non-empty by construction.
        &self.segments[self.segments.len() - 1]
    }

    /// A new path with one segment appended.
    #[must_use]
    pub fn appended(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// The path one level up, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Strict ancestor check: `self` is an order-preserving prefix of
    /// `other` and the two paths differ.
    pub fn is_prefix_of(&self, other: &NavigationPath) -> bool {
        self.len() < other.len() && other.segments[..self.len()] == self.segments[..]
    }
}

impl From<Vec<PathSegment>> for NavigationPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self::new(segments)
    }
}

impl From<NavigationPath> for Vec<PathSegment> {
    fn from(path: NavigationPath) -> Self {
        path.segments
    }
}

impl fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_inserts_root() {
        let path = NavigationPath::from_ids(["folders", "private"]);
        assert_eq!(path.len(), 3);
        assert!(path.segments()[0].is_root());
        assert_eq!(path.last().path(), "private");

        let explicit = NavigationPath::new([PathSegment::root(), PathSegment::new("folders")]);
        assert_eq!(explicit.len(), 2);
    }

    #[test]
    fn test_empty_input_is_root_only() {
        let path = NavigationPath::new(Vec::new());
        assert!(path.is_root());
        assert!(!path.is_empty());
        assert_eq!(path, NavigationPath::root());
    }

    #[test]
    fn test_prefix_is_strict() {
        let a = NavigationPath::from_ids(["a"]);
        let ab = NavigationPath::from_ids(["a", "b"]);
        let c = NavigationPath::from_ids(["c"]);

        assert!(a.is_prefix_of(&ab));
        assert!(!ab.is_prefix_of(&a));
        assert!(!a.is_prefix_of(&a));
        assert!(!c.is_prefix_of(&ab));
        assert!(NavigationPath::root().is_prefix_of(&a));
    }

    #[test]
    fn test_prefix_compares_params() {
        let a1 = NavigationPath::new([PathSegment::new("a").with_param("id", 1)]);
        let a2b = NavigationPath::new([
            PathSegment::new("a").with_param("id", 2),
            PathSegment::new("b"),
        ]);
        assert!(!a1.is_prefix_of(&a2b));
    }

    #[test]
    fn test_parent_stops_at_root() {
        let ab = NavigationPath::from_ids(["a", "b"]);
        let a = ab.parent().unwrap();
        assert_eq!(a, NavigationPath::from_ids(["a"]));
        assert_eq!(a.parent(), Some(NavigationPath::root()));
        assert_eq!(NavigationPath::root().parent(), None);
    }

    #[test]
    fn test_typed_params() {
        let segment = PathSegment::new("device")
            .with_param("name", "laptop")
            .with_param("index", 3)
            .with_param("revoked", false);

        assert_eq!(segment.str_param("name"), Some("laptop"));
        assert_eq!(segment.int_param("index"), Some(3));
        assert_eq!(segment.bool_param("revoked"), Some(false));
        // Wrong type fails soft
        assert_eq!(segment.int_param("name"), None);
        assert_eq!(segment.str_param("missing"), None);
    }

    #[test]
    fn test_display() {
        let path = NavigationPath::from_ids(["people", "profile"]);
        assert_eq!(path.to_string(), "root/people/profile");
    }

    #[test]
    fn test_deserialize_restores_root() {
        let path: NavigationPath = serde_json::from_str(r#"[{"path":"chat"}]"#).unwrap();
        assert_eq!(path, NavigationPath::from_ids(["chat"]));
    }
}
