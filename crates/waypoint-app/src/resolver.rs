//! # Route Resolver Protocol
//!
//! Each routable screen-class is one variant of an application-defined
//! closed enum implementing [`RouteResolver`]. Resolution dispatches on the
//! variant instead of on functions discovered by convention.
//!
//! A resolver turns "the rest of the path" into a [`ScreenDescriptor`] plus
//! either a continuation (another resolver value, closed over whatever
//! context it carries) or a [`RouteTable`] of child routes.
//!
//! Routing tables map a segment identifier to a [`RouteConstructor`]: a
//! plain function that destructures the segment's parameters into a typed
//! resolver variant. A constructor returning `None` rejects the segment and
//! resolution stops at the previous screen.

use std::collections::BTreeMap;
use std::fmt;

use crate::path::{NavigationPath, PathSegment};
use crate::screen::{ScreenDescriptor, ScreenId};

/// Builds a resolver from the segment that selected it.
pub type RouteConstructor<R> = fn(&PathSegment) -> Option<R>;

/// Per-screen-class routing contract.
///
/// `S` is the global application state handed to every resolver. Resolvers
/// must be pure: identical inputs yield structurally identical results.
pub trait RouteResolver<S>: Clone + fmt::Debug + Sized {
    /// Identity of the screen-class, used to backfill descriptors that omit
    /// it when the class was selected through a routing table.
    fn screen_id(&self) -> ScreenId;

    /// Resolve the current segment.
    fn resolve(
        &self,
        state: &S,
        current: &PathSegment,
        next: &PathSegment,
        path: &NavigationPath,
    ) -> ResolverResult<Self>;
}

/// Output of one resolver invocation.
#[derive(Debug, Clone)]
pub struct ResolverResult<R> {
    /// Descriptor for the current segment
    pub top: ScreenDescriptor,
    /// Resolver for the next segment. Takes precedence over `sub_routes`.
    pub next: Option<R>,
    /// Child routes consulted when there is no continuation
    pub sub_routes: RouteTable<R>,
}

impl<R> ResolverResult<R> {
    /// A result with no continuation and no child routes.
    ///
    /// Global routes still apply to the next segment.
    pub fn leaf(top: ScreenDescriptor) -> Self {
        Self {
            top,
            next: None,
            sub_routes: RouteTable::new(),
        }
    }

    /// Continue resolution with `next`.
    #[must_use]
    pub fn then(mut self, next: R) -> Self {
        self.next = Some(next);
        self
    }

    /// Offer child routes for the next segment.
    #[must_use]
    pub fn with_sub_routes(mut self, sub_routes: RouteTable<R>) -> Self {
        self.sub_routes = sub_routes;
        self
    }
}

/// Mapping from segment identifier to resolver constructor.
pub struct RouteTable<R> {
    routes: BTreeMap<String, RouteConstructor<R>>,
}

impl<R> RouteTable<R> {
    /// Empty table.
    pub fn new() -> Self {
        Self {
            routes: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, constructor: RouteConstructor<R>) -> Self {
        self.insert(path, constructor);
        self
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, path: impl Into<String>, constructor: RouteConstructor<R>) {
        self.routes.insert(path.into(), constructor);
    }

    /// Entry for an identifier.
    pub fn get(&self, path: &str) -> Option<RouteConstructor<R>> {
        self.routes.get(path).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered identifiers, in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Two-level lookup: this table first, `fallback` second.
    ///
    /// Returns the constructed resolver, or `None` when neither table has an
    /// entry or the selected constructor rejects the segment.
    pub fn lookup(&self, fallback: &RouteTable<R>, segment: &PathSegment) -> Option<R> {
        let constructor = self
            .get(segment.path())
            .or_else(|| fallback.get(segment.path()))?;
        constructor(segment)
    }
}

impl<R> Default for RouteTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RouteTable<R> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
        }
    }
}

impl<R> fmt::Debug for RouteTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.routes.keys()).finish()
    }
}
