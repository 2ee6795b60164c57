//! # Path-to-Stack Resolution
//!
//! Walks a [`NavigationPath`] through the [`RouteResolver`] chain and
//! produces the declarative stack: one [`ScreenDescriptor`] per resolved
//! level, root first.
//!
//! ```text
//! root resolver ──▶ descriptor₀ ─┬─ continuation ──────────────▶ resolver₁
//!                                └─ sub-routes ∪ global routes ─▶ resolver₁ (by next id)
//! ```
//!
//! Resolution is a pure function of `(state, root, globals, path)`. An
//! unknown segment is a terminal leaf, never an error.

use crate::path::{NavigationPath, PathSegment};
use crate::resolver::{ResolverResult, RouteResolver, RouteTable};
use crate::screen::{ScreenDescriptor, ScreenId};

/// Upper bound on resolved levels.
///
/// Resolvers may continue past the end of the path (e.g. to a default child
/// screen); this bounds a continuation chain that never terminates.
pub const MAX_RESOLUTION_DEPTH: usize = 64;

/// The declarative stack for one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Last descriptor resolved
    pub top: ScreenDescriptor,
    /// All descriptors, root first
    pub stack: Vec<ScreenDescriptor>,
}

impl Resolution {
    /// Depth of the declarative stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True if every segment of `path` produced a descriptor.
    ///
    /// A false result means resolution stopped at an unknown segment; callers
    /// may use this as a redirect signal.
    pub fn covers(&self, path: &NavigationPath) -> bool {
        self.stack.len() >= path.len()
    }
}

enum Step<R> {
    Resolver(R),
    Inline(ScreenDescriptor),
}

/// Resolve `path` into its declarative stack.
pub fn resolve_path<S, R>(
    state: &S,
    root: &R,
    globals: &RouteTable<R>,
    path: &NavigationPath,
) -> Resolution
where
    R: RouteResolver<S>,
{
    let empty = PathSegment::default();
    let segments = path.segments();

    let mut stack: Vec<ScreenDescriptor> = Vec::with_capacity(path.len());
    let mut active = Some(Step::Resolver(root.clone()));
    // The root counts as implicitly selected, so it may omit its identity.
    let mut implicit: Option<ScreenId> = Some(root.screen_id());
    let mut index = 0;

    while let Some(step) = active.take() {
        if stack.len() >= MAX_RESOLUTION_DEPTH {
            tracing::warn!(
                path = %path,
                depth = stack.len(),
                "Resolver chain exceeded maximum depth; truncating"
            );
            break;
        }

        let current = segments.get(index).unwrap_or(&empty);
        let next = segments.get(index + 1).unwrap_or(&empty);

        let result = match step {
            Step::Resolver(resolver) => resolver.resolve(state, current, next, path),
            Step::Inline(screen) => ResolverResult::leaf(screen),
        };

        let mut top = result.top;
        top.up_link = current.up_link().map(str::to_owned);
        top.up_title = current.up_title().map(str::to_owned);
        if top.screen.is_none() {
            top.screen = implicit.take();
        }
        implicit = None;
        stack.push(top);

        active = match result.next {
            Some(resolver) => Some(Step::Resolver(resolver)),
            None if next.is_empty() => None,
            None => match result.sub_routes.lookup(globals, next) {
                Some(resolver) => {
                    implicit = Some(resolver.screen_id());
                    Some(Step::Resolver(resolver))
                }
                None => next.inline_screen().cloned().map(Step::Inline),
            },
        };

        index += 1;
    }

    tracing::debug!(
        path = %path,
        segments = path.len(),
        depth = stack.len(),
        unresolved = segments.len().saturating_sub(index),
        "Resolved navigation path"
    );

    // The root resolver always runs, so the stack is never empty.
    let top = stack.last().cloned().unwrap_or_default();
    Resolution { top, stack }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::SceneConfig;

    const HOME: ScreenId = ScreenId::from_static("home");
    const LIST: ScreenId = ScreenId::from_static("list");
    const ITEM: ScreenId = ScreenId::from_static("item");
    const HELP: ScreenId = ScreenId::from_static("help");
    const WIZARD: ScreenId = ScreenId::from_static("wizard");

    #[derive(Debug, Default)]
    struct Counter {
        items: i64,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TestRoute {
        Home,
        List,
        Item { id: i64 },
        Help,
        Anonymous,
        Wizard { step: u8 },
        Forever,
    }

    impl RouteResolver<Counter> for TestRoute {
        fn screen_id(&self) -> ScreenId {
            match self {
                Self::Home => HOME,
                Self::List => LIST,
                Self::Item { .. } => ITEM,
                Self::Help => HELP,
                Self::Anonymous => ScreenId::from_static("anonymous"),
                Self::Wizard { .. } | Self::Forever => WIZARD,
            }
        }

        fn resolve(
            &self,
            state: &Counter,
            _current: &PathSegment,
            next: &PathSegment,
            _path: &NavigationPath,
        ) -> ResolverResult<Self> {
            match self {
                Self::Home => ResolverResult::leaf(ScreenDescriptor::new(HOME, "Home"))
                    .with_sub_routes(
                        RouteTable::new()
                            .route("list", |_| Some(Self::List))
                            .route("anonymous", |_| Some(Self::Anonymous))
                            .route("wizard", |_| Some(Self::Wizard { step: 1 }))
                            .route("forever", |_| Some(Self::Forever)),
                    ),
                Self::List => ResolverResult::leaf(
                    ScreenDescriptor::new(LIST, "List").with_prop("count", state.items),
                )
                .with_sub_routes(
                    RouteTable::new().route("item", |seg| {
                        seg.int_param("id").map(|id| Self::Item { id })
                    }),
                ),
                Self::Item { id } => {
                    ResolverResult::leaf(ScreenDescriptor::new(ITEM, format!("Item {id}")))
                }
                Self::Help => ResolverResult::leaf(ScreenDescriptor::new(HELP, "Help")),
                Self::Anonymous => {
                    ResolverResult::leaf(ScreenDescriptor::anonymous().hiding_chrome())
                }
                Self::Wizard { step } => {
                    let top = ScreenDescriptor::new(WIZARD, format!("Step {step}"));
                    if *step < 3 && next.is_empty() {
                        ResolverResult::leaf(top).then(Self::Wizard { step: step + 1 })
                    } else {
                        ResolverResult::leaf(top)
                    }
                }
                Self::Forever => ResolverResult::leaf(ScreenDescriptor::new(WIZARD, "Again"))
                    .then(Self::Forever),
            }
        }
    }

    fn globals() -> RouteTable<TestRoute> {
        RouteTable::new().route("help", |_| Some(TestRoute::Help))
    }

    fn resolve(path: &NavigationPath) -> Resolution {
        resolve_path(&Counter { items: 3 }, &TestRoute::Home, &globals(), path)
    }

    fn screens(resolution: &Resolution) -> Vec<Option<ScreenId>> {
        resolution.stack.iter().map(|d| d.screen.clone()).collect()
    }

    #[test]
    fn test_root_only() {
        let res = resolve(&NavigationPath::root());
        assert_eq!(res.depth(), 1);
        assert_eq!(res.top.screen, Some(HOME));
    }

    #[test]
    fn test_sub_route_chain() {
        let path = NavigationPath::new([
            PathSegment::new("list"),
            PathSegment::new("item").with_param("id", 42),
        ]);
        let res = resolve(&path);
        assert_eq!(screens(&res), vec![Some(HOME), Some(LIST), Some(ITEM)]);
        assert_eq!(res.top.title.as_deref(), Some("Item 42"));
        assert!(res.covers(&path));
    }

    #[test]
    fn test_state_flows_into_props() {
        let res = resolve(&NavigationPath::from_ids(["list"]));
        assert_eq!(res.top.props.get("count").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn test_unknown_segment_is_terminal_leaf() {
        let path = NavigationPath::from_ids(["list", "nope", "item"]);
        let res = resolve(&path);
        assert_eq!(screens(&res), vec![Some(HOME), Some(LIST)]);
        assert!(!res.covers(&path));
    }

    #[test]
    fn test_rejected_params_are_terminal_leaf() {
        let path = NavigationPath::new([
            PathSegment::new("list"),
            PathSegment::new("item").with_param("id", "not-a-number"),
        ]);
        let res = resolve(&path);
        assert_eq!(res.top.screen, Some(LIST));
    }

    #[test]
    fn test_global_routes_apply_everywhere() {
        let res = resolve(&NavigationPath::from_ids(["list", "help"]));
        assert_eq!(screens(&res), vec![Some(HOME), Some(LIST), Some(HELP)]);
    }

    #[test]
    fn test_identity_backfilled_from_table() {
        let res = resolve(&NavigationPath::from_ids(["anonymous"]));
        assert_eq!(res.top.screen, Some(ScreenId::from_static("anonymous")));
        assert!(res.top.hide_chrome);
    }

    #[test]
    fn test_anonymous_root_takes_its_own_identity() {
        let res = resolve_path(
            &Counter::default(),
            &TestRoute::Anonymous,
            &globals(),
            &NavigationPath::from_ids(["help"]),
        );
        assert_eq!(
            screens(&res),
            vec![Some(ScreenId::from_static("anonymous")), Some(HELP)]
        );
    }

    #[test]
    fn test_up_link_copied_from_current_segment() {
        let path = NavigationPath::new([
            PathSegment::new("list").with_up_link("root", "Home"),
        ]);
        let res = resolve(&path);
        assert_eq!(res.top.up_link.as_deref(), Some("root"));
        assert_eq!(res.top.up_title.as_deref(), Some("Home"));
        assert_eq!(res.stack[0].up_link, None);
    }

    #[test]
    fn test_continuation_runs_past_path_end() {
        let res = resolve(&NavigationPath::from_ids(["wizard"]));
        let titles: Vec<_> = res.stack.iter().map(|d| d.title.clone().unwrap()).collect();
        assert_eq!(titles, vec!["Home", "Step 1", "Step 2", "Step 3"]);
    }

    #[test]
    fn test_runaway_continuation_is_bounded() {
        let res = resolve(&NavigationPath::from_ids(["forever"]));
        assert_eq!(res.depth(), MAX_RESOLUTION_DEPTH);
    }

    #[test]
    fn test_inline_segment_resolves_without_table_entry() {
        let inline = ScreenDescriptor::new(ScreenId::from_static("paper-key"), "Paper key")
            .with_scene(SceneConfig::FloatFromBottom);
        let path = NavigationPath::new([
            PathSegment::new("list"),
            PathSegment::inline("", inline.clone()),
        ]);
        let res = resolve(&path);
        assert_eq!(res.depth(), 3);
        assert_eq!(res.top, inline);
    }

    #[test]
    fn test_deterministic() {
        let path = NavigationPath::new([
            PathSegment::new("list"),
            PathSegment::new("item").with_param("id", 1),
        ]);
        assert_eq!(resolve(&path), resolve(&path));
    }
}
