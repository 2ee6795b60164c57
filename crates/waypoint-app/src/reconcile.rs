//! # Stack Reconciliation
//!
//! Maps a change of navigation path onto exactly one directive for the host
//! navigation primitive, whose imperative stack this crate does not own.
//!
//! | old → new                       | directive                         |
//! |---------------------------------|-----------------------------------|
//! | old is a strict prefix of new   | [`Directive::Push`] new top       |
//! | new is a strict prefix of old   | [`Directive::PopTo`] matching entry |
//! | equal                           | [`Directive::Stay`] (re-render stack) |
//! | anything else                   | [`Directive::Reset`] full stack   |
//!
//! Pop-to-match scans the host history from most recent to oldest for an
//! entry with the same screen identity and title. When none exists (the host
//! history diverged from the declarative path) the directive degrades to a
//! full reset.
//!
//! Reconciliation for one state change must be applied before the next one
//! is planned; [`Reconciler`] enforces this by committing the path only
//! after applying the directive.

use crate::path::NavigationPath;
use crate::resolve::{resolve_path, Resolution};
use crate::resolver::{RouteResolver, RouteTable};
use crate::screen::ScreenDescriptor;

/// Imperative stack operations the host navigation primitive provides.
pub trait HostNavigator {
    /// Push one screen with its scene transition.
    fn push_route(&mut self, route: ScreenDescriptor);

    /// Pop back to the entry at `index` (0 = bottom of the stack).
    fn pop_to_route(&mut self, index: usize);

    /// Replace the entire stack without transitions.
    fn reset_route_stack(&mut self, stack: Vec<ScreenDescriptor>);

    /// Re-render every entry in place with freshly resolved descriptors.
    /// No push or pop transition is played.
    fn refresh_route_stack(&mut self, stack: Vec<ScreenDescriptor>);

    /// Entries previously pushed, bottom first.
    fn current_routes(&self) -> &[ScreenDescriptor];
}

/// One host operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Push the new top screen
    Push(ScreenDescriptor),
    /// Pop back to an existing host entry
    PopTo {
        /// Host stack index of the matched entry
        index: usize,
        /// Freshly resolved descriptor for that level
        route: ScreenDescriptor,
    },
    /// Replace the host stack
    Reset(Vec<ScreenDescriptor>),
    /// Path unchanged; re-render the whole stack in place
    Stay(Vec<ScreenDescriptor>),
}

impl Directive {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Push(_) => "push",
            Self::PopTo { .. } => "pop-to",
            Self::Reset(_) => "reset",
            Self::Stay(_) => "stay",
        }
    }

    /// Descriptor that ends up on top of the host stack.
    pub fn top(&self) -> Option<&ScreenDescriptor> {
        match self {
            Self::Push(route) | Self::PopTo { route, .. } => Some(route),
            Self::Reset(stack) | Self::Stay(stack) => stack.last(),
        }
    }

    /// Apply to a host.
    pub fn apply<H: HostNavigator + ?Sized>(self, host: &mut H) {
        match self {
            Self::Push(route) => host.push_route(route),
            Self::PopTo { index, .. } => host.pop_to_route(index),
            Self::Reset(stack) => host.reset_route_stack(stack),
            Self::Stay(stack) => host.refresh_route_stack(stack),
        }
    }
}

/// Decide the directive for moving the host from `old` to `new`.
pub fn plan_directive<S, R>(
    state: &S,
    root: &R,
    globals: &RouteTable<R>,
    old: &NavigationPath,
    new: &NavigationPath,
    host_routes: &[ScreenDescriptor],
) -> Directive
where
    R: RouteResolver<S>,
{
    let Resolution { top, stack } = resolve_path(state, root, globals, new);

    if old.is_prefix_of(new) {
        return Directive::Push(top);
    }

    if new.is_prefix_of(old) {
        return match host_routes.iter().rposition(|entry| entry.matches_route(&top)) {
            Some(index) => Directive::PopTo { index, route: top },
            None => {
                tracing::warn!(
                    from = %old,
                    to = %new,
                    screen = ?top.screen,
                    title = ?top.title,
                    host_depth = host_routes.len(),
                    "No host entry matches pop target; resetting stack"
                );
                Directive::Reset(stack)
            }
        };
    }

    if old == new {
        return Directive::Stay(stack);
    }

    Directive::Reset(stack)
}

/// Drives one host navigator from a sequence of paths.
#[derive(Debug, Clone)]
pub struct Reconciler<R> {
    root: R,
    globals: RouteTable<R>,
    committed: Option<NavigationPath>,
}

impl<R> Reconciler<R> {
    /// Reconciler with nothing mounted yet.
    pub fn new(root: R, globals: RouteTable<R>) -> Self {
        Self {
            root,
            globals,
            committed: None,
        }
    }

    /// Path the host was last brought to.
    pub fn committed(&self) -> Option<&NavigationPath> {
        self.committed.as_ref()
    }

    /// Resolve a path with this reconciler's routes.
    pub fn resolve<S>(&self, state: &S, path: &NavigationPath) -> Resolution
    where
        R: RouteResolver<S>,
    {
        resolve_path(state, &self.root, &self.globals, path)
    }

    /// Bring the host to `next` and commit it as the previous path.
    ///
    /// The first call mounts the full stack as the initial route history.
    pub fn sync<S, H>(&mut self, state: &S, next: &NavigationPath, host: &mut H) -> Directive
    where
        R: RouteResolver<S>,
        H: HostNavigator + ?Sized,
    {
        let directive = match &self.committed {
            Some(old) => plan_directive(
                state,
                &self.root,
                &self.globals,
                old,
                next,
                host.current_routes(),
            ),
            None => Directive::Reset(self.resolve(state, next).stack),
        };

        tracing::info!(
            directive = directive.kind(),
            path = %next,
            screen = ?directive.top().and_then(|top| top.screen.as_ref()),
            "Applying navigation directive"
        );

        directive.clone().apply(host);
        self.committed = Some(next.clone());
        directive
    }
}
