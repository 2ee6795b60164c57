//! In-memory host navigator.
//!
//! Holds the imperative route stack the way a platform navigator would, and
//! records each operation so callers can assert on host cost.

use crate::reconcile::HostNavigator;
use crate::screen::{SceneConfig, ScreenDescriptor};

/// Operation applied to a [`MemoryNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    /// One route pushed with its transition
    Pushed(SceneConfig),
    /// Popped back to an index, discarding `popped` entries
    PoppedTo {
        /// Index of the new top
        index: usize,
        /// Number of entries removed
        popped: usize,
    },
    /// Whole stack replaced
    Reset {
        /// New depth
        depth: usize,
    },
    /// Every entry re-rendered in place
    Refreshed {
        /// Depth after the refresh
        depth: usize,
    },
}

/// Host navigator backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    routes: Vec<ScreenDescriptor>,
    log: Vec<HostOp>,
}

impl MemoryNavigator {
    /// Empty navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries on the stack.
    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    /// Top entry.
    pub fn top(&self) -> Option<&ScreenDescriptor> {
        self.routes.last()
    }

    /// Operations applied so far, oldest first.
    pub fn log(&self) -> &[HostOp] {
        &self.log
    }

    /// Clear the operation log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl HostNavigator for MemoryNavigator {
    fn push_route(&mut self, route: ScreenDescriptor) {
        self.log.push(HostOp::Pushed(route.scene_or_default()));
        self.routes.push(route);
    }

    fn pop_to_route(&mut self, index: usize) {
        if index >= self.routes.len() {
            tracing::warn!(index, depth = self.routes.len(), "Pop target out of range");
            return;
        }
        let popped = self.routes.len() - index - 1;
        self.routes.truncate(index + 1);
        self.log.push(HostOp::PoppedTo { index, popped });
    }

    fn reset_route_stack(&mut self, stack: Vec<ScreenDescriptor>) {
        self.log.push(HostOp::Reset { depth: stack.len() });
        self.routes = stack;
    }

    fn refresh_route_stack(&mut self, stack: Vec<ScreenDescriptor>) {
        if stack.len() != self.routes.len() {
            tracing::debug!(
                from = self.routes.len(),
                to = stack.len(),
                "Refresh changes host depth"
            );
        }
        self.log.push(HostOp::Refreshed { depth: stack.len() });
        self.routes = stack;
    }

    fn current_routes(&self) -> &[ScreenDescriptor] {
        &self.routes
    }
}
