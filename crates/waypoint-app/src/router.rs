//! # Single-History Router
//!
//! [`RouterState`] is one independent navigation context: the current
//! [`NavigationPath`] plus a bounded stack of previous paths for "back".
//! It is only ever replaced, never partially mutated.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::action::Action;
use crate::path::NavigationPath;

/// Maximum number of previous paths kept for back navigation.
pub const MAX_HISTORY: usize = 50;

/// One navigation history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterState {
    path: NavigationPath,
    #[serde(default)]
    history: Vec<NavigationPath>,
}

impl RouterState {
    /// Root-only state with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// State starting at `path` with no history.
    pub fn at(path: NavigationPath) -> Self {
        Self {
            path,
            history: Vec::new(),
        }
    }

    /// Current path.
    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Previous paths, oldest first.
    pub fn history(&self) -> &[NavigationPath] {
        &self.history
    }

    /// Check if back navigation is possible.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Compute the state after `action`.
    ///
    /// Returns `None` when the action does not change this history, so
    /// callers can keep sharing the existing value.
    pub fn transition(&self, action: &Action) -> Option<Self> {
        match action {
            Action::NavigateTo(path) => Some(self.advance(path.clone())),
            Action::RouteAppend(segment) => Some(self.advance(self.path.appended(segment.clone()))),
            Action::NavigateUp => self.path.parent().map(|parent| self.advance(parent)),
            Action::NavigateBack => {
                let mut history = self.history.clone();
                let path = history.pop()?;
                Some(Self { path, history })
            }
            Action::NeedsLogin | Action::NeedsRegistration => {
                if self.path.is_root() && self.history.is_empty() {
                    None
                } else {
                    Some(Self::new())
                }
            }
            Action::SwitchTab(_)
            | Action::LoginSucceeded
            | Action::LogoutSucceeded
            | Action::Unrecognized => None,
        }
    }

    /// Reduce by value. Unrecognized actions return an equal state.
    #[must_use]
    pub fn reduce(&self, action: &Action) -> Self {
        self.transition(action).unwrap_or_else(|| self.clone())
    }

    fn advance(&self, path: NavigationPath) -> Self {
        let mut history = self.history.clone();
        history.push(self.path.clone());
        if history.len() > MAX_HISTORY {
            history.remove(0);
        }
        Self { path, history }
    }
}

/// Reduce a shared history, keeping the same allocation when unchanged.
pub fn reduce_shared(state: &Arc<RouterState>, action: &Action) -> Arc<RouterState> {
    match state.transition(action) {
        Some(next) => Arc::new(next),
        None => Arc::clone(state),
    }
}
