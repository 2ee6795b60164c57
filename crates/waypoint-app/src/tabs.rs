//! # Tab-Scoped Router
//!
//! [`TabbedRouterState`] owns one [`RouterState`] per [`Tab`] plus the active
//! tab. Most actions are forwarded to the active tab's history; a few global
//! actions move focus or force-reset the startup tab.
//!
//! Per-tab histories are held behind `Arc` so that a transition shares every
//! history it did not touch with the previous state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::config::RouterConfig;
use crate::path::NavigationPath;
use crate::router::{reduce_shared, RouterState};

/// Tab identifiers, in nav-bar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    /// Login / registration flows
    Startup,
    /// Shared folders
    Folders,
    /// Conversations
    Chat,
    /// People and profiles
    People,
    /// Provisioned devices
    Devices,
    /// Account and everything else
    More,
}

impl Tab {
    /// Number of tabs.
    pub const COUNT: usize = 6;

    /// Tab focused after a successful login.
    pub const PRIMARY: Tab = Tab::Folders;

    /// Get all tabs in order
    pub fn all() -> &'static [Tab; Tab::COUNT] {
        &[
            Tab::Startup,
            Tab::Folders,
            Tab::Chat,
            Tab::People,
            Tab::Devices,
            Tab::More,
        ]
    }

    /// Position in [`Tab::all`].
    pub fn index(self) -> usize {
        match self {
            Tab::Startup => 0,
            Tab::Folders => 1,
            Tab::Chat => 2,
            Tab::People => 3,
            Tab::Devices => 4,
            Tab::More => 5,
        }
    }

    /// Serialized name
    pub fn name(self) -> &'static str {
        match self {
            Tab::Startup => "startup",
            Tab::Folders => "folders",
            Tab::Chat => "chat",
            Tab::People => "people",
            Tab::Devices => "devices",
            Tab::More => "more",
        }
    }

    /// Display title for the nav bar
    pub fn title(self) -> &'static str {
        match self {
            Tab::Startup => "Keybase",
            Tab::Folders => "Folders",
            Tab::Chat => "Chat",
            Tab::People => "People",
            Tab::Devices => "Devices",
            Tab::More => "More",
        }
    }

    /// Parse a tab name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Tab> {
        Tab::all()
            .iter()
            .copied()
            .find(|tab| tab.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-tab navigation histories and the focused tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabbedRouterState {
    tabs: [Arc<RouterState>; Tab::COUNT],
    active_tab: Tab,
    skip_login_route_to_root: bool,
}

impl Default for TabbedRouterState {
    fn default() -> Self {
        Self::with_config(&RouterConfig::default())
    }
}

impl TabbedRouterState {
    /// Initial state for the given configuration.
    ///
    /// Every tab starts with an empty history at the configured initial path
    /// (root-only unless overridden).
    pub fn with_config(config: &RouterConfig) -> Self {
        let initial = Arc::new(RouterState::at(config.initial_path()));
        Self {
            tabs: std::array::from_fn(|_| Arc::clone(&initial)),
            active_tab: config.initial_active_tab,
            skip_login_route_to_root: config.skip_login_route_to_root,
        }
    }

    /// Focused tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// History for a tab.
    pub fn tab(&self, tab: Tab) -> &Arc<RouterState> {
        &self.tabs[tab.index()]
    }

    /// History for the focused tab.
    pub fn active(&self) -> &Arc<RouterState> {
        self.tab(self.active_tab)
    }

    /// Current path of the focused tab.
    pub fn active_path(&self) -> &NavigationPath {
        self.active().path()
    }

    /// Iterate over `(tab, history)` in nav-bar order.
    pub fn iter(&self) -> impl Iterator<Item = (Tab, &Arc<RouterState>)> {
        Tab::all().iter().map(move |&tab| (tab, self.tab(tab)))
    }

    /// Compute the state after `action`.
    #[must_use]
    pub fn reduce(&self, action: &Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::SwitchTab(tab) => next.active_tab = *tab,
            Action::LoginSucceeded => {
                if !self.skip_login_route_to_root {
                    next.active_tab = Tab::PRIMARY;
                }
            }
            Action::LogoutSucceeded => next.active_tab = Tab::Startup,
            Action::NeedsLogin | Action::NeedsRegistration => {
                next.active_tab = Tab::More;
                next.forward(Tab::Startup, action);
            }
            _ => next.forward(self.active_tab, action),
        }

        tracing::debug!(
            action = action.tag(),
            from = %self.active_tab,
            to = %next.active_tab,
            "Tabbed router transition"
        );
        next
    }

    fn forward(&mut self, tab: Tab, action: &Action) {
        let slot = &mut self.tabs[tab.index()];
        *slot = reduce_shared(slot, action);
    }
}
