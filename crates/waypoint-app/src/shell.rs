//! # Client Shell
//!
//! Wires the tabbed router, the session state, and one host navigator per
//! tab. Every dispatch reduces both states and reconciles exactly one
//! navigator:
//!
//! - the tab whose history the action replaced, or
//! - the focused tab otherwise (re-rendered in place).
//!
//! Unfocused tabs whose inputs did not change are left untouched; they pick
//! up fresh session state on their next reconciliation.

use std::sync::Arc;

use crate::action::Action;
use crate::config::RouterConfig;
use crate::host::MemoryNavigator;
use crate::reconcile::{Directive, HostNavigator, Reconciler};
use crate::routes::{global_routes, AppRoute, ShellState};
use crate::tabs::{Tab, TabbedRouterState};

/// Directive issued to one tab's navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Tab whose navigator was reconciled
    pub tab: Tab,
    /// Operation applied to it
    pub directive: Directive,
}

#[derive(Debug)]
struct TabNavigator<H> {
    reconciler: Reconciler<AppRoute>,
    host: H,
}

/// Router state plus mounted navigators.
#[derive(Debug)]
pub struct Shell<H = MemoryNavigator> {
    router: TabbedRouterState,
    state: ShellState,
    navigators: Vec<TabNavigator<H>>,
}

impl Shell<MemoryNavigator> {
    /// Shell backed by in-memory navigators.
    pub fn new(config: &RouterConfig, state: ShellState) -> Self {
        Self::with_hosts(config, state, |_| MemoryNavigator::new())
    }
}

impl<H: HostNavigator> Shell<H> {
    /// Build the shell and mount every tab's initial stack.
    pub fn with_hosts(
        config: &RouterConfig,
        state: ShellState,
        mut make_host: impl FnMut(Tab) -> H,
    ) -> Self {
        let router = TabbedRouterState::with_config(config);
        let navigators = Tab::all()
            .iter()
            .map(|&tab| {
                let mut navigator = TabNavigator {
                    reconciler: Reconciler::new(AppRoute::Tab(tab), global_routes()),
                    host: make_host(tab),
                };
                navigator
                    .reconciler
                    .sync(&state, router.tab(tab).path(), &mut navigator.host);
                navigator
            })
            .collect();

        tracing::info!(
            active_tab = %router.active_tab(),
            path = %router.active_path(),
            "Shell mounted"
        );

        Self {
            router,
            state,
            navigators,
        }
    }

    /// Reduce `action` and reconcile the affected navigator.
    pub fn dispatch(&mut self, action: &Action) -> Transition {
        let router = self.router.reduce(action);
        let state = self.state.reduce(action);

        let target = Tab::all()
            .iter()
            .copied()
            .find(|&tab| !Arc::ptr_eq(self.router.tab(tab), router.tab(tab)))
            .unwrap_or_else(|| router.active_tab());

        tracing::debug!(action = action.tag(), tab = %target, "Dispatching");

        self.router = router;
        self.state = state;
        self.reconcile(target)
    }

    /// Replace the session state and re-render the focused tab.
    pub fn set_state(&mut self, state: ShellState) -> Transition {
        self.state = state;
        self.reconcile(self.router.active_tab())
    }

    fn reconcile(&mut self, tab: Tab) -> Transition {
        let navigator = &mut self.navigators[tab.index()];
        let directive =
            navigator
                .reconciler
                .sync(&self.state, self.router.tab(tab).path(), &mut navigator.host);
        Transition { tab, directive }
    }

    /// Router state.
    pub fn router(&self) -> &TabbedRouterState {
        &self.router
    }

    /// Session state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Host navigator of a tab.
    pub fn host(&self, tab: Tab) -> &H {
        &self.navigators[tab.index()].host
    }

    /// Host navigator of the focused tab.
    pub fn active_host(&self) -> &H {
        self.host(self.router.active_tab())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostOp;
    use crate::path::{NavigationPath, PathSegment};
    use crate::resolve::resolve_path;
    use crate::routes::screens;

    fn shell() -> Shell {
        Shell::new(&RouterConfig::default(), ShellState::default())
    }

    #[test]
    fn test_mount_resets_every_tab() {
        let shell = shell();
        for &tab in Tab::all() {
            assert_eq!(shell.host(tab).log(), &[HostOp::Reset { depth: 1 }]);
        }
        assert_eq!(shell.active_host().top().unwrap().screen, Some(screens::MORE));
    }

    #[test]
    fn test_append_pushes_on_active_tab() {
        let mut shell = shell();
        let transition = shell.dispatch(&Action::append("about"));
        assert_eq!(transition.tab, Tab::More);
        assert!(matches!(transition.directive, Directive::Push(_)));
        assert_eq!(shell.active_host().depth(), 2);
        assert_eq!(shell.host(Tab::Chat).depth(), 1);
    }

    #[test]
    fn test_navigate_up_pops() {
        let mut shell = shell();
        shell.dispatch(&Action::SwitchTab(Tab::Folders));
        shell.dispatch(&Action::RouteAppend(
            PathSegment::new("folder").with_param("name", "public"),
        ));
        let transition = shell.dispatch(&Action::NavigateUp);
        assert_eq!(transition.tab, Tab::Folders);
        assert!(matches!(transition.directive, Directive::PopTo { index: 0, .. }));
        assert_eq!(shell.host(Tab::Folders).depth(), 1);
    }

    #[test]
    fn test_needs_login_reconciles_startup_tab() {
        let mut shell = shell();
        shell.dispatch(&Action::SwitchTab(Tab::Startup));
        shell.dispatch(&Action::append("welcome"));
        shell.dispatch(&Action::append("login"));
        assert_eq!(shell.host(Tab::Startup).depth(), 3);
        assert_eq!(
            shell.router().tab(Tab::Startup).path(),
            &NavigationPath::from_ids(["welcome", "login"])
        );

        let transition = shell.dispatch(&Action::NeedsLogin);
        assert_eq!(transition.tab, Tab::Startup);
        assert_eq!(shell.router().active_tab(), Tab::More);
        assert_eq!(shell.host(Tab::Startup).depth(), 1);
    }

    #[test]
    fn test_login_rerenders_primary_tab() {
        let mut shell = shell();
        let transition = shell.dispatch(&Action::LoginSucceeded);
        assert_eq!(transition.tab, Tab::PRIMARY);
        assert!(matches!(transition.directive, Directive::Stay(_)));
        assert!(shell.state().logged_in);
    }

    #[test]
    fn test_set_state_rerenders_in_place() {
        let mut shell = shell();
        shell.dispatch(&Action::SwitchTab(Tab::Devices));
        let transition = shell.set_state(ShellState {
            devices: vec!["laptop".into()],
            ..ShellState::default()
        });
        let top = transition.directive.top().unwrap();
        assert_eq!(top.props.get("count").and_then(|v| v.as_i64()), Some(1));
        assert_eq!(
            shell.host(Tab::Devices).log().last(),
            Some(&HostOp::Refreshed { depth: 1 })
        );
    }

    #[test]
    fn test_state_change_refreshes_lower_entries() {
        let mut shell = shell();
        shell.dispatch(&Action::SwitchTab(Tab::Devices));
        shell.dispatch(&Action::RouteAppend(
            PathSegment::new("device").with_param("name", "laptop"),
        ));
        assert_eq!(shell.host(Tab::Devices).depth(), 2);

        let state = ShellState {
            devices: vec!["laptop".into(), "phone".into()],
            ..ShellState::default()
        };
        let transition = shell.set_state(state.clone());
        assert!(matches!(transition.directive, Directive::Stay(_)));

        let expected = resolve_path(
            &state,
            &AppRoute::Tab(Tab::Devices),
            &global_routes(),
            shell.router().tab(Tab::Devices).path(),
        );
        let host = shell.host(Tab::Devices);
        assert_eq!(host.current_routes(), expected.stack.as_slice());
        assert_eq!(
            host.current_routes()[0].props.get("count").and_then(|v| v.as_i64()),
            Some(2)
        );
        assert_eq!(host.log().last(), Some(&HostOp::Refreshed { depth: 2 }));
    }
}
