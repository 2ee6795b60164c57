//! Action scripts.
//!
//! A script is a JSON list of actions, either bare or wrapped with an
//! initial session state:
//!
//! ```json
//! { "state": { "logged_in": false },
//!   "actions": [ { "type": "SWITCH_TAB", "payload": "startup" },
//!                { "type": "ROUTE_APPEND", "payload": { "path": "welcome" } } ] }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::action::Action;
use crate::errors::ScriptError;
use crate::reconcile::HostNavigator;
use crate::routes::ShellState;
use crate::shell::{Shell, Transition};

#[derive(Deserialize)]
#[serde(untagged)]
enum ScriptDocument {
    Bare(Vec<Action>),
    Wrapped {
        #[serde(default)]
        state: ShellState,
        actions: Vec<Action>,
    },
}

/// Sequence of actions with the session state they start from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionScript {
    /// Session state before the first action
    pub state: ShellState,
    /// Actions in dispatch order
    pub actions: Vec<Action>,
}

impl ActionScript {
    /// Parse a JSON script.
    pub fn from_json_str(source: &str) -> Result<Self, ScriptError> {
        let script = match serde_json::from_str(source)? {
            ScriptDocument::Bare(actions) => Self {
                state: ShellState::default(),
                actions,
            },
            ScriptDocument::Wrapped { state, actions } => Self { state, actions },
        };
        Ok(script)
    }

    /// Load a JSON script from disk.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    /// Dispatch every action in order.
    pub fn run<H: HostNavigator>(&self, shell: &mut Shell<H>) -> Vec<Transition> {
        self.actions.iter().map(|action| shell.dispatch(action)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouterConfig;
    use crate::tabs::Tab;

    #[test]
    fn test_bare_list() {
        let script = ActionScript::from_json_str(
            r#"[{"type": "SWITCH_TAB", "payload": "chat"}, {"type": "NAVIGATE_UP"}]"#,
        )
        .unwrap();
        assert_eq!(script.state, ShellState::default());
        assert_eq!(script.actions, vec![Action::SwitchTab(Tab::Chat), Action::NavigateUp]);
    }

    #[test]
    fn test_wrapped_with_state() {
        let script = ActionScript::from_json_str(
            r#"{"state": {"logged_in": true, "username": "max"},
                "actions": [{"type": "SOMETHING_ELSE"}]}"#,
        )
        .unwrap();
        assert!(script.state.logged_in);
        assert_eq!(script.actions, vec![Action::Unrecognized]);
    }

    #[test]
    fn test_malformed_rejected() {
        let err = ActionScript::from_json_str(r#"{"steps": []}"#).unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn test_run_dispatches_in_order() {
        let script = ActionScript::from_json_str(
            r#"[{"type": "SWITCH_TAB", "payload": "startup"},
                {"type": "ROUTE_APPEND", "payload": {"path": "welcome"}},
                {"type": "ROUTE_APPEND", "payload": {"path": "signup"}}]"#,
        )
        .unwrap();
        let mut shell = Shell::new(&RouterConfig::default(), script.state.clone());
        let transitions = script.run(&mut shell);
        assert_eq!(transitions.len(), 3);
        assert!(transitions.iter().skip(1).all(|t| t.tab == Tab::Startup));
        assert_eq!(shell.host(Tab::Startup).depth(), 3);
    }
}
