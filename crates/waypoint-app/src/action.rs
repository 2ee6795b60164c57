//! # Router Actions
//!
//! Actions consumed by the router reducers. The serialized form is the
//! `{ "type": ..., "payload": ... }` shape used by the shell's dispatcher, so
//! actions can be scripted as JSON. Unknown tags deserialize to
//! [`Action::Unrecognized`] and reduce to a no-op.

use serde::{Deserialize, Serialize};

use crate::path::{NavigationPath, PathSegment};
use crate::tabs::Tab;

/// Inbound router action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Focus a tab
    SwitchTab(Tab),
    /// Replace the active tab's path wholesale
    NavigateTo(NavigationPath),
    /// Push one segment onto the active tab's path
    RouteAppend(PathSegment),
    /// Drop the deepest segment of the active tab's path
    NavigateUp,
    /// Restore the active tab's previous path
    NavigateBack,
    /// Login flow completed
    LoginSucceeded,
    /// Logout completed
    LogoutSucceeded,
    /// The service requires a login
    NeedsLogin,
    /// The device requires registration
    NeedsRegistration,
    /// Any tag this router does not know
    #[serde(other)]
    Unrecognized,
}

impl Action {
    /// Action tag, as it appears in the serialized form.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SwitchTab(_) => "SWITCH_TAB",
            Self::NavigateTo(_) => "NAVIGATE_TO",
            Self::RouteAppend(_) => "ROUTE_APPEND",
            Self::NavigateUp => "NAVIGATE_UP",
            Self::NavigateBack => "NAVIGATE_BACK",
            Self::LoginSucceeded => "LOGIN_SUCCEEDED",
            Self::LogoutSucceeded => "LOGOUT_SUCCEEDED",
            Self::NeedsLogin => "NEEDS_LOGIN",
            Self::NeedsRegistration => "NEEDS_REGISTRATION",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// True for actions the tab layer intercepts instead of forwarding to
    /// the active tab.
    pub fn is_global(&self) -> bool {
        matches!(
            self,
            Self::SwitchTab(_)
                | Self::LoginSucceeded
                | Self::LogoutSucceeded
                | Self::NeedsLogin
                | Self::NeedsRegistration
        )
    }

    /// Convenience for `RouteAppend` of a bare identifier.
    pub fn append(path: impl Into<String>) -> Self {
        Self::RouteAppend(PathSegment::new(path))
    }
}
