//! # Application Routes
//!
//! The screen-classes of the client shell as one closed resolver enum.
//! Each tab's navigator is rooted at [`AppRoute::Tab`]; deeper screens are
//! reached through per-screen sub-routes or the [`global_routes`] table.
//!
//! ```text
//! startup ── welcome ── login ── (loginform)
//!         │          └─ signup
//!         ├─ register
//! folders ── folder{name}
//! devices ── device{name}
//! more    ── login / register
//! *       ── profile{username}, about      (global)
//! ```

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::path::{NavigationPath, PathSegment};
use crate::resolver::{ResolverResult, RouteResolver, RouteTable};
use crate::screen::{ScreenDescriptor, ScreenId, StateProjection};
use crate::tabs::Tab;

/// Screen identities.
#[allow(missing_docs)]
pub mod screens {
    use crate::screen::ScreenId;

    pub const STARTUP: ScreenId = ScreenId::from_static("startup");
    pub const FOLDERS: ScreenId = ScreenId::from_static("folders");
    pub const CHAT: ScreenId = ScreenId::from_static("chat");
    pub const PEOPLE: ScreenId = ScreenId::from_static("people");
    pub const DEVICES: ScreenId = ScreenId::from_static("devices");
    pub const MORE: ScreenId = ScreenId::from_static("more");
    pub const WELCOME: ScreenId = ScreenId::from_static("welcome");
    pub const LOGIN: ScreenId = ScreenId::from_static("login");
    pub const LOGIN_FORM: ScreenId = ScreenId::from_static("login-form");
    pub const SIGNUP: ScreenId = ScreenId::from_static("signup");
    pub const REGISTER: ScreenId = ScreenId::from_static("register");
    pub const FOLDER: ScreenId = ScreenId::from_static("folder");
    pub const PROFILE: ScreenId = ScreenId::from_static("profile");
    pub const DEVICE: ScreenId = ScreenId::from_static("device");
    pub const ABOUT: ScreenId = ScreenId::from_static("about");
}

const LOGIN_STATE: StateProjection = StateProjection::from_static("login");
const PROFILE_STATE: StateProjection = StateProjection::from_static("profile");

/// Global state the shell's resolvers read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellState {
    /// A session is established
    pub logged_in: bool,
    /// Current user, once known
    pub username: Option<String>,
    /// Names of provisioned devices
    pub devices: Vec<String>,
}

impl ShellState {
    /// Apply the session-related subset of actions.
    #[must_use]
    pub fn reduce(&self, action: &Action) -> Self {
        match action {
            Action::LoginSucceeded => Self {
                logged_in: true,
                ..self.clone()
            },
            Action::LogoutSucceeded | Action::NeedsLogin | Action::NeedsRegistration => Self {
                logged_in: false,
                username: None,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }
}

/// Routable screen-classes of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// Root of a tab's navigator
    Tab(Tab),
    /// Logged-out landing screen
    Welcome,
    /// Login container; always continues to the form
    Login,
    /// Username / passphrase form
    LoginForm,
    /// Account creation
    Signup,
    /// Device registration choices
    Register,
    /// One shared folder
    Folder { name: String },
    /// A user's profile
    Profile { username: String },
    /// One provisioned device
    Device { name: String },
    /// Version and legal information
    About,
}

impl AppRoute {
    fn folder(segment: &PathSegment) -> Option<Self> {
        let name = segment.str_param("name")?;
        Some(Self::Folder {
            name: name.to_string(),
        })
    }

    fn profile(segment: &PathSegment) -> Option<Self> {
        let username = segment.str_param("username")?;
        Some(Self::Profile {
            username: username.to_string(),
        })
    }

    fn device(segment: &PathSegment) -> Option<Self> {
        let name = segment.str_param("name")?;
        Some(Self::Device {
            name: name.to_string(),
        })
    }

    fn resolve_tab(tab: Tab, state: &ShellState) -> ResolverResult<Self> {
        match tab {
            Tab::Startup => {
                let top = if state.logged_in {
                    ScreenDescriptor::new(screens::STARTUP, tab.title())
                } else {
                    ScreenDescriptor::new(screens::STARTUP, "Welcome").hiding_chrome()
                };
                ResolverResult::leaf(top).with_sub_routes(
                    RouteTable::new()
                        .route("welcome", |_| Some(Self::Welcome))
                        .route("login", |_| Some(Self::Login))
                        .route("register", |_| Some(Self::Register)),
                )
            }
            Tab::Folders => ResolverResult::leaf(ScreenDescriptor::new(screens::FOLDERS, tab.title()))
                .with_sub_routes(RouteTable::new().route("folder", Self::folder)),
            Tab::Chat => ResolverResult::leaf(ScreenDescriptor::new(screens::CHAT, tab.title())),
            Tab::People => {
                let mut top = ScreenDescriptor::new(screens::PEOPLE, tab.title());
                if let Some(username) = &state.username {
                    top = top.with_prop("username", username.as_str());
                }
                ResolverResult::leaf(top)
            }
            Tab::Devices => ResolverResult::leaf(
                ScreenDescriptor::new(screens::DEVICES, tab.title())
                    .with_prop("count", state.devices.len() as i64),
            )
            .with_sub_routes(RouteTable::new().route("device", Self::device)),
            Tab::More => ResolverResult::leaf(ScreenDescriptor::new(screens::MORE, tab.title()))
                .with_sub_routes(
                    RouteTable::new()
                        .route("login", |_| Some(Self::Login))
                        .route("register", |_| Some(Self::Register)),
                ),
        }
    }
}

impl RouteResolver<ShellState> for AppRoute {
    fn screen_id(&self) -> ScreenId {
        match self {
            Self::Tab(Tab::Startup) => screens::STARTUP,
            Self::Tab(Tab::Folders) => screens::FOLDERS,
            Self::Tab(Tab::Chat) => screens::CHAT,
            Self::Tab(Tab::People) => screens::PEOPLE,
            Self::Tab(Tab::Devices) => screens::DEVICES,
            Self::Tab(Tab::More) => screens::MORE,
            Self::Welcome => screens::WELCOME,
            Self::Login => screens::LOGIN,
            Self::LoginForm => screens::LOGIN_FORM,
            Self::Signup => screens::SIGNUP,
            Self::Register => screens::REGISTER,
            Self::Folder { .. } => screens::FOLDER,
            Self::Profile { .. } => screens::PROFILE,
            Self::Device { .. } => screens::DEVICE,
            Self::About => screens::ABOUT,
        }
    }

    fn resolve(
        &self,
        state: &ShellState,
        _current: &PathSegment,
        _next: &PathSegment,
        _path: &NavigationPath,
    ) -> ResolverResult<Self> {
        match self {
            Self::Tab(tab) => Self::resolve_tab(*tab, state),
            // Identity comes from the table entry that selected it.
            Self::Welcome => ResolverResult::leaf(ScreenDescriptor::anonymous().hiding_chrome())
                .with_sub_routes(
                    RouteTable::new()
                        .route("login", |_| Some(Self::Login))
                        .route("signup", |_| Some(Self::Signup)),
                ),
            Self::Login => ResolverResult::leaf(
                ScreenDescriptor::new(screens::LOGIN, "Keybase").with_projection(LOGIN_STATE),
            )
            .then(Self::LoginForm),
            Self::LoginForm => ResolverResult::leaf(
                ScreenDescriptor::new(screens::LOGIN_FORM, "Login").with_projection(LOGIN_STATE),
            ),
            Self::Signup => ResolverResult::leaf(ScreenDescriptor::new(screens::SIGNUP, "Sign up")),
            Self::Register => ResolverResult::leaf(
                ScreenDescriptor::anonymous().with_projection(LOGIN_STATE),
            ),
            Self::Folder { name } => ResolverResult::leaf(
                ScreenDescriptor::new(screens::FOLDER, name.as_str()).with_prop("name", name.as_str()),
            ),
            Self::Profile { username } => ResolverResult::leaf(
                ScreenDescriptor::new(screens::PROFILE, username.as_str())
                    .with_projection(PROFILE_STATE)
                    .with_prop("username", username.as_str()),
            ),
            Self::Device { name } => {
                let known = state.devices.iter().any(|device| device == name);
                ResolverResult::leaf(
                    ScreenDescriptor::new(screens::DEVICE, name.as_str())
                        .with_prop("name", name.as_str())
                        .with_prop("known", known),
                )
            }
            Self::About => ResolverResult::leaf(ScreenDescriptor::new(screens::ABOUT, "About")),
        }
    }
}

/// Routes reachable from every screen.
pub fn global_routes() -> RouteTable<AppRoute> {
    RouteTable::new()
        .route("profile", AppRoute::profile)
        .route("about", |_| Some(AppRoute::About))
}
