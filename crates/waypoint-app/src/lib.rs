//! # Waypoint App - Headless Navigation Core
//!
//! Declarative route resolution and navigation stack reconciliation for the
//! Waypoint client shell.
//!
//! ## Purpose
//!
//! The shell describes *where* the user is as data (a [`NavigationPath`] per
//! tab) and this crate derives *what* the host navigator should show:
//! - resolve a path against a tree of route resolvers into a stack of
//!   [`ScreenDescriptor`]s
//! - reduce router [`Action`]s into new per-tab histories
//! - reconcile old and new paths into one host [`Directive`]
//!
//! ## Architecture
//!
//! ```text
//! Action ──► TabbedRouterState::reduce ──► NavigationPath (per tab)
//!                                               │
//!                       RouteResolver tree ──► resolve_path
//!                                               │
//!                                          plan_directive ──► HostNavigator
//! ```
//!
//! ## Constraints
//!
//! - **MUST NOT**: depend on a UI toolkit; hosts implement [`HostNavigator`]
//! - **MUST NOT**: read configuration implicitly; [`RouterConfig`] is injected
//! - Resolution and reduction are pure functions of their inputs
//!
//! ## What Belongs Here
//!
//! - Path and screen descriptor types
//! - The resolver protocol and the application route set
//! - Router reducers and the reconciliation planner
//! - An in-memory host for tests and replay tooling

pub mod action;
pub mod config;
pub mod errors;
pub mod host;
pub mod path;
pub mod reconcile;
pub mod resolve;
pub mod resolver;
pub mod router;
pub mod routes;
pub mod screen;
pub mod script;
pub mod shell;
pub mod tabs;

pub use action::Action;
pub use config::RouterConfig;
pub use errors::{ConfigError, ScriptError};
pub use host::{HostOp, MemoryNavigator};
pub use path::{NavigationPath, ParamValue, Params, PathSegment, ROOT_SEGMENT};
pub use reconcile::{plan_directive, Directive, HostNavigator, Reconciler};
pub use resolve::{resolve_path, Resolution, MAX_RESOLUTION_DEPTH};
pub use resolver::{ResolverResult, RouteConstructor, RouteResolver, RouteTable};
pub use router::{RouterState, MAX_HISTORY};
pub use routes::{global_routes, AppRoute, ShellState};
pub use screen::{SceneConfig, ScreenDescriptor, ScreenId, StateProjection};
pub use script::ActionScript;
pub use shell::{Shell, Transition};
pub use tabs::{Tab, TabbedRouterState};
