//! # Router Configuration
//!
//! Debug overrides for the initial router state, injected when the
//! [`TabbedRouterState`](crate::tabs::TabbedRouterState) is built. Nothing
//! else reads configuration implicitly.
//!
//! ```toml
//! initial_active_tab = "startup"
//! skip_login_route_to_root = true
//!
//! [[override_router_path]]
//! path = "welcome"
//! ```

use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::errors::ConfigError;
use crate::path::{NavigationPath, PathSegment};
use crate::tabs::Tab;

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Tab focused at startup
    #[serde(deserialize_with = "deserialize_tab")]
    pub initial_active_tab: Tab,
    /// Keep the current tab after a successful login
    pub skip_login_route_to_root: bool,
    /// Initial path for every tab, below the root
    pub override_router_path: Option<Vec<PathSegment>>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            initial_active_tab: Tab::More,
            skip_login_route_to_root: false,
            override_router_path: None,
        }
    }
}

impl RouterConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .override_router_path
            .as_ref()
            .is_some_and(|segments| segments.is_empty())
        {
            return Err(ConfigError::EmptyOverridePath);
        }
        Ok(())
    }

    /// Set a single value from `key=value` style input (CLI overrides).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "initial_active_tab" => {
                self.initial_active_tab = Tab::from_name(value).ok_or_else(|| {
                    ConfigError::UnknownTab {
                        value: value.to_string(),
                    }
                })?;
            }
            "skip_login_route_to_root" => {
                self.skip_login_route_to_root =
                    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
            }
            "override_router_path" => {
                let segments: Vec<PathSegment> = value
                    .split('/')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(PathSegment::new)
                    .collect();
                if segments.is_empty() {
                    return Err(ConfigError::EmptyOverridePath);
                }
                self.override_router_path = Some(segments);
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Path every tab starts at.
    pub fn initial_path(&self) -> NavigationPath {
        match &self.override_router_path {
            Some(segments) => NavigationPath::new(segments.iter().cloned()),
            None => NavigationPath::root(),
        }
    }
}

fn deserialize_tab<'de, D>(deserializer: D) -> Result<Tab, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Tab::from_name(&name)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown tab '{name}'")))
}
