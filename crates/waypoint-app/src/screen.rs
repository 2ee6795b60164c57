//! # Screen Descriptors
//!
//! A [`ScreenDescriptor`] is the output of resolving one path segment: which
//! screen to mount, how to title it, and what to hand it. Descriptors are
//! rebuilt on every resolution pass and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::path::{ParamValue, Params};

/// Identity of a screen type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenId(Cow<'static, str>);

impl ScreenId {
    /// Screen id from a static name, usable in `const` tables.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Screen id from an owned name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Name of the screen type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Names the slice of global state a screen is connected to.
///
/// Absent projection means the screen receives the whole state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateProjection(Cow<'static, str>);

impl StateProjection {
    /// Projection from a static key.
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Projection key.
    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Scene transition used by the host when a screen is pushed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneConfig {
    /// Slide in from the trailing edge
    #[default]
    FloatFromRight,
    /// Slide up from the bottom (modal style)
    FloatFromBottom,
    /// Cross-fade
    Fade,
}

/// Resolved description of one screen in the declarative stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenDescriptor {
    /// Screen type to mount. May be omitted by table-selected resolvers and
    /// backfilled during resolution.
    #[serde(default)]
    pub screen: Option<ScreenId>,
    /// Title shown in the chrome
    #[serde(default)]
    pub title: Option<String>,
    /// Slice of global state handed to the screen
    #[serde(default)]
    pub projection: Option<StateProjection>,
    /// Extra props
    #[serde(default)]
    pub props: Params,
    /// Back-reference copied from the segment being resolved
    #[serde(default)]
    pub up_link: Option<String>,
    /// Label for the back-reference
    #[serde(default)]
    pub up_title: Option<String>,
    /// Hide navigation chrome while this screen is on top
    #[serde(default)]
    pub hide_chrome: bool,
    /// Scene transition override
    #[serde(default)]
    pub scene: Option<SceneConfig>,
}

impl ScreenDescriptor {
    /// Descriptor for a titled screen.
    pub fn new(screen: ScreenId, title: impl Into<String>) -> Self {
        Self {
            screen: Some(screen),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Descriptor with neither identity nor title.
    ///
    /// Only useful for screens selected through a routing table, whose
    /// identity is filled in by the resolver loop.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Set the state projection.
    #[must_use]
    pub fn with_projection(mut self, projection: StateProjection) -> Self {
        self.projection = Some(projection);
        self
    }

    /// Add a prop.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Hide navigation chrome for this screen.
    #[must_use]
    pub fn hiding_chrome(mut self) -> Self {
        self.hide_chrome = true;
        self
    }

    /// Override the scene transition.
    #[must_use]
    pub fn with_scene(mut self, scene: SceneConfig) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Scene transition to use, falling back to the host default.
    pub fn scene_or_default(&self) -> SceneConfig {
        self.scene.unwrap_or_default()
    }

    /// Whether a host history entry corresponds to this descriptor.
    ///
    /// Matches on screen identity and title only.
    pub fn matches_route(&self, other: &ScreenDescriptor) -> bool {
        self.screen == other.screen && self.title == other.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOLDERS: ScreenId = ScreenId::from_static("folders");

    #[test]
    fn test_matches_route_ignores_props() {
        let a = ScreenDescriptor::new(FOLDERS, "Folders").with_prop("count", 1);
        let b = ScreenDescriptor::new(FOLDERS, "Folders").with_prop("count", 2);
        assert!(a.matches_route(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_matches_route_requires_title() {
        let a = ScreenDescriptor::new(FOLDERS, "Folders");
        let b = ScreenDescriptor::new(FOLDERS, "Private");
        assert!(!a.matches_route(&b));
    }

    #[test]
    fn test_scene_default() {
        let plain = ScreenDescriptor::new(FOLDERS, "Folders");
        assert_eq!(plain.scene_or_default(), SceneConfig::FloatFromRight);
        let modal = plain.with_scene(SceneConfig::FloatFromBottom);
        assert_eq!(modal.scene_or_default(), SceneConfig::FloatFromBottom);
    }

    #[test]
    fn test_screen_id_owned_equals_static() {
        assert_eq!(ScreenId::new("folders"), FOLDERS);
        assert_eq!(FOLDERS.to_string(), "folders");
    }
}
