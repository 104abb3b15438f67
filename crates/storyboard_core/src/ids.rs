//! Identifiers for projects and scenes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one analyzed project.
///
/// Every analysis mints a fresh id, so results computed against a replaced
/// project can be recognized and dropped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Mint a new random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable key of a scene within its project, `scene-N`.
///
/// # Examples
///
/// ```
/// use storyboard_core::SceneId;
///
/// let id = SceneId::from_index(3);
/// assert_eq!(id.as_str(), "scene-3");
/// assert_eq!(SceneId::from("scene-3"), id);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Id for the scene at `index` in analysis order.
    pub fn from_index(index: usize) -> Self {
        Self(format!("scene-{}", index))
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SceneId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
