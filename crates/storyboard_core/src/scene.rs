//! Story scenes.

use crate::{AudioClip, ImageAsset, SceneId};
use serde::Serialize;

/// One scene of the story, in narrative order.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Stable key
    pub(crate) id: SceneId,
    /// Short scene title
    pub(crate) title: String,
    /// Narration text with stage directions removed
    pub(crate) content: String,
    /// Image prompt, user-editable
    pub(crate) visual_prompt: String,
    /// Names of the characters appearing in the scene
    pub(crate) characters_in_scene: Vec<String>,
    /// Illustration, once generated
    #[serde(skip)]
    pub(crate) image: Option<ImageAsset>,
    /// Narration audio, once generated
    #[serde(skip)]
    pub(crate) audio: Option<AudioClip>,
    /// True while an image request is outstanding
    #[serde(skip)]
    pub(crate) generating_image: bool,
    /// True while a speech request is outstanding
    #[serde(skip)]
    pub(crate) generating_audio: bool,
}

impl Scene {
    /// Create a scene without assets.
    pub fn new(
        id: SceneId,
        title: impl Into<String>,
        content: impl Into<String>,
        visual_prompt: impl Into<String>,
        characters_in_scene: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            visual_prompt: visual_prompt.into(),
            characters_in_scene,
            image: None,
            audio: None,
            generating_image: false,
            generating_audio: false,
        }
    }

    /// True when both the illustration and the narration exist.
    pub fn is_complete(&self) -> bool {
        self.image.is_some() && self.audio.is_some()
    }
}
