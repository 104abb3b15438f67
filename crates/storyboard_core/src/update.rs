//! Incremental changes to a project.

use crate::{AudioClip, ImageAsset, SceneId};

/// One state transition of a project.
///
/// Generators emit a `*Started` update before calling the model and exactly one
/// `*Ready` or `*Failed` update once the call settles. Edits come from the user.
#[derive(Debug, Clone, PartialEq, strum::AsRefStr)]
pub enum ProjectUpdate {
    /// Portrait request sent for the named character
    CharacterPreviewStarted {
        /// Character name
        name: String,
    },
    /// Portrait arrived
    CharacterPreviewReady {
        /// Character name
        name: String,
        /// Generated portrait
        image: ImageAsset,
    },
    /// Portrait request failed
    CharacterPreviewFailed {
        /// Character name
        name: String,
    },
    /// Image request sent for the scene
    SceneImageStarted {
        /// Scene key
        scene_id: SceneId,
    },
    /// Scene image arrived
    SceneImageReady {
        /// Scene key
        scene_id: SceneId,
        /// Generated illustration
        image: ImageAsset,
    },
    /// Scene image request failed
    SceneImageFailed {
        /// Scene key
        scene_id: SceneId,
    },
    /// Speech request sent for the scene
    SceneAudioStarted {
        /// Scene key
        scene_id: SceneId,
    },
    /// Narration arrived
    SceneAudioReady {
        /// Scene key
        scene_id: SceneId,
        /// Generated narration
        audio: AudioClip,
    },
    /// Speech request failed
    SceneAudioFailed {
        /// Scene key
        scene_id: SceneId,
    },
    /// Thumbnail request sent
    ThumbnailStarted,
    /// Thumbnail arrived
    ThumbnailReady {
        /// Generated cover image
        image: ImageAsset,
    },
    /// Thumbnail request failed
    ThumbnailFailed,
    /// User edited a character's visual description
    EditCharacterDescription {
        /// Character name
        name: String,
        /// New description
        description: String,
    },
    /// User edited a scene's image prompt
    EditSceneVisualPrompt {
        /// Scene key
        scene_id: SceneId,
        /// New prompt
        visual_prompt: String,
    },
    /// User edited a scene's narration
    EditSceneContent {
        /// Scene key
        scene_id: SceneId,
        /// New narration text
        content: String,
    },
}
