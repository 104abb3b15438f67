//! The project aggregate and its reducer.

use crate::{Character, ImageAsset, ProjectId, ProjectUpdate, Scene, SceneId, VisualStyle};
use serde::Serialize;
use storyboard_error::{ProjectError, ProjectErrorKind, StoryboardResult};

/// Everything known about one analyzed script.
///
/// Created once per analysis and never merged with a previous project.
/// Changes are applied with [`Project::apply`], which returns a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Session identity of this analysis
    id: ProjectId,
    /// Story title
    title: String,
    /// Script exactly as submitted
    original_script: String,
    /// Characters in analysis order
    characters: Vec<Character>,
    /// Scenes in narrative order
    scenes: Vec<Scene>,
    /// Art style chosen at analysis time
    style: VisualStyle,
    /// Cover image, once generated
    #[serde(skip)]
    thumbnail: Option<ImageAsset>,
    /// True while a thumbnail request is outstanding
    #[serde(skip)]
    generating_thumbnail: bool,
}

impl Project {
    /// Assemble a fresh project with a new id and no generated assets.
    pub fn new(
        title: impl Into<String>,
        original_script: impl Into<String>,
        characters: Vec<Character>,
        scenes: Vec<Scene>,
        style: VisualStyle,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            original_script: original_script.into(),
            characters,
            scenes,
            style,
            thumbnail: None,
            generating_thumbnail: false,
        }
    }

    /// Look up a character by name.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Look up a scene by id.
    pub fn scene(&self, scene_id: &SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|s| &s.id == scene_id)
    }

    /// Characters listed in the scene, in project character order.
    ///
    /// Names the analysis listed but never defined are ignored.
    pub fn cast_of(&self, scene: &Scene) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| scene.characters_in_scene.contains(&c.name))
            .collect()
    }

    /// True when every scene has both image and audio and a thumbnail exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_core::{Project, VisualStyle};
    ///
    /// let project = Project::new("Empty", "", vec![], vec![], VisualStyle::default());
    /// // No thumbnail yet
    /// assert!(!project.is_complete());
    /// ```
    pub fn is_complete(&self) -> bool {
        self.thumbnail.is_some() && self.scenes.iter().all(Scene::is_complete)
    }

    /// Apply one update and return the resulting snapshot.
    ///
    /// Only the entity named by the update changes. A `*Failed` update clears
    /// the in-progress flag and keeps whatever asset was already present.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectErrorKind::UnknownCharacter`] or
    /// [`ProjectErrorKind::UnknownScene`] when the key is not in the project.
    pub fn apply(&self, update: ProjectUpdate) -> StoryboardResult<Project> {
        let mut next = self.clone();
        match update {
            ProjectUpdate::CharacterPreviewStarted { name } => {
                next.character_mut(&name)?.generating_preview = true;
            }
            ProjectUpdate::CharacterPreviewReady { name, image } => {
                let character = next.character_mut(&name)?;
                character.preview = Some(image);
                character.generating_preview = false;
            }
            ProjectUpdate::CharacterPreviewFailed { name } => {
                next.character_mut(&name)?.generating_preview = false;
            }
            ProjectUpdate::SceneImageStarted { scene_id } => {
                next.scene_mut(&scene_id)?.generating_image = true;
            }
            ProjectUpdate::SceneImageReady { scene_id, image } => {
                let scene = next.scene_mut(&scene_id)?;
                scene.image = Some(image);
                scene.generating_image = false;
            }
            ProjectUpdate::SceneImageFailed { scene_id } => {
                next.scene_mut(&scene_id)?.generating_image = false;
            }
            ProjectUpdate::SceneAudioStarted { scene_id } => {
                next.scene_mut(&scene_id)?.generating_audio = true;
            }
            ProjectUpdate::SceneAudioReady { scene_id, audio } => {
                let scene = next.scene_mut(&scene_id)?;
                scene.audio = Some(audio);
                scene.generating_audio = false;
            }
            ProjectUpdate::SceneAudioFailed { scene_id } => {
                next.scene_mut(&scene_id)?.generating_audio = false;
            }
            ProjectUpdate::ThumbnailStarted => {
                next.generating_thumbnail = true;
            }
            ProjectUpdate::ThumbnailReady { image } => {
                next.thumbnail = Some(image);
                next.generating_thumbnail = false;
            }
            ProjectUpdate::ThumbnailFailed => {
                next.generating_thumbnail = false;
            }
            ProjectUpdate::EditCharacterDescription { name, description } => {
                next.character_mut(&name)?.description = description;
            }
            ProjectUpdate::EditSceneVisualPrompt {
                scene_id,
                visual_prompt,
            } => {
                next.scene_mut(&scene_id)?.visual_prompt = visual_prompt;
            }
            ProjectUpdate::EditSceneContent { scene_id, content } => {
                next.scene_mut(&scene_id)?.content = content;
            }
        }
        Ok(next)
    }

    fn character_mut(&mut self, name: &str) -> StoryboardResult<&mut Character> {
        self.characters
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| ProjectError::new(ProjectErrorKind::UnknownCharacter(name.to_string())).into())
    }

    fn scene_mut(&mut self, scene_id: &SceneId) -> StoryboardResult<&mut Scene> {
        self.scenes
            .iter_mut()
            .find(|s| &s.id == scene_id)
            .ok_or_else(|| {
                ProjectError::new(ProjectErrorKind::UnknownScene(scene_id.to_string())).into()
            })
    }
}
