//! User-facing session operations.

use crate::{AssetGenerator, AutoProcessReport, AutoProcessor, ProjectStore, ScriptAnalyzer, UpdateOutcome};
use std::future::Future;
use std::sync::Arc;
use storyboard_core::{
    GenerationSettings, Project, ProjectId, ProjectUpdate, SceneId, VisualStyle,
};
use storyboard_error::{ProjectError, ProjectErrorKind, StoryboardResult};
use storyboard_interface::StoryModel;
use storyboard_retry::RetryPolicy;
use tracing::{info, instrument, warn};

/// One user's storyboard session: a model, a project store and settings.
///
/// Every action returns its own result. Generation actions bracket the model
/// call with `*Started` and `*Ready`/`*Failed` updates, so in-progress flags
/// are always cleared and a failed regeneration keeps the previous asset.
///
/// Cloning is cheap and clones share the same store, so a clone can run a
/// generation on another task while this one keeps serving actions.
pub struct StoryboardSession<M: StoryModel> {
    model: Arc<M>,
    analyzer: Arc<ScriptAnalyzer<M>>,
    generator: Arc<AssetGenerator<M>>,
    store: ProjectStore,
    settings: GenerationSettings,
}

impl<M: StoryModel> Clone for StoryboardSession<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            analyzer: Arc::clone(&self.analyzer),
            generator: Arc::clone(&self.generator),
            store: self.store.clone(),
            settings: self.settings,
        }
    }
}

impl<M: StoryModel> StoryboardSession<M> {
    /// Create a session with no project.
    pub fn new(model: Arc<M>, retry: RetryPolicy, settings: GenerationSettings) -> Self {
        Self {
            analyzer: Arc::new(ScriptAnalyzer::new(Arc::clone(&model), retry)),
            generator: Arc::new(AssetGenerator::new(Arc::clone(&model), retry)),
            model,
            store: ProjectStore::new(),
            settings,
        }
    }

    /// Change the generation settings for subsequent calls.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Generation settings in effect.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// The model behind this session.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The project store.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Copy of the current project, if any.
    pub async fn snapshot(&self) -> Option<Project> {
        self.store.snapshot().await
    }

    /// True when a project exists and all its assets are present.
    pub async fn is_complete(&self) -> bool {
        self.store
            .snapshot()
            .await
            .is_some_and(|p| p.is_complete())
    }

    /// Analyze a script and make the result the current project.
    ///
    /// Never waits for generations in flight; their late results are dropped.
    #[instrument(skip_all, fields(style = %style))]
    pub async fn analyze(&self, script: &str, style: VisualStyle) -> StoryboardResult<Project> {
        let project = self.analyzer.analyze(script, style).await?;
        self.store.replace(project.clone()).await;
        Ok(project)
    }

    /// Generate the reference portrait of one character.
    #[instrument(skip(self))]
    pub async fn generate_character_preview(&self, name: &str) -> StoryboardResult<UpdateOutcome> {
        let project = self.store.current().await?;
        self.character_preview_in(&project, name).await
    }

    /// Generate portraits for every character that lacks one, in order.
    ///
    /// Stops at the first failure. Returns how many portraits were added.
    #[instrument(skip(self))]
    pub async fn generate_all_character_previews(&self) -> StoryboardResult<usize> {
        let start = self.store.current().await?;
        let mut generated = 0;
        for character in start.characters() {
            let project = self.pinned(*start.id()).await?;
            if project
                .character(character.name())
                .is_some_and(|c| c.has_preview())
            {
                continue;
            }
            match self.character_preview_in(&project, character.name()).await? {
                UpdateOutcome::Applied => generated += 1,
                UpdateOutcome::Stale => return Err(superseded()),
            }
        }
        info!(generated, "Character previews generated");
        Ok(generated)
    }

    /// Generate (or regenerate) a scene illustration.
    #[instrument(skip_all, fields(scene_id = %scene_id))]
    pub async fn generate_scene_image(&self, scene_id: &SceneId) -> StoryboardResult<UpdateOutcome> {
        let project = self.store.current().await?;
        self.scene_image_in(&project, scene_id).await
    }

    /// Generate (or regenerate) a scene narration.
    #[instrument(skip_all, fields(scene_id = %scene_id))]
    pub async fn generate_scene_audio(&self, scene_id: &SceneId) -> StoryboardResult<UpdateOutcome> {
        let project = self.store.current().await?;
        self.scene_audio_in(&project, scene_id).await
    }

    /// Generate (or regenerate) the cover thumbnail.
    #[instrument(skip(self))]
    pub async fn generate_thumbnail(&self) -> StoryboardResult<UpdateOutcome> {
        let project = self.store.current().await?;
        self.thumbnail_in(&project).await
    }

    /// Generate everything that is missing. See [`AutoProcessor`].
    pub async fn auto_process(&self) -> StoryboardResult<AutoProcessReport> {
        AutoProcessor::new(self).run().await
    }

    /// Replace a character's visual description.
    pub async fn edit_character_description(
        &self,
        name: &str,
        description: impl Into<String>,
    ) -> StoryboardResult<UpdateOutcome> {
        let project = self.store.current().await?;
        self.store
            .apply(
                *project.id(),
                ProjectUpdate::EditCharacterDescription {
                    name: name.to_string(),
                    description: description.into(),
                },
            )
            .await
    }

    /// Replace a scene's image prompt.
    pub async fn edit_scene_visual_prompt(
        &self,
        scene_id: &SceneId,
        visual_prompt: impl Into<String>,
    ) -> StoryboardResult<UpdateOutcome> {
        let project = self.store.current().await?;
        self.store
            .apply(
                *project.id(),
                ProjectUpdate::EditSceneVisualPrompt {
                    scene_id: scene_id.clone(),
                    visual_prompt: visual_prompt.into(),
                },
            )
            .await
    }

    /// Replace a scene's narration text.
    pub async fn edit_scene_content(
        &self,
        scene_id: &SceneId,
        content: impl Into<String>,
    ) -> StoryboardResult<UpdateOutcome> {
        let project = self.store.current().await?;
        self.store
            .apply(
                *project.id(),
                ProjectUpdate::EditSceneContent {
                    scene_id: scene_id.clone(),
                    content: content.into(),
                },
            )
            .await
    }

    /// Current project, provided it is still `project_id`.
    pub(crate) async fn pinned(&self, project_id: ProjectId) -> StoryboardResult<Project> {
        let project = self.store.current().await?;
        if *project.id() != project_id {
            warn!(expected = %project_id, current = %project.id(), "Project was replaced");
            return Err(superseded());
        }
        Ok(project)
    }

    pub(crate) async fn character_preview_in(
        &self,
        project: &Project,
        name: &str,
    ) -> StoryboardResult<UpdateOutcome> {
        let character = project.character(name).ok_or_else(|| {
            ProjectError::new(ProjectErrorKind::UnknownCharacter(name.to_string()))
        })?;
        self.bracket(
            *project.id(),
            ProjectUpdate::CharacterPreviewStarted {
                name: name.to_string(),
            },
            self.generator.character_portrait(character, project),
            |image| ProjectUpdate::CharacterPreviewReady {
                name: name.to_string(),
                image,
            },
            ProjectUpdate::CharacterPreviewFailed {
                name: name.to_string(),
            },
        )
        .await
    }

    pub(crate) async fn scene_image_in(
        &self,
        project: &Project,
        scene_id: &SceneId,
    ) -> StoryboardResult<UpdateOutcome> {
        let scene = project
            .scene(scene_id)
            .ok_or_else(|| ProjectError::new(ProjectErrorKind::UnknownScene(scene_id.to_string())))?;
        self.bracket(
            *project.id(),
            ProjectUpdate::SceneImageStarted {
                scene_id: scene_id.clone(),
            },
            self.generator
                .scene_image(project, scene, *self.settings.image_size()),
            |image| ProjectUpdate::SceneImageReady {
                scene_id: scene_id.clone(),
                image,
            },
            ProjectUpdate::SceneImageFailed {
                scene_id: scene_id.clone(),
            },
        )
        .await
    }

    pub(crate) async fn scene_audio_in(
        &self,
        project: &Project,
        scene_id: &SceneId,
    ) -> StoryboardResult<UpdateOutcome> {
        let scene = project
            .scene(scene_id)
            .ok_or_else(|| ProjectError::new(ProjectErrorKind::UnknownScene(scene_id.to_string())))?;
        self.bracket(
            *project.id(),
            ProjectUpdate::SceneAudioStarted {
                scene_id: scene_id.clone(),
            },
            self.generator
                .generate_speech(scene.content(), *self.settings.narrator_voice()),
            |audio| ProjectUpdate::SceneAudioReady {
                scene_id: scene_id.clone(),
                audio,
            },
            ProjectUpdate::SceneAudioFailed {
                scene_id: scene_id.clone(),
            },
        )
        .await
    }

    pub(crate) async fn thumbnail_in(&self, project: &Project) -> StoryboardResult<UpdateOutcome> {
        self.bracket(
            *project.id(),
            ProjectUpdate::ThumbnailStarted,
            self.generator.thumbnail(project),
            |image| ProjectUpdate::ThumbnailReady { image },
            ProjectUpdate::ThumbnailFailed,
        )
        .await
    }

    /// Mark the start, run the call, then record its result or its failure.
    async fn bracket<T, Fut, R>(
        &self,
        project_id: ProjectId,
        started: ProjectUpdate,
        call: Fut,
        ready: R,
        failed: ProjectUpdate,
    ) -> StoryboardResult<UpdateOutcome>
    where
        Fut: Future<Output = StoryboardResult<T>>,
        R: FnOnce(T) -> ProjectUpdate,
    {
        if self.store.apply(project_id, started).await? == UpdateOutcome::Stale {
            return Ok(UpdateOutcome::Stale);
        }
        match call.await {
            Ok(value) => self.store.apply(project_id, ready(value)).await,
            Err(e) => {
                warn!(error = %e, "Generation failed");
                self.store.apply(project_id, failed).await?;
                Err(e)
            }
        }
    }
}

fn superseded() -> storyboard_error::StoryboardError {
    ProjectError::new(ProjectErrorKind::Superseded).into()
}
