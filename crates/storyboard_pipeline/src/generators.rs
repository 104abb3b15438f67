//! Single-shot asset generators.

use crate::prompts::{portrait_prompt, scene_prompt, thumbnail_prompt, with_image_preamble};
use std::sync::Arc;
use storyboard_core::{AudioClip, Character, ImageAsset, ImageSize, Project, Scene, Voice};
use storyboard_error::StoryboardResult;
use storyboard_interface::{ImageRequest, SpeechRequest, StoryModel};
use storyboard_retry::{RetryPolicy, with_retry};
use tracing::instrument;

/// Produces one image or one narration per call, with retry.
pub struct AssetGenerator<M: StoryModel> {
    model: Arc<M>,
    retry: RetryPolicy,
}

impl<M: StoryModel> AssetGenerator<M> {
    /// Create a generator sharing `model`.
    pub fn new(model: Arc<M>, retry: RetryPolicy) -> Self {
        Self { model, retry }
    }

    /// Generate a 16:9 image for `prompt`, prefixed with the style preamble.
    #[instrument(skip_all, fields(size = %size))]
    pub async fn generate_image(&self, prompt: &str, size: ImageSize) -> StoryboardResult<ImageAsset> {
        let request = ImageRequest::new(with_image_preamble(prompt), size);
        with_retry(&self.retry, || self.model.generate_image(&request)).await
    }

    /// Reference portrait of a character at 1K.
    pub async fn character_portrait(
        &self,
        character: &Character,
        project: &Project,
    ) -> StoryboardResult<ImageAsset> {
        self.generate_image(&portrait_prompt(character, *project.style()), ImageSize::OneK)
            .await
    }

    /// Illustration of a scene.
    pub async fn scene_image(
        &self,
        project: &Project,
        scene: &Scene,
        size: ImageSize,
    ) -> StoryboardResult<ImageAsset> {
        self.generate_image(&scene_prompt(project, scene), size).await
    }

    /// Cover thumbnail at 1K, sent without the preamble.
    #[instrument(skip(self, project), fields(title = %project.title()))]
    pub async fn thumbnail(&self, project: &Project) -> StoryboardResult<ImageAsset> {
        let request = ImageRequest::new(thumbnail_prompt(project), ImageSize::OneK);
        with_retry(&self.retry, || self.model.generate_image(&request)).await
    }

    /// Speak `text` with `voice`.
    #[instrument(skip_all, fields(voice = %voice, text_len = text.len()))]
    pub async fn generate_speech(&self, text: &str, voice: Voice) -> StoryboardResult<AudioClip> {
        let request = SpeechRequest::new(text, voice);
        with_retry(&self.retry, || self.model.generate_speech(&request)).await
    }
}
