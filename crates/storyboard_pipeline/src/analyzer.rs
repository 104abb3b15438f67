//! Script analysis.

use crate::prompts::{analysis_prompt, analysis_schema};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use storyboard_core::{Character, Project, Scene, SceneId, VisualStyle, Voice};
use storyboard_error::{
    AnalysisError, AnalysisErrorKind, ProjectError, ProjectErrorKind, StoryboardResult,
};
use storyboard_interface::{StoryModel, StructuredRequest};
use storyboard_retry::{RetryPolicy, with_retry};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    title: String,
    characters: Vec<CharacterEntry>,
    scenes: Vec<SceneEntry>,
}

#[derive(Debug, Deserialize)]
struct CharacterEntry {
    name: String,
    description: String,
    voice: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneEntry {
    title: String,
    content: String,
    visual_prompt: String,
    characters_in_scene: Vec<String>,
}

/// Turns a raw script into a fresh [`Project`] with one structured model call.
pub struct ScriptAnalyzer<M: StoryModel> {
    model: Arc<M>,
    retry: RetryPolicy,
}

impl<M: StoryModel> ScriptAnalyzer<M> {
    /// Create an analyzer sharing `model`.
    pub fn new(model: Arc<M>, retry: RetryPolicy) -> Self {
        Self { model, retry }
    }

    /// Analyze `script` and build a project in the given style.
    ///
    /// Scenes get ids `scene-0` onward in response order and the project keeps
    /// `script` byte for byte.
    ///
    /// # Errors
    ///
    /// - [`ProjectErrorKind::EmptyScript`] for empty or whitespace-only input,
    ///   before any remote call.
    /// - [`AnalysisErrorKind::Remote`] when the call fails after retries.
    /// - [`AnalysisErrorKind::MalformedResponse`] when the answer does not
    ///   match the schema.
    #[instrument(skip_all, fields(script_len = script.len(), style = %style))]
    pub async fn analyze(&self, script: &str, style: VisualStyle) -> StoryboardResult<Project> {
        if script.trim().is_empty() {
            return Err(ProjectError::new(ProjectErrorKind::EmptyScript).into());
        }

        let request = StructuredRequest::new(analysis_prompt(script), analysis_schema());
        let text = with_retry(&self.retry, || self.model.generate_structured(&request))
            .await
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::Remote(e.user_message())))?;
        debug!(response_len = text.len(), "Received analysis response");

        let parsed: AnalysisResponse = serde_json::from_str(&text)
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::MalformedResponse(e.to_string())))?;

        let characters = parsed
            .characters
            .into_iter()
            .map(|c| {
                let voice = Voice::from_str(&c.voice).unwrap_or_else(|_| {
                    warn!(character = %c.name, voice = %c.voice, "Unknown voice, using default");
                    Voice::default()
                });
                Character::new(c.name, c.description, voice)
            })
            .collect::<Vec<_>>();

        let scenes = parsed
            .scenes
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                Scene::new(
                    SceneId::from_index(index),
                    s.title,
                    s.content,
                    s.visual_prompt,
                    s.characters_in_scene,
                )
            })
            .collect::<Vec<_>>();

        let project = Project::new(parsed.title, script, characters, scenes, style);
        info!(
            project_id = %project.id(),
            title = %project.title(),
            characters = project.characters().len(),
            scenes = project.scenes().len(),
            "Script analyzed"
        );
        Ok(project)
    }
}
