//! Shared command setup: configuration, script input and the Gemini session.

use std::path::Path;
use std::sync::Arc;
use storyboard_core::GenerationSettings;
use storyboard_error::{ProjectError, ProjectErrorKind, StoryboardResult};
use storyboard_models::GeminiClient;
use storyboard_pipeline::StoryboardSession;
use storyboard_retry::{RetryPolicy, StoryboardConfig};

/// Load configuration from `path`, or from the standard locations.
pub fn load_config(path: Option<&Path>) -> StoryboardResult<StoryboardConfig> {
    match path {
        Some(path) => StoryboardConfig::from_file(path),
        None => StoryboardConfig::load(),
    }
}

/// Read a script file as text.
pub fn read_script(path: &Path) -> StoryboardResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        ProjectError::new(ProjectErrorKind::ScriptRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}

/// Session backed by the Gemini client described in `config`.
pub fn gemini_session(
    config: &StoryboardConfig,
    retry: RetryPolicy,
    settings: GenerationSettings,
) -> StoryboardResult<StoryboardSession<GeminiClient>> {
    let client = GeminiClient::new(config.gemini())?;
    Ok(StoryboardSession::new(Arc::new(client), retry, settings))
}
