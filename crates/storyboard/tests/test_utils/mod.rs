//! Test utilities for facade tests.

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use storyboard::{
    AudioClip, GeminiError, GeminiErrorKind, ImageAsset, ImageRequest, SpeechRequest, StoryModel,
    StoryboardResult, StructuredRequest,
};

/// Model answering with a two-scene story.
///
/// Speech calls numbered in `failing_speech` (1-based) fail with a quota error.
#[derive(Default)]
pub struct CannedModel {
    speech_calls: AtomicUsize,
    failing_speech: Vec<usize>,
}

impl CannedModel {
    /// Model whose nth speech calls fail.
    #[allow(dead_code)]
    pub fn failing_speech(calls: Vec<usize>) -> Self {
        Self {
            failing_speech: calls,
            ..Default::default()
        }
    }
}

#[async_trait]
impl StoryModel for CannedModel {
    async fn generate_structured(&self, _req: &StructuredRequest) -> StoryboardResult<String> {
        Ok(json!({
            "title": "Snail's Race",
            "characters": [
                {"name": "Snail", "description": "A tiny snail with a spiral shell", "voice": "Puck"}
            ],
            "scenes": [
                {
                    "title": "Start",
                    "content": "The snail lined up for the race.",
                    "visualPrompt": "A snail at a start line",
                    "charactersInScene": ["Snail"]
                },
                {
                    "title": "Moral Lesson",
                    "content": "Slow and steady wins the race.",
                    "visualPrompt": "The snail crossing the finish line",
                    "charactersInScene": ["Snail"]
                }
            ]
        })
        .to_string())
    }

    async fn generate_image(&self, _req: &ImageRequest) -> StoryboardResult<ImageAsset> {
        Ok(ImageAsset::new("image/png", vec![0x89, 0x50, 0x4e, 0x47]))
    }

    async fn generate_speech(&self, _req: &SpeechRequest) -> StoryboardResult<AudioClip> {
        let n = self.speech_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.failing_speech.contains(&n) {
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 429,
                message: "RESOURCE_EXHAUSTED: quota exceeded".to_string(),
            })
            .into());
        }
        Ok(AudioClip::new(vec![0; 480]))
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }
}
