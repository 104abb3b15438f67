//! Mock story model for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use storyboard_core::{AudioClip, ImageAsset, ImageSize, Voice};
use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardError, StoryboardResult};
use storyboard_interface::{ImageRequest, SpeechRequest, StoryModel, StructuredRequest};
use tokio::sync::Notify;

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    /// Structured generation with its prompt
    Structured(String),
    /// Image generation with prompt and size
    Image(String, ImageSize),
    /// Speech generation with text and voice
    Speech(String, Voice),
}

/// Holds an image call until released.
#[derive(Clone, Default)]
pub struct Gate {
    /// Notified when an image call has started
    pub entered: Arc<Notify>,
    /// Notify to let the image call finish
    pub release: Arc<Notify>,
}

/// Scripted model.
///
/// Structured calls answer from a queue of texts, falling back to the last
/// configured answer. Image and speech calls succeed unless a failure is
/// queued for them. Every call is recorded.
#[derive(Default)]
pub struct MockStoryModel {
    analyses: Mutex<VecDeque<String>>,
    fallback_analysis: String,
    structured_failures: Mutex<VecDeque<GeminiErrorKind>>,
    image_failures: Mutex<VecDeque<GeminiErrorKind>>,
    speech_failures: Mutex<VecDeque<GeminiErrorKind>>,
    image_gate: Option<Gate>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockStoryModel {
    /// Model that answers every analysis with `analysis`.
    pub fn new(analysis: impl Into<String>) -> Self {
        Self {
            fallback_analysis: analysis.into(),
            ..Default::default()
        }
    }

    /// Answer the next analyses with these texts, in order.
    #[allow(dead_code)]
    pub fn with_analyses(self, analyses: Vec<String>) -> Self {
        *self.analyses.lock().unwrap() = analyses.into();
        self
    }

    /// Fail the next structured calls with these errors.
    #[allow(dead_code)]
    pub fn with_structured_failures(self, failures: Vec<GeminiErrorKind>) -> Self {
        *self.structured_failures.lock().unwrap() = failures.into();
        self
    }

    /// Fail the next image calls with these errors.
    #[allow(dead_code)]
    pub fn with_image_failures(self, failures: Vec<GeminiErrorKind>) -> Self {
        *self.image_failures.lock().unwrap() = failures.into();
        self
    }

    /// Fail the next speech calls with these errors.
    #[allow(dead_code)]
    pub fn with_speech_failures(self, failures: Vec<GeminiErrorKind>) -> Self {
        *self.speech_failures.lock().unwrap() = failures.into();
        self
    }

    /// Hold every image call at `gate`.
    #[allow(dead_code)]
    pub fn with_image_gate(mut self, gate: Gate) -> Self {
        self.image_gate = Some(gate);
        self
    }

    /// Queue image failures after construction.
    #[allow(dead_code)]
    pub fn fail_next_image(&self, error: GeminiErrorKind) {
        self.image_failures.lock().unwrap().push_back(error);
    }

    /// All calls so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: MockCall) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        calls.len()
    }

    fn failure(queue: &Mutex<VecDeque<GeminiErrorKind>>) -> Option<StoryboardError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .map(|kind| GeminiError::new(kind).into())
    }
}

#[async_trait]
impl StoryModel for MockStoryModel {
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        self.record(MockCall::Structured(req.prompt().clone()));
        if let Some(err) = Self::failure(&self.structured_failures) {
            return Err(err);
        }
        let next = self.analyses.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| self.fallback_analysis.clone()))
    }

    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageAsset> {
        let n = self.record(MockCall::Image(req.prompt().clone(), *req.size()));
        if let Some(gate) = &self.image_gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        if let Some(err) = Self::failure(&self.image_failures) {
            return Err(err);
        }
        Ok(ImageAsset::new("image/png", vec![n as u8]))
    }

    async fn generate_speech(&self, req: &SpeechRequest) -> StoryboardResult<AudioClip> {
        let n = self.record(MockCall::Speech(req.text().clone(), *req.voice()));
        if let Some(err) = Self::failure(&self.speech_failures) {
            return Err(err);
        }
        Ok(AudioClip::new(vec![n as u8, 0]))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
