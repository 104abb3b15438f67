//! The model seam.

use crate::{ImageRequest, SpeechRequest, StructuredRequest};
use async_trait::async_trait;
use storyboard_core::{AudioClip, ImageAsset};
use storyboard_error::StoryboardResult;

/// A generative backend able to analyze scripts, draw images, and speak.
///
/// Implementations make exactly one remote call per method invocation.
/// Retrying is the caller's business.
#[async_trait]
pub trait StoryModel: Send + Sync {
    /// Generate JSON text matching the request schema.
    ///
    /// Returns the raw text of the first candidate.
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String>;

    /// Generate one image.
    ///
    /// Fails with a "no image data" error when the response carries no inline image.
    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageAsset>;

    /// Speak the text.
    ///
    /// Returns headerless 16-bit PCM. Fails with a "no audio data" error when
    /// the response carries no inline audio.
    async fn generate_speech(&self, req: &SpeechRequest) -> StoryboardResult<AudioClip>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}
