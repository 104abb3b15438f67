//! Request shapes for the three model capabilities.

use serde::{Deserialize, Serialize};
use storyboard_core::{ImageSize, SCENE_ASPECT_RATIO, Voice};

/// Text generation constrained to a JSON response schema.
///
/// # Examples
///
/// ```
/// use storyboard_interface::StructuredRequest;
/// use serde_json::json;
///
/// let request = StructuredRequest::new("Summarize", json!({"type": "STRING"}));
/// assert_eq!(request.prompt(), "Summarize");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StructuredRequest {
    /// Instruction and input text
    prompt: String,
    /// Response schema in the provider's OpenAPI subset
    schema: serde_json::Value,
}

impl StructuredRequest {
    /// Create a structured request.
    pub fn new(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            prompt: prompt.into(),
            schema,
        }
    }
}

/// Single image generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageRequest {
    /// Full prompt, preamble included
    prompt: String,
    /// Resolution tier
    size: ImageSize,
    /// Aspect ratio such as `16:9`
    aspect_ratio: String,
}

impl ImageRequest {
    /// Create an image request with the fixed scene aspect ratio.
    ///
    /// ```
    /// use storyboard_core::ImageSize;
    /// use storyboard_interface::ImageRequest;
    ///
    /// let request = ImageRequest::new("A castle", ImageSize::OneK);
    /// assert_eq!(request.aspect_ratio(), "16:9");
    /// ```
    pub fn new(prompt: impl Into<String>, size: ImageSize) -> Self {
        Self {
            prompt: prompt.into(),
            size,
            aspect_ratio: SCENE_ASPECT_RATIO.to_string(),
        }
    }
}

/// Text-to-speech with a prebuilt voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SpeechRequest {
    /// Text to speak
    text: String,
    /// Prebuilt voice
    voice: Voice,
}

impl SpeechRequest {
    /// Create a speech request.
    pub fn new(text: impl Into<String>, voice: Voice) -> Self {
        Self {
            text: text.into(),
            voice,
        }
    }
}
