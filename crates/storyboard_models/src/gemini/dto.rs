//! Gemini `generateContent` data transfer objects.

use crate::GeminiResult;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyboard_error::{GeminiError, GeminiErrorKind};

/// Request body for `generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns; Storyboard always sends one user turn
    contents: Vec<Content>,
    /// Output constraints
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Single user turn holding `prompt`.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user_text(prompt)],
            generation_config: None,
        }
    }

    /// Attach generation settings.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

/// One turn of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Content {
    /// `user` or `model`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    /// Ordered parts
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// User turn with one text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part::text(text)],
        }
    }
}

/// A text or inline-data part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[getter(skip)]
    text: Option<String>,
    /// Binary payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    /// Text-only part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// Base64 payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// e.g. `image/png` or `audio/L16;codec=pcm;rate=24000`
    #[serde(default)]
    mime_type: String,
    /// Base64 text
    data: String,
}

impl InlineData {
    /// Decode the base64 payload.
    pub fn decode(&self) -> GeminiResult<Vec<u8>> {
        STANDARD
            .decode(&self.data)
            .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))
    }
}

/// Output constraints for a request.
///
/// # Examples
///
/// ```
/// use storyboard_models::GenerationConfigBuilder;
///
/// let config = GenerationConfigBuilder::default()
///     .response_mime_type("application/json")
///     .build()
///     .unwrap();
/// let json = serde_json::to_value(&config).unwrap();
/// assert_eq!(json["responseMimeType"], "application/json");
/// assert!(json.get("speechConfig").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct GenerationConfig {
    /// MIME type of the text response
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// JSON schema the text response must follow
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    /// Output modalities such as `AUDIO`
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    /// Voice selection for audio output
    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
    /// Size and shape of image output
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

/// Image output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// e.g. `16:9`
    aspect_ratio: String,
    /// `1K`, `2K` or `4K`
    image_size: String,
}

impl ImageConfig {
    /// Create image settings.
    pub fn new(aspect_ratio: impl Into<String>, image_size: impl Into<String>) -> Self {
        Self {
            aspect_ratio: aspect_ratio.into(),
            image_size: image_size.into(),
        }
    }
}

/// Speech output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    /// Voice selection
    voice_config: VoiceConfig,
}

impl SpeechConfig {
    /// Speak with a prebuilt voice.
    pub fn prebuilt(voice_name: impl Into<String>) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice_name.into(),
                },
            },
        }
    }
}

/// Voice selection wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// Prebuilt voice
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// A named prebuilt voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// Voice name such as `Aoede`
    voice_name: String,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, best first
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Parts of the first candidate, empty if there is none.
    pub fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// Concatenated text of the first candidate, if it has any text.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    /// First inline payload anywhere in the first candidate.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.first_parts()
            .iter()
            .find_map(|p| p.inline_data.as_ref())
    }

    /// Inline payload of the very first part of the first candidate.
    pub fn leading_inline_data(&self) -> Option<&InlineData> {
        self.first_parts()
            .first()
            .and_then(|p| p.inline_data.as_ref())
    }
}

/// A response candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; absent when the candidate was blocked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<Content>,
    /// Why generation stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finish_reason: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ErrorResponse {
    /// Error details
    error: ErrorBody,
}

/// Error details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ErrorBody {
    /// HTTP-like code
    #[serde(default)]
    code: u16,
    /// Human-readable message
    #[serde(default)]
    message: String,
    /// Canonical status such as `UNAVAILABLE`
    #[serde(default)]
    status: Option<String>,
}

impl ErrorResponse {
    /// `STATUS: message`, or just the message when no status is given.
    pub fn summary(&self) -> String {
        match &self.error.status {
            Some(status) => format!("{}: {}", status, self.error.message),
            None => self.error.message.clone(),
        }
    }
}
