//! Google Gemini REST API client implementation.
//!
//! Every call is a single `POST {base_url}/models/{model}:generateContent`
//! authenticated with the `x-goog-api-key` header. Retrying is left to the
//! caller.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, ErrorBody, ErrorResponse, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, GenerationConfigBuilder, ImageConfig, InlineData,
    Part, PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, storyboard_error::GeminiError>;
