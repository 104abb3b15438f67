//! Gemini REST client for Storyboard.
//!
//! [`GeminiClient`] implements [`storyboard_interface::StoryModel`] over the
//! `generateContent` endpoint: structured JSON for script analysis, inline
//! images for illustrations, and inline PCM audio for narration.
//!
//! ```no_run
//! use storyboard_models::GeminiClient;
//! use storyboard_interface::{ImageRequest, StoryModel};
//! use storyboard_core::ImageSize;
//! use storyboard_retry::GeminiConfig;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(&GeminiConfig::default())?;
//! let image = client
//!     .generate_image(&ImageRequest::new("A lighthouse at dusk", ImageSize::OneK))
//!     .await?;
//! println!("{} bytes of {}", image.bytes().len(), image.mime());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Candidate, Content, ErrorBody, ErrorResponse, GeminiClient, GeminiResult,
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, GenerationConfigBuilder,
    ImageConfig, InlineData, Part, PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};
