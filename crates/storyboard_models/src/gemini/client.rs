//! Gemini REST client.

use crate::GeminiResult;
use crate::gemini::{
    ErrorResponse, GenerateContentRequest, GenerateContentResponse, GenerationConfigBuilder,
    ImageConfig, SpeechConfig,
};
use async_trait::async_trait;
use reqwest::Client;
use std::env;
use storyboard_core::{AudioClip, ImageAsset};
use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardResult};
use storyboard_interface::{ImageRequest, SpeechRequest, StoryModel, StructuredRequest};
use storyboard_retry::GeminiConfig;
use tracing::{debug, instrument, warn};

/// Client for the Gemini `generateContent` REST endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client, reading the API key from `GEMINI_API_KEY` or `API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] if neither variable is set,
    /// or a client creation error if the HTTP client cannot be built.
    #[instrument(name = "gemini_client_new", skip_all)]
    pub fn new(config: &GeminiConfig) -> StoryboardResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(api_key: impl Into<String>, config: &GeminiConfig) -> StoryboardResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(base_url = %config.base_url(), "Created Gemini client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            config: config.clone(),
        })
    }

    /// Endpoint configuration in use.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            model
        )
    }

    /// Send one `generateContent` request to `model`.
    ///
    /// Non-2xx statuses become [`GeminiErrorKind::HttpError`] whose message
    /// carries the provider status (e.g. `UNAVAILABLE`) when the body has one.
    #[instrument(skip_all, fields(model = %model))]
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.summary())
                .unwrap_or(body);
            warn!(status = status.as_u16(), message = %message, "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))
    }

    async fn structured(&self, req: &StructuredRequest) -> GeminiResult<String> {
        let config = GenerationConfigBuilder::default()
            .response_mime_type("application/json")
            .response_schema(req.schema().clone())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::RequestBuild(e.to_string())))?;
        let request =
            GenerateContentRequest::from_prompt(req.prompt()).with_generation_config(config);

        let response = self
            .generate_content(self.config.analysis_model(), &request)
            .await?;
        response
            .text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoTextData))
    }

    async fn image(&self, req: &ImageRequest) -> GeminiResult<ImageAsset> {
        let config = GenerationConfigBuilder::default()
            .image_config(ImageConfig::new(req.aspect_ratio(), req.size().as_str()))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::RequestBuild(e.to_string())))?;
        let request =
            GenerateContentRequest::from_prompt(req.prompt()).with_generation_config(config);

        let response = self
            .generate_content(self.config.image_model(), &request)
            .await?;
        let inline = response
            .first_inline_data()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoImageData))?;
        let mime = if inline.mime_type().is_empty() {
            "image/png"
        } else {
            inline.mime_type().as_str()
        };
        Ok(ImageAsset::new(mime, inline.decode()?))
    }

    async fn speech(&self, req: &SpeechRequest) -> GeminiResult<AudioClip> {
        let config = GenerationConfigBuilder::default()
            .response_modalities(vec!["AUDIO".to_string()])
            .speech_config(SpeechConfig::prebuilt(req.voice().api_name()))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::RequestBuild(e.to_string())))?;
        let request =
            GenerateContentRequest::from_prompt(req.text()).with_generation_config(config);

        let response = self
            .generate_content(self.config.speech_model(), &request)
            .await?;
        let inline = response
            .leading_inline_data()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoAudioData))?;
        Ok(AudioClip::new(inline.decode()?))
    }
}

#[async_trait]
impl StoryModel for GeminiClient {
    #[instrument(skip(self, req), fields(prompt_len = req.prompt().len()))]
    async fn generate_structured(&self, req: &StructuredRequest) -> StoryboardResult<String> {
        Ok(self.structured(req).await?)
    }

    #[instrument(skip(self, req), fields(size = %req.size()))]
    async fn generate_image(&self, req: &ImageRequest) -> StoryboardResult<ImageAsset> {
        Ok(self.image(req).await?)
    }

    #[instrument(skip(self, req), fields(voice = %req.voice(), text_len = req.text().len()))]
    async fn generate_speech(&self, req: &SpeechRequest) -> StoryboardResult<AudioClip> {
        Ok(self.speech(req).await?)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
