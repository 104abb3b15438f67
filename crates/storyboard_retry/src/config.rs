//! Layered TOML configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from storyboard.toml)
//! - ~/.config/storyboard/storyboard.toml
//! - ./storyboard.toml

use crate::RetryPolicy;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use storyboard_core::{GenerationSettings, ImageSize, VisualStyle, Voice};
use storyboard_error::{ConfigError, StoryboardError, StoryboardResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_analysis_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_speech_model() -> String {
    "gemini-2.5-flash-preview-tts".to_string()
}

/// Gemini endpoint and model names.
///
/// ```toml
/// [gemini]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// analysis_model = "gemini-3-pro-preview"
/// image_model = "gemini-3-pro-image-preview"
/// speech_model = "gemini-2.5-flash-preview-tts"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct GeminiConfig {
    /// REST base URL, without trailing slash
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Model used for script analysis
    #[serde(default = "default_analysis_model")]
    analysis_model: String,
    /// Model used for images
    #[serde(default = "default_image_model")]
    image_model: String,
    /// Model used for speech
    #[serde(default = "default_speech_model")]
    speech_model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            analysis_model: default_analysis_model(),
            image_model: default_image_model(),
            speech_model: default_speech_model(),
        }
    }
}

impl GeminiConfig {
    /// Point the client at another endpoint, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Defaults for user-chosen generation options.
///
/// ```toml
/// [generation]
/// style = "3D Pixar"
/// narrator_voice = "Aoede"
/// image_size = "1K"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, derive_getters::Getters,
)]
pub struct GenerationConfig {
    /// Art style used when none is given
    #[serde(default)]
    style: VisualStyle,
    /// Narrator voice
    #[serde(default)]
    narrator_voice: Voice,
    /// Scene image size tier
    #[serde(default)]
    image_size: ImageSize,
}

impl GenerationConfig {
    /// Session settings derived from these defaults.
    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings::default()
            .with_narrator_voice(self.narrator_voice)
            .with_image_size(self.image_size)
    }
}

/// Top-level Storyboard configuration.
///
/// # Example
///
/// ```no_run
/// use storyboard_retry::StoryboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// println!("Analysis model: {}", config.gemini().analysis_model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize, derive_getters::Getters)]
pub struct StoryboardConfig {
    /// Endpoint and model names
    #[serde(default)]
    gemini: GeminiConfig,
    /// Retry policy for every remote call
    #[serde(default)]
    retry: RetryPolicy,
    /// Generation defaults
    #[serde(default)]
    generation: GenerationConfig,
}

impl StoryboardConfig {
    /// Load configuration from a specific file path, on top of the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        Self::deserialize_from(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyboard").required(false));

        Self::deserialize_from(builder)
    }

    /// Replace the retry policy, e.g. from command-line overrides.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn deserialize_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StoryboardResult<Self> {
        builder
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
