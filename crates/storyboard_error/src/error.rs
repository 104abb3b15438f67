//! Top-level error wrapper types.

use crate::{
    AnalysisError, ConfigError, ExportError, GeminiError, JsonError, ProjectError, RetryableError,
};

/// Every failure the Storyboard crates can surface.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ProjectError, ProjectErrorKind, StoryboardError};
///
/// let err: StoryboardError = ProjectError::new(ProjectErrorKind::NoProject).into();
/// assert!(format!("{}", err).starts_with("Storyboard Error: "));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// JSON encoding error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote model error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Script analysis failed
    #[from(AnalysisError)]
    Analysis(AnalysisError),
    /// Project state error
    #[from(ProjectError)]
    Project(ProjectError),
    /// Archive export error
    #[from(ExportError)]
    Export(ExportError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ConfigError, StoryboardResult};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }

    /// Short message suitable for showing to an end user.
    ///
    /// Drops the location suffix the inner errors carry.
    pub fn user_message(&self) -> String {
        match self.kind() {
            StoryboardErrorKind::Json(e) => e.summary(),
            StoryboardErrorKind::Config(e) => e.message.clone(),
            StoryboardErrorKind::Gemini(e) => e.kind.to_string(),
            StoryboardErrorKind::Analysis(e) => e.kind.to_string(),
            StoryboardErrorKind::Project(e) => e.kind.to_string(),
            StoryboardErrorKind::Export(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to StoryboardErrorKind
impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for StoryboardError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            StoryboardErrorKind::Gemini(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for Storyboard operations.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardResult, ConfigError};
///
/// fn api_key() -> StoryboardResult<String> {
///     Err(ConfigError::new("GEMINI_API_KEY is not set"))?
/// }
/// ```
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
