//! Gemini-specific error types and retry classification.

/// Message fragments that mark a remote failure as transient server overload.
const TRANSIENT_MARKERS: [&str; 5] = ["500", "503", "INTERNAL", "overloaded", "UNAVAILABLE"];

/// Returns true if a failure message carries one of the transient overload markers.
///
/// # Examples
///
/// ```
/// use storyboard_error::is_transient_message;
///
/// assert!(is_transient_message("HTTP 503 error: model is overloaded"));
/// assert!(!is_transient_message("HTTP 400 error: INVALID_ARGUMENT"));
/// ```
pub fn is_transient_message(message: &str) -> bool {
    TRANSIENT_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request body could not be assembled
    #[display("Failed to build Gemini request: {}", _0)]
    RequestBuild(String),
    /// API request failed before a response arrived
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and response body
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Invalid Gemini response: {}", _0)]
    InvalidResponse(String),
    /// Base64 decoding failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// Structured generation returned no text
    #[display("No text data returned from Gemini")]
    NoTextData,
    /// Image generation returned no inline image
    #[display("No image data returned from Gemini")]
    NoImageData,
    /// Speech generation returned no inline audio
    #[display("No audio data returned from Gemini")]
    NoAudioData,
}

impl GeminiErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Missing payloads in an otherwise successful response are never retried.
    /// Everything else is judged by the transient markers in its message.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::NoTextData
            | GeminiErrorKind::NoImageData
            | GeminiErrorKind::NoAudioData
            | GeminiErrorKind::MissingApiKey
            | GeminiErrorKind::RequestBuild(_) => false,
            other => is_transient_message(&other.to_string()),
        }
    }

    /// True for the "no data returned" family.
    pub fn is_missing_payload(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::NoTextData | GeminiErrorKind::NoImageData | GeminiErrorKind::NoAudioData
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 400,
///     message: "INVALID_ARGUMENT".to_string(),
/// });
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient server overload (500, 503, INTERNAL, UNAVAILABLE, overloaded)
    /// should return true. Quota, policy and malformed-request errors should
    /// return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
