//! Script analysis error types.

/// Why a script could not be turned into a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AnalysisErrorKind {
    /// The model call failed (after retries, if any applied)
    #[display("Script analysis failed: {}", _0)]
    Remote(String),
    /// The model answered but the payload did not match the expected shape
    #[display("Script analysis returned an unreadable result: {}", _0)]
    MalformedResponse(String),
}

/// Script analysis error with location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{AnalysisError, AnalysisErrorKind};
///
/// let err = AnalysisError::new(AnalysisErrorKind::MalformedResponse("missing field `scenes`".into()));
/// assert!(format!("{}", err).contains("scenes"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Analysis Error: {} at line {} in {}", kind, line, file)]
pub struct AnalysisError {
    /// The specific error condition
    pub kind: AnalysisErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AnalysisError {
    /// Create a new AnalysisError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AnalysisErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
