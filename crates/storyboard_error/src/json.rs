//! JSON encoding failures.

/// A value could not be rendered as JSON.
///
/// `subject` names what was being encoded, such as `project`.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Failed to encode {} as JSON: {} ({}:{})", subject, message, file, line)]
pub struct JsonError {
    /// What was being encoded
    pub subject: String,
    /// Message from the encoder
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Record a failure to encode `subject`.
    ///
    /// ```
    /// use storyboard_error::JsonError;
    ///
    /// let err = JsonError::new("project", "key must be a string");
    /// assert_eq!(err.subject, "project");
    /// assert!(err.to_string().starts_with("Failed to encode project as JSON: key must be a string"));
    /// ```
    #[track_caller]
    pub fn new(subject: impl Into<String>, message: impl ToString) -> Self {
        let location = std::panic::Location::caller();
        Self {
            subject: subject.into(),
            message: message.to_string(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Message without the source location.
    pub fn summary(&self) -> String {
        format!("Failed to encode {} as JSON: {}", self.subject, self.message)
    }
}
