//! Archive export error types.

/// Kinds of export errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExportErrorKind {
    /// Zip writer failed
    #[display("Failed to write archive: {}", _0)]
    Archive(String),
    /// Failed to create output directory
    #[display("Failed to create output directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// PCM payload is not whole 16-bit samples
    #[display("Invalid PCM payload: {}", _0)]
    InvalidPcm(String),
}

/// Export error with location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ExportError, ExportErrorKind};
///
/// let err = ExportError::new(ExportErrorKind::FileWrite("/tmp/out.zip".to_string()));
/// assert!(format!("{}", err).contains("/tmp/out.zip"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Export Error: {} at line {} in {}", kind, line, file)]
pub struct ExportError {
    /// The kind of error that occurred
    pub kind: ExportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExportError {
    /// Create a new export error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
