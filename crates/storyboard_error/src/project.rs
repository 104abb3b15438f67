//! Project state error types.

/// Specific error conditions for project state operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProjectErrorKind {
    /// Script was empty or whitespace only
    #[display("Script is empty")]
    EmptyScript,
    /// Script file could not be read
    #[display("Failed to read script: {}", _0)]
    ScriptRead(String),
    /// An action needs a project but none has been analyzed yet
    #[display("No project has been created yet")]
    NoProject,
    /// No character with this name exists in the project
    #[display("Unknown character: {}", _0)]
    UnknownCharacter(String),
    /// No scene with this id exists in the project
    #[display("Unknown scene: {}", _0)]
    UnknownScene(String),
    /// The project was replaced by a new analysis while work was running
    #[display("Project was replaced by a new analysis")]
    Superseded,
}

/// Error type for project state operations.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ProjectError, ProjectErrorKind};
///
/// let err = ProjectError::new(ProjectErrorKind::UnknownScene("scene-9".into()));
/// assert!(format!("{}", err).contains("scene-9"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Project Error: {} at line {} in {}", kind, line, file)]
pub struct ProjectError {
    /// The specific error condition
    pub kind: ProjectErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ProjectError {
    /// Create a new ProjectError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProjectErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
