//! Error types for the Storyboard library.
//!
//! This crate provides the foundation error types used throughout the Storyboard workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{ProjectError, ProjectErrorKind, StoryboardResult};
//!
//! fn analyze(script: &str) -> StoryboardResult<()> {
//!     if script.trim().is_empty() {
//!         Err(ProjectError::new(ProjectErrorKind::EmptyScript))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(analyze("   ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod config;
mod error;
mod export;
mod gemini;
mod json;
mod project;

pub use analysis::{AnalysisError, AnalysisErrorKind};
pub use config::ConfigError;
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use export::{ExportError, ExportErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError, is_transient_message};
pub use json::JsonError;
pub use project::{ProjectError, ProjectErrorKind};
