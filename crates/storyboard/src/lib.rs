//! Storyboard - children's story scripts to narrated storyboards
//!
//! Storyboard analyzes a story script into characters and scenes with one
//! structured model call, then generates a reference portrait per character,
//! an illustration and a narration per scene, and a cover thumbnail. The
//! finished project is exported as a zip ready for a video editor.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storyboard::{GeminiClient, StoryboardArchive, StoryboardConfig, StoryboardSession, VisualStyle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryboardConfig::load()?;
//!     let client = GeminiClient::new(config.gemini())?;
//!     let session = StoryboardSession::new(
//!         Arc::new(client),
//!         *config.retry(),
//!         config.generation().settings(),
//!     );
//!
//!     session.analyze("Once upon a time...", VisualStyle::default()).await?;
//!     session.auto_process().await?;
//!
//!     if let Some(project) = session.snapshot().await {
//!         let archive = StoryboardArchive::from_project(&project, *session.settings().narrator_voice())?;
//!         archive.write_to_dir("out").await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Storyboard is organized as a workspace with focused crates:
//!
//! - `storyboard_error` - Error types
//! - `storyboard_core` - Project, characters, scenes and their updates
//! - `storyboard_interface` - The `StoryModel` trait
//! - `storyboard_retry` - Retry with exponential backoff, and configuration
//! - `storyboard_models` - Gemini REST client
//! - `storyboard_pipeline` - Analyzer, generators, store, session, auto-processor
//! - `storyboard_export` - WAV framing and zip archive
//!
//! This crate (`storyboard`) re-exports everything for convenience and
//! provides the `storyboard` command-line tool.

pub use storyboard_core::*;
pub use storyboard_error::*;
pub use storyboard_export::*;
pub use storyboard_interface::*;
pub use storyboard_pipeline::*;
pub use storyboard_retry::*;

// The Gemini wire types stay under `storyboard_models`; their
// `GenerationConfig` would shadow the configuration section of the same name.
pub use storyboard_models::{GeminiClient, GeminiResult};

pub mod cli;
pub mod telemetry;
