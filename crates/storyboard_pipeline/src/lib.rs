//! Storyboard generation pipeline.
//!
//! This crate turns a script into a [`storyboard_core::Project`] and then
//! fills the project with generated assets:
//!
//! - [`ScriptAnalyzer`] makes one structured call that yields title,
//!   characters and scenes.
//! - [`AssetGenerator`] makes single image and speech calls.
//! - [`ProjectStore`] holds the one authoritative project and rejects
//!   updates issued against a project that has since been replaced.
//! - [`StoryboardSession`] exposes the user actions on top of those pieces.
//! - [`AutoProcessor`] walks the project and generates whatever is missing.
//!
//! Every remote call goes through [`storyboard_retry::with_retry`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod auto;
mod generators;
pub mod prompts;
mod session;
mod store;

pub use analyzer::ScriptAnalyzer;
pub use auto::{AutoProcessReport, AutoProcessor};
pub use generators::AssetGenerator;
pub use session::StoryboardSession;
pub use store::{ProjectStore, UpdateOutcome};
