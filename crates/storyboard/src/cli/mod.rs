//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyboard binary.

mod analyze;
mod commands;
mod render;
mod setup;

pub use analyze::{analyze_script, run_analyze};
pub use commands::{AnalyzeArgs, Cli, Commands, OutputFormat, RenderArgs, RetryArgs, ScriptArgs};
pub use render::{RenderSummary, render_script, run_render};
pub use setup::{gemini_session, load_config, read_script};
