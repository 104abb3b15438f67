//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storyboard_core::{GenerationSettings, ImageSize, VisualStyle, Voice};
use storyboard_retry::RetryPolicy;

/// Storyboard - turn a children's story script into a narrated, illustrated storyboard
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn a children's story script into a narrated, illustrated storyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true, env = "STORYBOARD_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a script into characters and scenes and print the result
    Analyze(AnalyzeArgs),

    /// Analyze a script, generate every asset and write the zip archive
    Render(RenderArgs),
}

/// Script input shared by all commands
#[derive(Args, Debug, Clone)]
pub struct ScriptArgs {
    /// Path to the story script (plain text)
    #[arg(long)]
    pub script: PathBuf,

    /// Visual style, e.g. "3D Pixar", anime, oil-painting (defaults to config)
    #[arg(long)]
    pub style: Option<VisualStyle>,
}

/// Arguments for `analyze`
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Script to analyze
    #[command(flatten)]
    pub input: ScriptArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `render`
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Script to render
    #[command(flatten)]
    pub input: ScriptArgs,

    /// Narrator voice (defaults to config)
    #[arg(long)]
    pub voice: Option<Voice>,

    /// Scene image size: 1K, 2K or 4K (defaults to config)
    #[arg(long)]
    pub image_size: Option<ImageSize>,

    /// Directory the archive is written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not generate character reference portraits
    #[arg(long)]
    pub skip_previews: bool,

    /// Retry overrides
    #[command(flatten)]
    pub retry: RetryArgs,
}

impl RenderArgs {
    /// `base` with the voice and image size overrides applied.
    pub fn settings(&self, base: GenerationSettings) -> GenerationSettings {
        let settings = match self.voice {
            Some(voice) => base.with_narrator_voice(voice),
            None => base,
        };
        match self.image_size {
            Some(size) => settings.with_image_size(size),
            None => settings,
        }
    }
}

/// Retry overrides
#[derive(Args, Debug, Clone, Default)]
pub struct RetryArgs {
    /// Disable retries entirely
    #[arg(long, conflicts_with_all = ["max_retries", "retry_backoff_ms"])]
    pub no_retry: bool,

    /// Retries after the first attempt
    #[arg(long)]
    pub max_retries: Option<usize>,

    /// Delay before the first retry, doubled for each further retry
    #[arg(long)]
    pub retry_backoff_ms: Option<u64>,
}

impl RetryArgs {
    /// `base` with these overrides applied.
    pub fn policy(&self, base: RetryPolicy) -> RetryPolicy {
        if self.no_retry {
            return RetryPolicy::disabled();
        }
        let policy = match self.max_retries {
            Some(max) => base.with_max_retries(max),
            None => base,
        };
        match self.retry_backoff_ms {
            Some(ms) => policy.with_initial_backoff_ms(ms),
            None => policy,
        }
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
