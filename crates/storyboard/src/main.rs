//! Storyboard CLI binary.
//!
//! This binary provides command-line access to Storyboard:
//! - Analyze a script into characters and scenes
//! - Render a script into a zip of illustrations, narration and prompts

use clap::Parser;
use storyboard::cli::{Cli, Commands, load_config, run_analyze, run_render};
use storyboard::telemetry::init_console_telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_console_telemetry(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &config).await?,
        Commands::Render(args) => run_render(args, &config).await?,
    }

    Ok(())
}
