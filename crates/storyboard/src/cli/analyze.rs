//! `storyboard analyze` handler.

use crate::cli::{AnalyzeArgs, OutputFormat, gemini_session, read_script};
use storyboard_core::{Project, VisualStyle};
use storyboard_error::{JsonError, StoryboardResult};
use storyboard_interface::StoryModel;
use storyboard_pipeline::StoryboardSession;
use storyboard_retry::StoryboardConfig;

/// Analyze the script named in `args` with Gemini and print the project.
#[tracing::instrument(skip_all, fields(script = %args.input.script.display()))]
pub async fn run_analyze(args: &AnalyzeArgs, config: &StoryboardConfig) -> StoryboardResult<()> {
    let script = read_script(&args.input.script)?;
    let style = args.input.style.unwrap_or(*config.generation().style());
    let session = gemini_session(config, *config.retry(), config.generation().settings())?;

    let project = session.analyze(&script, style).await?;
    println!("{}", analyze_output(&project, args.format)?);
    Ok(())
}

/// Analyze `script` and render the project in `format`.
pub async fn analyze_script<M: StoryModel>(
    session: &StoryboardSession<M>,
    script: &str,
    style: VisualStyle,
    format: OutputFormat,
) -> StoryboardResult<String> {
    let project = session.analyze(script, style).await?;
    analyze_output(&project, format)
}

fn analyze_output(project: &Project, format: OutputFormat) -> StoryboardResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(project)
            .map_err(|e| JsonError::new("project", e).into()),
        OutputFormat::Human => Ok(human_summary(project)),
    }
}

fn human_summary(project: &Project) -> String {
    let mut out = format!("{}\nStyle: {}\n", project.title(), project.style());

    out.push_str(&format!("\nCharacters ({}):\n", project.characters().len()));
    for character in project.characters() {
        out.push_str(&format!(
            "  {} [{}]: {}\n",
            character.name(),
            character.voice(),
            character.description()
        ));
    }

    out.push_str(&format!("\nScenes ({}):\n", project.scenes().len()));
    for scene in project.scenes() {
        out.push_str(&format!("  {} {}\n", scene.id(), scene.title()));
        out.push_str(&format!("    Narration: {}\n", scene.content()));
        out.push_str(&format!("    Visual: {}\n", scene.visual_prompt()));
        if !scene.characters_in_scene().is_empty() {
            out.push_str(&format!(
                "    Cast: {}\n",
                scene.characters_in_scene().join(", ")
            ));
        }
    }
    out
}
