//! `storyboard render` handler.

use crate::cli::{RenderArgs, gemini_session, read_script};
use std::path::{Path, PathBuf};
use storyboard_core::VisualStyle;
use storyboard_error::StoryboardResult;
use storyboard_export::StoryboardArchive;
use storyboard_interface::StoryModel;
use storyboard_pipeline::{AutoProcessReport, StoryboardSession};
use storyboard_retry::StoryboardConfig;
use tracing::{info, warn};

/// What a render produced.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    /// Where the archive was written
    pub archive: PathBuf,
    /// Character portraits generated
    pub previews: usize,
    /// Auto-process counts
    pub report: AutoProcessReport,
}

/// Render the script named in `args` with Gemini and print the archive path.
#[tracing::instrument(skip_all, fields(script = %args.input.script.display()))]
pub async fn run_render(args: &RenderArgs, config: &StoryboardConfig) -> StoryboardResult<()> {
    let script = read_script(&args.input.script)?;
    let style = args.input.style.unwrap_or(*config.generation().style());
    let session = gemini_session(
        config,
        args.retry.policy(*config.retry()),
        args.settings(config.generation().settings()),
    )?;

    let summary = render_script(&session, &script, style, args.skip_previews, &args.output_dir).await?;
    println!(
        "Wrote {} ({} portraits, {} images, {} narrations{})",
        summary.archive.display(),
        summary.previews,
        summary.report.images_generated(),
        summary.report.audio_generated(),
        if *summary.report.thumbnail_generated() {
            ", thumbnail"
        } else {
            ""
        }
    );
    Ok(())
}

/// Analyze, generate portraits, auto-process, then write the archive.
///
/// A failed portrait is logged and the render continues, since portraits are
/// not part of the archive. If auto-processing fails, the archive is still
/// written with the assets generated so far and the failure is returned.
pub async fn render_script<M: StoryModel>(
    session: &StoryboardSession<M>,
    script: &str,
    style: VisualStyle,
    skip_previews: bool,
    output_dir: &Path,
) -> StoryboardResult<RenderSummary> {
    let project = session.analyze(script, style).await?;
    info!(
        title = %project.title(),
        scenes = project.scenes().len(),
        "Rendering storyboard"
    );

    let previews = if skip_previews {
        0
    } else {
        match session.generate_all_character_previews().await {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "Character portraits incomplete");
                0
            }
        }
    };

    let processed = session.auto_process().await;

    let project = session.store().current().await?;
    let archive = StoryboardArchive::from_project(&project, *session.settings().narrator_voice())?;
    let path = archive.write_to_dir(output_dir).await?;

    let report = processed?;
    Ok(RenderSummary {
        archive: path,
        previews,
        report,
    })
}
