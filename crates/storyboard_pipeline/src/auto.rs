//! Generate everything a project is missing.

use crate::{StoryboardSession, UpdateOutcome};
use serde::Serialize;
use storyboard_error::{ProjectError, ProjectErrorKind, StoryboardResult};
use storyboard_interface::StoryModel;
use tracing::{info, instrument};

/// What an auto-process run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct AutoProcessReport {
    /// True if the thumbnail was generated by this run
    thumbnail_generated: bool,
    /// Scene images generated by this run
    images_generated: usize,
    /// Scene narrations generated by this run
    audio_generated: usize,
}

/// Drives a session through the project in a fixed order.
///
/// Thumbnail first if absent, then for each scene in order its image if
/// absent followed by its audio if absent. Steps run one at a time and each
/// step re-reads the current project, so assets produced meanwhile by other
/// actions are not generated twice.
///
/// The first failure ends the run and is returned; assets generated before it
/// stay in the project. If the project is replaced during the run, it ends
/// with [`ProjectErrorKind::Superseded`].
pub struct AutoProcessor<'a, M: StoryModel> {
    session: &'a StoryboardSession<M>,
}

impl<'a, M: StoryModel> AutoProcessor<'a, M> {
    /// Create a processor for `session`.
    pub fn new(session: &'a StoryboardSession<M>) -> Self {
        Self { session }
    }

    /// Run to completion or first failure.
    #[instrument(skip_all)]
    pub async fn run(&self) -> StoryboardResult<AutoProcessReport> {
        let start = self.session.store().current().await?;
        let project_id = *start.id();
        let mut report = AutoProcessReport::default();
        info!(project_id = %project_id, scenes = start.scenes().len(), "Auto-processing project");

        let project = self.session.pinned(project_id).await?;
        if project.thumbnail().is_none() {
            expect_applied(self.session.thumbnail_in(&project).await?)?;
            report.thumbnail_generated = true;
        }

        for scene in start.scenes() {
            let scene_id = scene.id();

            let project = self.session.pinned(project_id).await?;
            if project.scene(scene_id).is_some_and(|s| s.image().is_none()) {
                expect_applied(self.session.scene_image_in(&project, scene_id).await?)?;
                report.images_generated += 1;
            }

            let project = self.session.pinned(project_id).await?;
            if project.scene(scene_id).is_some_and(|s| s.audio().is_none()) {
                expect_applied(self.session.scene_audio_in(&project, scene_id).await?)?;
                report.audio_generated += 1;
            }
        }

        info!(
            thumbnail = report.thumbnail_generated,
            images = report.images_generated,
            audio = report.audio_generated,
            "Auto-processing finished"
        );
        Ok(report)
    }
}

fn expect_applied(outcome: UpdateOutcome) -> StoryboardResult<()> {
    match outcome {
        UpdateOutcome::Applied => Ok(()),
        UpdateOutcome::Stale => Err(ProjectError::new(ProjectErrorKind::Superseded).into()),
    }
}
