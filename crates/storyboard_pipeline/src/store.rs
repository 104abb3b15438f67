//! The authoritative project store.

use std::sync::Arc;
use storyboard_core::{Project, ProjectId, ProjectUpdate};
use storyboard_error::{ProjectError, ProjectErrorKind, StoryboardResult};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Whether an update reached the project it was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOutcome {
    /// The update was applied
    Applied,
    /// The project was replaced since the update was issued; nothing changed
    Stale,
}

/// Holds the current project and applies updates to it.
///
/// Each update names the [`ProjectId`] it was computed for. Updates for a
/// project that is no longer current are dropped and reported as
/// [`UpdateOutcome::Stale`]. The lock is never held across a model call.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    inner: Arc<RwLock<Option<Project>>>,
}

impl ProjectStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current project wholesale.
    pub async fn replace(&self, project: Project) {
        let mut guard = self.inner.write().await;
        if let Some(previous) = guard.as_ref() {
            info!(previous = %previous.id(), next = %project.id(), "Replacing project");
        }
        *guard = Some(project);
    }

    /// Copy of the current project, if any.
    pub async fn snapshot(&self) -> Option<Project> {
        self.inner.read().await.clone()
    }

    /// Copy of the current project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectErrorKind::NoProject`] before the first analysis.
    pub async fn current(&self) -> StoryboardResult<Project> {
        self.snapshot()
            .await
            .ok_or_else(|| ProjectError::new(ProjectErrorKind::NoProject).into())
    }

    /// Id of the current project, if any.
    pub async fn current_id(&self) -> Option<ProjectId> {
        self.inner.read().await.as_ref().map(|p| *p.id())
    }

    /// Apply `update` if `project_id` is still current.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error when the update names an unknown
    /// character or scene. The stored project is unchanged in that case.
    pub async fn apply(
        &self,
        project_id: ProjectId,
        update: ProjectUpdate,
    ) -> StoryboardResult<UpdateOutcome> {
        let mut guard = self.inner.write().await;
        match guard.as_ref() {
            Some(current) if *current.id() == project_id => {
                debug!(update = update.as_ref(), project_id = %project_id, "Applying update");
                let next = current.apply(update)?;
                *guard = Some(next);
                Ok(UpdateOutcome::Applied)
            }
            _ => {
                warn!(
                    update = update.as_ref(),
                    project_id = %project_id,
                    "Dropping update for a project that is no longer current"
                );
                Ok(UpdateOutcome::Stale)
            }
        }
    }
}
