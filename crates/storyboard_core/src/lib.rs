//! Core data types for the Storyboard generation pipeline.
//!
//! A [`Project`] is the in-memory result of analyzing a story script: a title,
//! the characters, and the ordered scenes. Generated assets are attached to it
//! piecewise through [`ProjectUpdate`] values applied by [`Project::apply`],
//! which returns a new snapshot and leaves the original untouched.
//!
//! # Examples
//!
//! ```
//! use storyboard_core::{Character, Project, ProjectUpdate, Scene, SceneId, VisualStyle, Voice};
//!
//! let project = Project::new(
//!     "The Brave Little Fox",
//!     "Once upon a time...",
//!     vec![Character::new("Fox", "A small orange fox with a white tail", Voice::Puck)],
//!     vec![Scene::new(SceneId::from_index(0), "Opening", "Once upon a time...", "A forest at dawn", vec!["Fox".into()])],
//!     VisualStyle::default(),
//! );
//!
//! let next = project
//!     .apply(ProjectUpdate::SceneImageStarted { scene_id: SceneId::from_index(0) })
//!     .unwrap();
//! assert!(*next.scenes()[0].generating_image());
//! assert!(!*project.scenes()[0].generating_image());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod ids;
mod media;
mod project;
mod scene;
mod settings;
mod style;
mod update;

pub use character::Character;
pub use ids::{ProjectId, SceneId};
pub use media::{AudioClip, ImageAsset, PCM_BITS_PER_SAMPLE, PCM_CHANNELS, PCM_SAMPLE_RATE_HZ};
pub use project::Project;
pub use scene::Scene;
pub use settings::{GenerationSettings, GenerationSettingsBuilder};
pub use style::{ImageSize, SCENE_ASPECT_RATIO, VisualStyle, Voice};
pub use update::ProjectUpdate;
