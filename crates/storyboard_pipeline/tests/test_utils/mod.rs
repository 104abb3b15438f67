//! Test utilities for pipeline tests.
//!
//! This module provides a scripted mock of the model seam and sample data.

pub mod mock_model;

#[allow(unused_imports)]
pub use mock_model::{MockCall, MockStoryModel};

use serde_json::json;

/// Analysis answer with two characters and three scenes.
#[allow(dead_code)]
pub fn sample_analysis() -> String {
    json!({
        "title": "The Moon Rabbit",
        "characters": [
            {"name": "Rabbit", "description": "A white rabbit with long ears", "voice": "Puck"},
            {"name": "Owl", "description": "A wise grey owl with round glasses", "voice": "Charon"}
        ],
        "scenes": [
            {
                "title": "Looking Up",
                "content": "The rabbit looked up at the moon.",
                "visualPrompt": "A rabbit on a hill under a full moon",
                "charactersInScene": ["Rabbit"]
            },
            {
                "title": "The Owl Speaks",
                "content": "Why so sad, little one? asked the owl.",
                "visualPrompt": "An owl on a branch talking to a rabbit",
                "charactersInScene": ["Owl", "Rabbit"]
            },
            {
                "title": "Moral Lesson",
                "content": "Friends help us reach for our dreams.",
                "visualPrompt": "The rabbit and owl watching the stars together",
                "charactersInScene": ["Rabbit", "Owl"]
            }
        ]
    })
    .to_string()
}

/// Analysis answer for a different, single-scene story.
#[allow(dead_code)]
pub fn other_analysis() -> String {
    json!({
        "title": "The Lost Kite",
        "characters": [
            {"name": "Mia", "description": "A girl with a yellow raincoat", "voice": "Kore"}
        ],
        "scenes": [
            {
                "title": "Moral Lesson",
                "content": "Never give up.",
                "visualPrompt": "A kite in a blue sky",
                "charactersInScene": ["Mia"]
            }
        ]
    })
    .to_string()
}

/// Script text used with [`sample_analysis`].
#[allow(dead_code)]
pub const SAMPLE_SCRIPT: &str = "[Soft music]\nThe rabbit looked up at the moon.\n(Owl hoots) Why so sad, little one? asked the owl.";

use storyboard_error::{AnalysisErrorKind, ProjectErrorKind, StoryboardError, StoryboardErrorKind};

/// Project error kind carried by `err`, if any.
#[allow(dead_code)]
pub fn project_kind(err: &StoryboardError) -> Option<ProjectErrorKind> {
    match err.kind() {
        StoryboardErrorKind::Project(e) => Some(e.kind.clone()),
        _ => None,
    }
}

/// Analysis error kind carried by `err`, if any.
#[allow(dead_code)]
pub fn analysis_kind(err: &StoryboardError) -> Option<AnalysisErrorKind> {
    match err.kind() {
        StoryboardErrorKind::Analysis(e) => Some(e.kind.clone()),
        _ => None,
    }
}
