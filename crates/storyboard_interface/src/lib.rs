//! Trait definitions for the remote generative model behind Storyboard.
//!
//! The pipeline only talks to the model through [`StoryModel`], so a REST
//! client, a mock, or another provider can be swapped in.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::StoryModel;
pub use types::{ImageRequest, SpeechRequest, StructuredRequest};
