//! Per-session generation settings.

use crate::{ImageSize, Voice};
use serde::{Deserialize, Serialize};

/// Settings that apply to every generation call of a session.
///
/// # Examples
///
/// ```
/// use storyboard_core::{GenerationSettings, GenerationSettingsBuilder, ImageSize, Voice};
///
/// let settings = GenerationSettingsBuilder::default()
///     .image_size(ImageSize::TwoK)
///     .build()
///     .unwrap();
/// assert_eq!(*settings.image_size(), ImageSize::TwoK);
/// assert_eq!(*settings.narrator_voice(), Voice::Aoede);
///
/// let louder = settings.with_narrator_voice(Voice::Fenrir);
/// assert_eq!(*louder.narrator_voice(), Voice::Fenrir);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct GenerationSettings {
    /// Size tier for scene images
    #[serde(default)]
    image_size: ImageSize,
    /// Voice used to narrate every scene
    #[serde(default)]
    narrator_voice: Voice,
}
