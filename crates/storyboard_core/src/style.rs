//! Closed vocabularies chosen by the user: art style, voice, and image size.

use serde::{Deserialize, Serialize};

/// Aspect ratio requested for every generated image.
pub const SCENE_ASPECT_RATIO: &str = "16:9";

/// Art direction applied to every image prompt of a project.
///
/// Parses from the display name or a kebab-case alias, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use storyboard_core::VisualStyle;
/// use std::str::FromStr;
///
/// assert_eq!(VisualStyle::default(), VisualStyle::Pixar3d);
/// assert_eq!(VisualStyle::Pixar3d.to_string(), "3D Pixar");
/// assert_eq!(VisualStyle::from_str("oil-painting").unwrap(), VisualStyle::OilPainting);
/// assert_eq!(VisualStyle::from_str("Oil Painting").unwrap(), VisualStyle::OilPainting);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum VisualStyle {
    /// Pixar-like 3D animation
    #[default]
    #[strum(to_string = "3D Pixar", serialize = "3d-pixar")]
    #[serde(rename = "3D Pixar", alias = "3d-pixar")]
    Pixar3d,
    /// Live-action film look
    #[strum(to_string = "Cinematic", serialize = "cinematic")]
    #[serde(rename = "Cinematic", alias = "cinematic")]
    Cinematic,
    /// Japanese animation
    #[strum(to_string = "Anime", serialize = "anime")]
    #[serde(rename = "Anime", alias = "anime")]
    Anime,
    /// Photorealistic
    #[strum(to_string = "Realistic", serialize = "realistic")]
    #[serde(rename = "Realistic", alias = "realistic")]
    Realistic,
    /// Generic 3D render
    #[strum(to_string = "3D Render", serialize = "3d-render")]
    #[serde(rename = "3D Render", alias = "3d-render")]
    Render3d,
    /// Neon-lit cyberpunk
    #[strum(to_string = "Cyberpunk", serialize = "cyberpunk")]
    #[serde(rename = "Cyberpunk", alias = "cyberpunk")]
    Cyberpunk,
    /// Classical oil painting
    #[strum(to_string = "Oil Painting", serialize = "oil-painting")]
    #[serde(rename = "Oil Painting", alias = "oil-painting")]
    OilPainting,
}

/// Prebuilt speech voices offered by the speech model.
///
/// # Examples
///
/// ```
/// use storyboard_core::Voice;
/// use std::str::FromStr;
///
/// assert_eq!(Voice::default(), Voice::Aoede);
/// assert_eq!(Voice::from_str("kore").unwrap(), Voice::Kore);
/// assert_eq!(Voice::Fenrir.to_string(), "Fenrir");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Voice {
    /// Kore
    Kore,
    /// Puck
    Puck,
    /// Charon
    Charon,
    /// Fenrir
    Fenrir,
    /// Zephyr
    Zephyr,
    /// Aoede, the default narrator
    #[default]
    Aoede,
}

impl Voice {
    /// Name the speech model expects in `prebuiltVoiceConfig`.
    pub fn api_name(&self) -> &'static str {
        self.into()
    }
}

/// Resolution tier for generated images.
///
/// # Examples
///
/// ```
/// use storyboard_core::ImageSize;
/// use std::str::FromStr;
///
/// assert_eq!(ImageSize::default().as_str(), "1K");
/// assert_eq!(ImageSize::from_str("4k").unwrap(), ImageSize::FourK);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ImageSize {
    /// 1K, used for previews and thumbnails
    #[default]
    #[strum(serialize = "1K")]
    #[serde(rename = "1K")]
    OneK,
    /// 2K
    #[strum(serialize = "2K")]
    #[serde(rename = "2K")]
    TwoK,
    /// 4K
    #[strum(serialize = "4K")]
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    /// Tier label as sent to the image model.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
