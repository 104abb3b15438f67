//! Story characters.

use crate::{ImageAsset, Voice};
use serde::Serialize;

/// A character extracted from the script.
///
/// The name is the lookup key. The description doubles as the visual prompt
/// fragment used for portraits and scene images and may be edited by the user.
#[derive(Debug, Clone, PartialEq, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Character name
    pub(crate) name: String,
    /// Visual description in English
    pub(crate) description: String,
    /// Voice suggested by the analysis
    pub(crate) voice: Voice,
    /// Reference portrait, once generated
    #[serde(skip)]
    pub(crate) preview: Option<ImageAsset>,
    /// True while a portrait request is outstanding
    #[serde(skip)]
    pub(crate) generating_preview: bool,
}

impl Character {
    /// Create a character without a portrait.
    pub fn new(name: impl Into<String>, description: impl Into<String>, voice: Voice) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            voice,
            preview: None,
            generating_preview: false,
        }
    }

    /// True once a portrait is attached.
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }
}
