//! Generated media held by a project.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Sample rate of narration PCM.
pub const PCM_SAMPLE_RATE_HZ: u32 = 24_000;
/// Channel count of narration PCM.
pub const PCM_CHANNELS: u16 = 1;
/// Bit depth of narration PCM.
pub const PCM_BITS_PER_SAMPLE: u16 = 16;

/// A decoded image returned by the image model.
///
/// # Examples
///
/// ```
/// use storyboard_core::ImageAsset;
///
/// let image = ImageAsset::new("image/png", vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(image.data_uri(), "data:image/png;base64,iVBORw==");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageAsset {
    /// MIME type reported by the model
    mime: String,
    /// Raw image bytes
    bytes: Vec<u8>,
}

impl ImageAsset {
    /// Wrap decoded image bytes.
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// `data:` URI suitable for embedding in HTML or JSON.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Narration audio: raw little-endian signed 16-bit PCM, mono, 24 kHz, no header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct AudioClip {
    /// Headerless PCM bytes
    pcm: Vec<u8>,
}

impl AudioClip {
    /// Wrap decoded PCM bytes.
    pub fn new(pcm: Vec<u8>) -> Self {
        Self { pcm }
    }

    /// Payload re-encoded as base64, the form the speech model returns.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.pcm)
    }

    /// Length of the clip in seconds.
    ///
    /// ```
    /// use storyboard_core::AudioClip;
    ///
    /// let clip = AudioClip::new(vec![0; 48_000]);
    /// assert_eq!(clip.duration_secs(), 1.0);
    /// ```
    pub fn duration_secs(&self) -> f64 {
        let bytes_per_second =
            PCM_SAMPLE_RATE_HZ as f64 * PCM_CHANNELS as f64 * (PCM_BITS_PER_SAMPLE / 8) as f64;
        self.pcm.len() as f64 / bytes_per_second
    }
}
