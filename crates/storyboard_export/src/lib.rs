//! Archive export for finished Storyboard projects.
//!
//! A project is packaged as a zip with one root folder named after the
//! sanitized title, or `Storyboard` when the title leaves nothing usable:
//!
//! ```text
//! {title}/
//! ├── 00_Thumbnail.png
//! ├── 00_Prompts_And_Script.txt
//! ├── 01_Visuals/
//! │   └── Scene_001.png
//! └── 02_Audio/
//!     └── Scene_001.wav
//! ```
//!
//! Assets the project does not have yet are left out. Narration is stored as
//! raw PCM in the project and wrapped in a WAV header on the way out.
//!
//! # Example
//!
//! ```rust
//! use storyboard_export::{StoryboardArchive, sanitize_title};
//! use storyboard_core::{Project, Voice, VisualStyle};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let project = Project::new("A: Tale", "Once...", vec![], vec![], VisualStyle::default());
//! let archive = StoryboardArchive::from_project(&project, Voice::Aoede)?;
//! assert_eq!(archive.root(), "A- Tale");
//! assert_eq!(archive.download_name(), "A- Tale_Ready_To_Edit.zip");
//! let bytes = archive.to_zip_bytes()?;
//! assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod naming;
mod prompt_log;
mod wav;

pub use archive::{ArchiveEntry, StoryboardArchive};
pub use naming::{
    AUDIO_DIR, FALLBACK_ROOT, PROMPT_LOG_FILE, THUMBNAIL_FILE, VISUALS_DIR, archive_root,
    download_name, sanitize_title, scene_file_stem,
};
pub use prompt_log::prompt_log;
pub use wav::{WAV_HEADER_LEN, decode_pcm_samples, wav_header, wrap_pcm};
