//! Plain-text log of the prompts behind an archive.

use crate::scene_file_stem;
use storyboard_core::{Project, Voice};

/// Project header followed by each scene's narration and image prompt.
///
/// ```
/// use storyboard_core::{Project, VisualStyle, Voice};
/// use storyboard_export::prompt_log;
///
/// let project = Project::new("Tiny", "x", vec![], vec![], VisualStyle::Anime);
/// assert_eq!(
///     prompt_log(&project, Voice::Kore),
///     "PROJECT: Tiny\nSTYLE: Anime\nVOICE: Kore\n\nSCENES LOG:\n\n"
/// );
/// ```
pub fn prompt_log(project: &Project, voice: Voice) -> String {
    let mut log = format!(
        "PROJECT: {}\nSTYLE: {}\nVOICE: {}\n\nSCENES LOG:\n\n",
        project.title(),
        project.style(),
        voice
    );
    for (index, scene) in project.scenes().iter().enumerate() {
        log.push_str(&format!(
            "--- {} ---\nCONTENT: {}\nVISUAL PROMPT: {}\n\n",
            scene_file_stem(index),
            scene.content(),
            scene.visual_prompt()
        ));
    }
    log
}
