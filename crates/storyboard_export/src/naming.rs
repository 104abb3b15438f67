//! File and folder names inside the archive.

/// Cover image at the archive root.
pub const THUMBNAIL_FILE: &str = "00_Thumbnail.png";
/// Prompt and script log at the archive root.
pub const PROMPT_LOG_FILE: &str = "00_Prompts_And_Script.txt";
/// Folder holding scene illustrations.
pub const VISUALS_DIR: &str = "01_Visuals";
/// Folder holding scene narrations.
pub const AUDIO_DIR: &str = "02_Audio";

/// Root folder used when the title leaves nothing usable after sanitizing.
pub const FALLBACK_ROOT: &str = "Storyboard";

const UNSAFE_TITLE_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Replace characters that are not allowed in file names with `-`.
///
/// ```
/// use storyboard_export::sanitize_title;
///
/// assert_eq!(sanitize_title("Why? Because: <yes>"), "Why- Because- -yes-");
/// ```
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if UNSAFE_TITLE_CHARS.contains(&c) { '-' } else { c })
        .collect()
}

/// Root folder name for an archive of `title`.
///
/// The title is sanitized and trimmed. A result that is empty or made only of
/// dots becomes [`FALLBACK_ROOT`], so every entry stays inside one relative
/// folder.
///
/// ```
/// use storyboard_export::archive_root;
///
/// assert_eq!(archive_root(" Moon: Rabbit "), "Moon- Rabbit");
/// assert_eq!(archive_root(".."), "Storyboard");
/// assert_eq!(archive_root("   "), "Storyboard");
/// ```
pub fn archive_root(title: &str) -> String {
    let sanitized = sanitize_title(title);
    let trimmed = sanitized.trim();
    if trimmed.chars().all(|c| c == '.') {
        FALLBACK_ROOT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// File stem for the scene at zero-based `index`: `Scene_001` for index 0.
///
/// ```
/// use storyboard_export::scene_file_stem;
///
/// assert_eq!(scene_file_stem(0), "Scene_001");
/// assert_eq!(scene_file_stem(11), "Scene_012");
/// ```
pub fn scene_file_stem(index: usize) -> String {
    format!("Scene_{:03}", index + 1)
}

/// Name offered for the downloaded archive.
///
/// ```
/// use storyboard_export::download_name;
///
/// assert_eq!(download_name("Why?"), "Why-_Ready_To_Edit.zip");
/// assert_eq!(download_name(""), "Storyboard_Ready_To_Edit.zip");
/// ```
pub fn download_name(title: &str) -> String {
    format!("{}_Ready_To_Edit.zip", archive_root(title))
}
