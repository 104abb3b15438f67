//! Prompt and schema builders.
//!
//! All functions here are pure so the exact text sent to the model can be
//! checked without a model.

use serde_json::{Value, json};
use storyboard_core::{Character, Project, Scene, VisualStyle, Voice};
use strum::IntoEnumIterator;

/// Stylistic preamble prefixed to portrait and scene image prompts.
pub const IMAGE_PREAMBLE: &str = "Masterpiece cinematic 3D animation style, Pixar inspired, soft lighting, vibrant colors, highly detailed: ";

/// Prefix `prompt` with [`IMAGE_PREAMBLE`].
pub fn with_image_preamble(prompt: &str) -> String {
    format!("{}{}", IMAGE_PREAMBLE, prompt)
}

/// Instructions for splitting a children's story into scenes.
///
/// The script is appended verbatim after the rules.
pub fn analysis_prompt(script: &str) -> String {
    format!(
        "TASK: Analyze the script and split it into small, detailed scenes for children.

MANDATORY RULES:
1. KEEP THE ORIGINAL TEXT: Do not summarize or rewrite. Keep 100% of the dialogue and narration from the original script.
2. REMOVE BRACKETED DIRECTIONS: In each scene's 'content', delete words inside parentheses () or square brackets [] that refer to (music), (sound effects), (camera cut) and similar, so the voice-over reads smoothly.
3. SPLIT SCENES FINELY: Start a new scene whenever the setting or the action changes. Do not merge too many sentences into one scene.
4. ADD A MORAL SCENE: Always create a FINAL scene titled \"Moral Lesson\". Its content is a short, warm message for children that sums up what the story teaches.
5. CHARACTERS: Identify every character and describe their appearance in detailed English (for example: \"A young boy with messy brown hair, wearing a red striped t-shirt and denim shorts\").
6. VISUAL PROMPT: For each scene, write an English description of the setting and action (for example: \"In a sunlit garden, the boy is chasing a blue butterfly\").

Script to process: {}",
        script
    )
}

/// Response schema for script analysis.
///
/// # Examples
///
/// ```
/// use storyboard_pipeline::prompts::analysis_schema;
///
/// let schema = analysis_schema();
/// let voices = &schema["properties"]["characters"]["items"]["properties"]["voice"]["enum"];
/// assert_eq!(voices.as_array().unwrap().len(), 6);
/// ```
pub fn analysis_schema() -> Value {
    let voices: Vec<&'static str> = Voice::iter().map(|v| v.api_name()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "characters": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": {
                            "type": "STRING",
                            "description": "Detailed visual description in English"
                        },
                        "voice": { "type": "STRING", "enum": voices }
                    },
                    "required": ["name", "description", "voice"]
                }
            },
            "scenes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "content": {
                            "type": "STRING",
                            "description": "Original text WITHOUT text in brackets like (music)"
                        },
                        "visualPrompt": {
                            "type": "STRING",
                            "description": "Visual description in English for image generation"
                        },
                        "charactersInScene": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["title", "content", "visualPrompt", "charactersInScene"]
                }
            }
        },
        "required": ["title", "characters", "scenes"]
    })
}

/// Reference portrait prompt, before the preamble.
///
/// # Examples
///
/// ```
/// use storyboard_core::{Character, VisualStyle, Voice};
/// use storyboard_pipeline::prompts::portrait_prompt;
///
/// let fox = Character::new("Fox", "An orange fox", Voice::Puck);
/// assert_eq!(
///     portrait_prompt(&fox, VisualStyle::Anime),
///     "Portrait of character Fox. Appearance: An orange fox. Style: Anime, neutral background, high detail."
/// );
/// ```
pub fn portrait_prompt(character: &Character, style: VisualStyle) -> String {
    format!(
        "Portrait of character {}. Appearance: {}. Style: {}, neutral background, high detail.",
        character.name(),
        character.description(),
        style
    )
}

/// Scene illustration prompt, before the preamble.
///
/// Only characters listed in the scene are described, in project order.
pub fn scene_prompt(project: &Project, scene: &Scene) -> String {
    let cast = project
        .cast_of(scene)
        .iter()
        .map(|c| format!("{} looks like: {}", c.name(), c.description()))
        .collect::<Vec<_>>()
        .join(". ");
    format!(
        "Style: {}. Scene: {}. Characters appearance: {}. High consistency, 8k.",
        project.style(),
        scene.visual_prompt(),
        cast
    )
}

/// Cover thumbnail prompt. Sent without the preamble.
pub fn thumbnail_prompt(project: &Project) -> String {
    let cast = project
        .characters()
        .iter()
        .map(|c| format!("{}: {}", c.name(), c.description()))
        .collect::<Vec<_>>()
        .join(". ");
    format!(
        "YouTube Video Thumbnail for a story titled \"{}\". Style: {}. Vibrant, eye-catching, cinematic lighting. Main characters: {}. High quality, 4k, professional composition with space for text.",
        project.title(),
        project.style(),
        cast
    )
}
