use std::io::Write;
use storyboard_core::{ImageSize, VisualStyle, Voice};
use storyboard_retry::{RetryPolicy, StoryboardConfig};

#[test]
fn defaults_match_documented_values() {
    let config = StoryboardConfig::default();
    assert_eq!(config.gemini().analysis_model(), "gemini-3-pro-preview");
    assert_eq!(config.gemini().image_model(), "gemini-3-pro-image-preview");
    assert_eq!(config.gemini().speech_model(), "gemini-2.5-flash-preview-tts");
    assert_eq!(*config.retry(), RetryPolicy::default());
    assert_eq!(*config.generation().style(), VisualStyle::Pixar3d);
}

#[test]
fn file_overrides_layer_on_defaults() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r#"
[gemini]
base_url = "http://localhost:8080"

[retry]
max_retries = 2

[generation]
style = "Oil Painting"
narrator_voice = "Kore"
image_size = "4K"
"#
    )?;

    let config = StoryboardConfig::from_file(file.path())?;

    assert_eq!(config.gemini().base_url(), "http://localhost:8080");
    // Untouched keys keep their bundled values
    assert_eq!(config.gemini().speech_model(), "gemini-2.5-flash-preview-tts");
    assert_eq!(*config.retry().max_retries(), 2);
    assert_eq!(*config.retry().initial_backoff_ms(), 3000);
    assert_eq!(*config.generation().style(), VisualStyle::OilPainting);

    let settings = config.generation().settings();
    assert_eq!(*settings.narrator_voice(), Voice::Kore);
    assert_eq!(*settings.image_size(), ImageSize::FourK);
    Ok(())
}

#[test]
fn invalid_values_are_config_errors() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[generation]\nnarrator_voice = \"Robot\"")?;

    let err = StoryboardConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    assert!(StoryboardConfig::from_file("/nonexistent/storyboard.toml").is_err());
}
