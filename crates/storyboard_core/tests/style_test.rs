use std::str::FromStr;
use storyboard_core::{ImageSize, VisualStyle, Voice};
use strum::IntoEnumIterator;

#[test]
fn style_names_match_display_labels() {
    let names: Vec<String> = VisualStyle::iter().map(|s| s.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "3D Pixar",
            "Cinematic",
            "Anime",
            "Realistic",
            "3D Render",
            "Cyberpunk",
            "Oil Painting"
        ]
    );
}

#[test]
fn styles_parse_from_labels_and_aliases() {
    for style in VisualStyle::iter() {
        assert_eq!(VisualStyle::from_str(&style.to_string()).unwrap(), style);
    }
    assert_eq!(VisualStyle::from_str("3d-render").unwrap(), VisualStyle::Render3d);
    assert!(VisualStyle::from_str("watercolor").is_err());
}

#[test]
fn six_voices_with_aoede_default() {
    assert_eq!(Voice::iter().count(), 6);
    assert_eq!(Voice::default().api_name(), "Aoede");
}

#[test]
fn image_sizes_use_tier_labels() {
    let labels: Vec<&str> = ImageSize::iter().map(|s| s.as_str()).collect();
    assert_eq!(labels, vec!["1K", "2K", "4K"]);
}
