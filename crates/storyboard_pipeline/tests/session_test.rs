//! Tests for session actions.

mod test_utils;

use std::sync::Arc;
use storyboard_core::{GenerationSettings, ImageSize, SceneId, VisualStyle, Voice};
use storyboard_error::{GeminiErrorKind, ProjectErrorKind};
use storyboard_pipeline::prompts::IMAGE_PREAMBLE;
use storyboard_pipeline::{StoryboardSession, UpdateOutcome};
use storyboard_retry::RetryPolicy;
use test_utils::mock_model::Gate;
use test_utils::{
    MockCall, MockStoryModel, SAMPLE_SCRIPT, other_analysis, project_kind, sample_analysis,
};

fn session(model: MockStoryModel) -> StoryboardSession<MockStoryModel> {
    StoryboardSession::new(
        Arc::new(model),
        RetryPolicy::disabled(),
        GenerationSettings::default(),
    )
}

fn bad_request() -> GeminiErrorKind {
    GeminiErrorKind::HttpError {
        status_code: 400,
        message: "INVALID_ARGUMENT: prompt rejected".to_string(),
    }
}

#[tokio::test]
async fn test_actions_need_a_project() {
    let session = session(MockStoryModel::new(sample_analysis()));

    let err = session
        .generate_scene_image(&SceneId::from_index(0))
        .await
        .unwrap_err();
    assert_eq!(project_kind(&err), Some(ProjectErrorKind::NoProject));

    let err = session.auto_process().await.unwrap_err();
    assert_eq!(project_kind(&err), Some(ProjectErrorKind::NoProject));
    assert!(!session.is_complete().await);
    assert_eq!(session.model().call_count(), 0);
}

#[tokio::test]
async fn test_character_preview() -> anyhow::Result<()> {
    let session = session(MockStoryModel::new(sample_analysis()));
    session.analyze(SAMPLE_SCRIPT, VisualStyle::Anime).await?;

    let outcome = session.generate_character_preview("Owl").await?;
    assert_eq!(outcome, UpdateOutcome::Applied);

    let project = session.snapshot().await.expect("project");
    let owl = project.character("Owl").expect("owl");
    assert!(owl.has_preview());
    assert!(!*owl.generating_preview());
    assert!(!project.character("Rabbit").expect("rabbit").has_preview());

    assert_eq!(
        session.model().calls().last(),
        Some(&MockCall::Image(
            format!(
                "{}Portrait of character Owl. Appearance: A wise grey owl with round glasses. \
                 Style: Anime, neutral background, high detail.",
                IMAGE_PREAMBLE
            ),
            ImageSize::OneK
        ))
    );
    Ok(())
}

#[tokio::test]
async fn test_unknown_character_and_scene() -> anyhow::Result<()> {
    let session = session(MockStoryModel::new(sample_analysis()));
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;

    let err = session.generate_character_preview("Wolf").await.unwrap_err();
    assert_eq!(
        project_kind(&err),
        Some(ProjectErrorKind::UnknownCharacter("Wolf".to_string()))
    );

    let err = session
        .generate_scene_audio(&SceneId::from("scene-42"))
        .await
        .unwrap_err();
    assert_eq!(
        project_kind(&err),
        Some(ProjectErrorKind::UnknownScene("scene-42".to_string()))
    );

    assert_eq!(session.model().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_failed_regeneration_keeps_previous_image() -> anyhow::Result<()> {
    let session = session(MockStoryModel::new(sample_analysis()));
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;
    let scene_id = SceneId::from_index(1);

    session.generate_scene_image(&scene_id).await?;
    let before = session.snapshot().await.expect("project");
    let first_image = before.scene(&scene_id).and_then(|s| s.image().clone());
    assert!(first_image.is_some());

    session.model().fail_next_image(bad_request());
    assert!(session.generate_scene_image(&scene_id).await.is_err());

    let after = session.snapshot().await.expect("project");
    let scene = after.scene(&scene_id).expect("scene");
    assert_eq!(scene.image().clone(), first_image);
    assert!(!*scene.generating_image());
    Ok(())
}

#[tokio::test]
async fn test_scene_audio_uses_narrator_voice() -> anyhow::Result<()> {
    let settings = GenerationSettings::default()
        .with_narrator_voice(Voice::Fenrir)
        .with_image_size(ImageSize::TwoK);
    let session = session(MockStoryModel::new(sample_analysis())).with_settings(settings);
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;

    session.generate_scene_audio(&SceneId::from_index(0)).await?;
    session.generate_scene_image(&SceneId::from_index(0)).await?;

    let calls = session.model().calls();
    assert_eq!(
        calls[1],
        MockCall::Speech("The rabbit looked up at the moon.".to_string(), Voice::Fenrir)
    );
    assert!(matches!(&calls[2], MockCall::Image(_, ImageSize::TwoK)));

    let project = session.snapshot().await.expect("project");
    let scene = &project.scenes()[0];
    assert!(scene.audio().is_some());
    assert!(!*scene.generating_audio());
    Ok(())
}

#[tokio::test]
async fn test_edits_flow_into_next_generation() -> anyhow::Result<()> {
    let session = session(MockStoryModel::new(sample_analysis()));
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;
    let scene_id = SceneId::from_index(0);

    session
        .edit_character_description("Rabbit", "A brown rabbit with a blue scarf")
        .await?;
    session
        .edit_scene_visual_prompt(&scene_id, "A rabbit on a rooftop at night")
        .await?;
    session.edit_scene_content(&scene_id, "The rabbit sighed.").await?;

    session.generate_scene_image(&scene_id).await?;
    session.generate_scene_audio(&scene_id).await?;

    let calls = session.model().calls();
    match &calls[1] {
        MockCall::Image(prompt, _) => {
            assert!(prompt.contains("Scene: A rabbit on a rooftop at night."));
            assert!(prompt.contains("Rabbit looks like: A brown rabbit with a blue scarf"));
        }
        other => panic!("unexpected call {:?}", other),
    }
    assert_eq!(
        calls[2],
        MockCall::Speech("The rabbit sighed.".to_string(), Voice::default())
    );
    Ok(())
}

#[tokio::test]
async fn test_all_character_previews() -> anyhow::Result<()> {
    let session = session(MockStoryModel::new(sample_analysis()));
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;

    session.generate_character_preview("Owl").await?;
    assert_eq!(session.generate_all_character_previews().await?, 1);
    assert_eq!(session.generate_all_character_previews().await?, 0);

    let project = session.snapshot().await.expect("project");
    assert!(project.characters().iter().all(|c| c.has_preview()));
    Ok(())
}

#[tokio::test]
async fn test_all_character_previews_stops_at_failure() -> anyhow::Result<()> {
    let session = session(
        MockStoryModel::new(sample_analysis()).with_image_failures(vec![bad_request()]),
    );
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;

    assert!(session.generate_all_character_previews().await.is_err());
    assert_eq!(session.model().call_count(), 2);

    let project = session.snapshot().await.expect("project");
    assert!(project.characters().iter().all(|c| !c.has_preview()));
    assert!(project.characters().iter().all(|c| !*c.generating_preview()));
    Ok(())
}

#[tokio::test]
async fn test_late_result_for_replaced_project_is_dropped() -> anyhow::Result<()> {
    let gate = Gate::default();
    let model = MockStoryModel::new(sample_analysis())
        .with_analyses(vec![sample_analysis(), other_analysis()])
        .with_image_gate(gate.clone());
    let session = session(model);
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;

    let background = session.clone();
    let pending = tokio::spawn(async move {
        background
            .generate_scene_image(&SceneId::from_index(0))
            .await
    });

    gate.entered.notified().await;
    let replacement = session.analyze("A kite flew away.", VisualStyle::default()).await?;
    gate.release.notify_one();

    let outcome = pending.await??;
    assert_eq!(outcome, UpdateOutcome::Stale);

    let current = session.snapshot().await.expect("project");
    assert_eq!(current.id(), replacement.id());
    assert_eq!(current.title(), "The Lost Kite");
    let scene = &current.scenes()[0];
    assert!(scene.image().is_none());
    assert!(!*scene.generating_image());
    Ok(())
}
