//! Tests for auto-processing.

mod test_utils;

use std::sync::Arc;
use storyboard_core::{GenerationSettings, SceneId, VisualStyle};
use storyboard_error::{GeminiErrorKind, ProjectErrorKind};
use storyboard_pipeline::StoryboardSession;
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

/// Short label per call: `thumb`, `image:<visual prompt>` or `audio:<text>`.
fn labels(calls: &[MockCall]) -> Vec<String> {
    calls
        .iter()
        .filter_map(|call| match call {
            MockCall::Structured(_) => None,
            MockCall::Image(prompt, _) if prompt.starts_with("YouTube") => Some("thumb".to_string()),
            MockCall::Image(prompt, _) => {
                let scene = prompt.split("Scene: ").nth(1)?.split(". Characters").next()?;
                Some(format!("image:{}", scene))
            }
            MockCall::Speech(text, _) => Some(format!("audio:{}", text)),
        })
        .collect()
}

#[tokio::test]
async fn test_generates_in_fixed_order() -> anyhow::Result<()> {
    let session = session(MockStoryModel::new(sample_analysis()));
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;

    let report = session.auto_process().await?;
    assert!(*report.thumbnail_generated());
    assert_eq!(*report.images_generated(), 3);
    assert_eq!(*report.audio_generated(), 3);

    assert_eq!(
        labels(&session.model().calls()),
        vec![
            "thumb",
            "image:A rabbit on a hill under a full moon",
            "audio:The rabbit looked up at the moon.",
            "image:An owl on a branch talking to a rabbit",
            "audio:Why so sad, little one? asked the owl.",
            "image:The rabbit and owl watching the stars together",
            "audio:Friends help us reach for our dreams.",
        ]
    );
    assert!(session.is_complete().await);
    Ok(())
}

#[tokio::test]
async fn test_skips_present_assets() -> anyhow::Result<()> {
    let session = session(MockStoryModel::new(sample_analysis()));
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;
    session.generate_thumbnail().await?;
    session.generate_scene_image(&SceneId::from_index(1)).await?;
    session.generate_scene_audio(&SceneId::from_index(2)).await?;
    let before = session.model().call_count();

    let report = session.auto_process().await?;
    assert!(!*report.thumbnail_generated());
    assert_eq!(*report.images_generated(), 2);
    assert_eq!(*report.audio_generated(), 2);
    assert_eq!(session.model().call_count() - before, 4);

    let again = session.auto_process().await?;
    assert_eq!(again, Default::default());
    Ok(())
}

#[tokio::test]
async fn test_stops_at_first_failure_and_keeps_assets() -> anyhow::Result<()> {
    let model = MockStoryModel::new(sample_analysis()).with_speech_failures(vec![
        GeminiErrorKind::HttpError {
            status_code: 429,
            message: "RESOURCE_EXHAUSTED: quota exceeded".to_string(),
        },
    ]);
    let session = session(model);
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;

    assert!(session.auto_process().await.is_err());
    assert_eq!(
        labels(&session.model().calls()),
        vec![
            "thumb",
            "image:A rabbit on a hill under a full moon",
            "audio:The rabbit looked up at the moon.",
        ]
    );

    let project = session.snapshot().await.expect("project");
    assert!(project.thumbnail().is_some());
    assert!(project.scenes()[0].image().is_some());
    assert!(project.scenes()[0].audio().is_none());
    assert!(project.scenes()[1].image().is_none());
    assert!(!*project.scenes()[0].generating_audio());

    let report = session.auto_process().await?;
    assert!(!*report.thumbnail_generated());
    assert_eq!(*report.images_generated(), 2);
    assert_eq!(*report.audio_generated(), 3);
    assert!(session.is_complete().await);
    Ok(())
}

#[tokio::test]
async fn test_replaced_project_ends_run() -> anyhow::Result<()> {
    let gate = Gate::default();
    let model = MockStoryModel::new(sample_analysis())
        .with_analyses(vec![sample_analysis(), other_analysis()])
        .with_image_gate(gate.clone());
    let session = session(model);
    session.analyze(SAMPLE_SCRIPT, VisualStyle::default()).await?;

    let background = session.clone();
    let run = tokio::spawn(async move { background.auto_process().await });

    gate.entered.notified().await;
    session.analyze("A kite flew away.", VisualStyle::default()).await?;
    gate.release.notify_one();

    let err = run.await?.unwrap_err();
    assert_eq!(project_kind(&err), Some(ProjectErrorKind::Superseded));

    let current = session.snapshot().await.expect("project");
    assert_eq!(current.title(), "The Lost Kite");
    assert!(current.thumbnail().is_none());
    assert!(!*current.generating_thumbnail());
    Ok(())
}
