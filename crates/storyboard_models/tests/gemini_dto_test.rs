use serde_json::json;
use storyboard_models::{ErrorResponse, GenerateContentResponse};

#[test]
fn blocked_candidate_has_no_parts() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{"finishReason": "SAFETY"}]
    }))
    .unwrap();

    assert!(response.first_parts().is_empty());
    assert!(response.text().is_none());
    assert!(response.first_inline_data().is_none());
}

#[test]
fn empty_response_parses() {
    let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.candidates().is_empty());
}

#[test]
fn only_first_candidate_is_read() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [
            {"content": {"parts": [{"text": "first"}]}},
            {"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "AA=="}}]}}
        ]
    }))
    .unwrap();

    assert_eq!(response.text().as_deref(), Some("first"));
    assert!(response.first_inline_data().is_none());
}

#[test]
fn error_summary_prefers_status() {
    let err: ErrorResponse = serde_json::from_value(json!({
        "error": {"code": 500, "message": "Internal error encountered.", "status": "INTERNAL"}
    }))
    .unwrap();
    assert_eq!(err.summary(), "INTERNAL: Internal error encountered.");

    let err: ErrorResponse = serde_json::from_value(json!({
        "error": {"code": 429, "message": "Quota exceeded."}
    }))
    .unwrap();
    assert_eq!(err.summary(), "Quota exceeded.");
}

#[test]
fn invalid_base64_is_reported() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "***"}}]}}]
    }))
    .unwrap();

    let err = response.first_inline_data().unwrap().decode().unwrap_err();
    assert!(err.to_string().contains("Base64"));
}
