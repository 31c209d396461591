mod common;

use common::TestApp;

const VALID_REPLY: &str = r#"```json
{
  "full_transcript": "Welcome to the show. Thanks for having me.",
  "diarization": [
    {"speaker": "Speaker A", "start_time": 0.0, "end_time": 2.1, "transcript": "Welcome to the show."},
    {"speaker": "Speaker B", "start_time": 2.1, "end_time": 3.9, "transcript": "Thanks for having me."}
  ]
}
```"#;

fn fake_audio() -> Vec<u8> {
    b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec()
}

#[tokio::test]
async fn transcript_is_returned_in_order() {
    let app = TestApp::replying(VALID_REPLY).await;

    let response = app.transcribe(fake_audio(), "audio/wav").await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["full_transcript"],
        "Welcome to the show. Thanks for having me."
    );
    let turns = body["diarization"].as_array().expect("diarization array");
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0]["speaker"], "Speaker A");
    assert_eq!(turns[1]["speaker"], "Speaker B");
    assert_eq!(turns[1]["start_time"], 2.1);
    assert_eq!(app.provider.last_media_type().as_deref(), Some("audio/wav"));
}

#[tokio::test]
async fn unparsable_reply_is_a_server_error() {
    let app = TestApp::replying("Speaker A says hello, then Speaker B answers.").await;

    let response = app.transcribe(fake_audio(), "audio/mpeg").await;

    assert!(response.status().is_server_error());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body.get("full_transcript").is_none());
    assert!(body.get("diarization").is_none());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn model_failure_is_a_server_error() {
    let app = TestApp::failing().await;

    let response = app.transcribe(fake_audio(), "audio/mpeg").await;

    assert!(response.status().is_server_error());
    assert_eq!(app.provider.calls(), 1);
}

#[tokio::test]
async fn non_audio_upload_is_rejected_before_model_call() {
    let app = TestApp::replying(VALID_REPLY).await;

    let response = app.transcribe(b"\x89PNG".to_vec(), "image/png").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn empty_upload_is_rejected() {
    let app = TestApp::replying(VALID_REPLY).await;

    let response = app.transcribe(Vec::new(), "audio/wav").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let app = TestApp::replying(VALID_REPLY).await;
    let form = reqwest::multipart::Form::new().text("note", "no file here");

    let response = app
        .client
        .post(format!("{}/api/v1/transcribe", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let app = TestApp::replying(VALID_REPLY).await;

    let response = app.transcribe(vec![0u8; 1024 * 1024 + 1], "audio/wav").await;

    assert_eq!(response.status().as_u16(), 413);
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn non_multipart_body_gets_json_error() {
    let app = TestApp::replying(VALID_REPLY).await;

    let response = app
        .client
        .post(format!("{}/api/v1/transcribe", app.address))
        .json(&serde_json::json!({ "file": "not an upload" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Expected a multipart/form-data upload")));
    assert_eq!(app.provider.calls(), 0);
}
