mod common;

use common::TestApp;
use serde_json::json;

async fn suggestions(response: reqwest::Response) -> Vec<String> {
    assert!(
        response.status().is_success(),
        "unexpected status {}",
        response.status()
    );
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    serde_json::from_value(body["suggestions"].clone()).expect("suggestions is not a string list")
}

// =============================================================================
// Reply shapes
// =============================================================================

#[tokio::test]
async fn perfect_json_reply() {
    let app = TestApp::replying(r#"["One", "Two", "Three"]"#).await;

    let titles = suggestions(app.suggest_titles(json!({ "content": "Some post" })).await).await;

    assert_eq!(titles, ["One", "Two", "Three"]);
    assert_eq!(app.provider.calls(), 1);
}

#[tokio::test]
async fn fenced_reply_is_truncated() {
    let app = TestApp::replying("```json\n[\"A\",\"B\",\"C\",\"D\"]\n```").await;

    let titles = suggestions(app.suggest_titles(json!({ "content": "Some post" })).await).await;

    assert_eq!(titles, ["A", "B", "C"]);
}

#[tokio::test]
async fn reply_with_commentary() {
    let app =
        TestApp::replying("Sure! Here you go:\n[\"Alpha\", \"Beta\", \"Gamma\"]\nEnjoy.").await;

    let titles = suggestions(app.suggest_titles(json!({ "content": "Some post" })).await).await;

    assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
}

#[tokio::test]
async fn numbered_list_reply() {
    let app = TestApp::replying("1. Foo\n2. Bar").await;

    let titles = suggestions(app.suggest_titles(json!({ "content": "Some post" })).await).await;

    assert_eq!(titles, ["Foo", "Bar", "Blog Post Title 3"]);
}

#[tokio::test]
async fn empty_reply() {
    let app = TestApp::replying("").await;

    let titles = suggestions(app.suggest_titles(json!({ "content": "Some post" })).await).await;

    assert_eq!(
        titles,
        ["Blog Post Title 1", "Blog Post Title 2", "Blog Post Title 3"]
    );
}

#[tokio::test]
async fn model_failure_is_absorbed() {
    let app = TestApp::failing().await;
    let body = json!({ "content": "AI productivity tips for remote teams" });

    let first = suggestions(app.suggest_titles(body.clone()).await).await;
    let second = suggestions(app.suggest_titles(body).await).await;

    assert_eq!(first.len(), 3);
    assert!(first.iter().all(|t| !t.is_empty()));
    assert_eq!(first, second);
}

#[tokio::test]
async fn requested_count_is_honoured() {
    let app = TestApp::replying(r#"["A", "B"]"#).await;

    let titles = suggestions(
        app.suggest_titles(json!({ "content": "Some post", "count": 5 }))
            .await,
    )
    .await;

    assert_eq!(
        titles,
        ["A", "B", "Generated Title 3", "Generated Title 4", "Generated Title 5"]
    );
}

#[tokio::test]
async fn form_encoded_request_is_accepted() {
    let app = TestApp::replying(r#"["A", "B", "C"]"#).await;

    let response = app
        .client
        .post(format!("{}/api/v1/suggest-titles", app.address))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("content=Some+post&count=2")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(suggestions(response).await, ["A", "B"]);
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn missing_content_is_rejected() {
    let app = TestApp::replying("[]").await;

    let response = app.suggest_titles(json!({})).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Content is required");
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn blank_content_is_rejected() {
    let app = TestApp::replying("[]").await;

    let response = app.suggest_titles(json!({ "content": "   \n " })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Content cannot be empty");
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = TestApp::replying("[]").await;

    let response = app
        .client
        .post(format!("{}/api/v1/suggest-titles", app.address))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn out_of_range_count_is_rejected() {
    let app = TestApp::replying("[]").await;

    let zero = app
        .suggest_titles(json!({ "content": "Some post", "count": 0 }))
        .await;
    let too_many = app
        .suggest_titles(json!({ "content": "Some post", "count": 50 }))
        .await;

    assert!(zero.status().is_client_error());
    assert!(too_many.status().is_client_error());
    assert_eq!(app.provider.calls(), 0);
}
