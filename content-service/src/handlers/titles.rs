use crate::config::MAX_TITLE_COUNT;
use crate::models::TitleSet;
use crate::startup::AppState;
use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SuggestTitlesRequest {
    pub content: Option<String>,
    #[validate(range(
        min = 1,
        max = MAX_TITLE_COUNT,
        message = "count must be between 1 and 10"
    ))]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SuggestTitlesResponse {
    pub suggestions: TitleSet,
}

/// Accepts the request body as JSON or as an urlencoded form.
pub struct TitlesPayload(pub SuggestTitlesRequest);

#[async_trait]
impl<S> FromRequest<S> for TitlesPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let parsed = if is_form {
            Form::<SuggestTitlesRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Json::<SuggestTitlesRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        };

        parsed.map(TitlesPayload).map_err(|reason| {
            tracing::debug!(%reason, "Rejected title request body");
            AppError::BadRequest(anyhow::anyhow!(
                "Invalid request format. Please send JSON with 'content' field, e.g. {{\"content\": \"your blog post text\"}}"
            ))
        })
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn suggest_titles(
    State(state): State<AppState>,
    TitlesPayload(payload): TitlesPayload,
) -> Result<Json<SuggestTitlesResponse>, AppError> {
    let content = match payload.content.as_deref() {
        None | Some("") => {
            return Err(AppError::BadRequest(anyhow::anyhow!("Content is required")));
        }
        Some(c) if c.trim().is_empty() => {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Content cannot be empty"
            )));
        }
        Some(c) => c,
    };

    payload.validate()?;

    let count = payload.count.unwrap_or(state.config.titles.default_count);
    let result = state.title_generator.suggest(content, count).await;

    Ok(Json(SuggestTitlesResponse {
        suggestions: result.titles,
    }))
}
