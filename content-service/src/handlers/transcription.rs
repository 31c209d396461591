use crate::models::TranscriptResult;
use crate::services::providers::InlineMedia;
use crate::services::Transcriber;
use crate::startup::AppState;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

const FILE_FIELD: &str = "file";

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file is too large".to_string())
    } else {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart upload: {}", e))
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscriptResult>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!(
            "Expected a multipart/form-data upload: {}",
            e.body_text()
        ))
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let mime_type = field.content_type().unwrap_or_default().to_string();
        if !Transcriber::is_audio_mime(&mime_type) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Invalid file type. Please upload an audio file."
            )));
        }

        let file_name = field.file_name().unwrap_or("unnamed").to_string();
        let data = field.bytes().await.map_err(multipart_error)?.to_vec();

        if data.is_empty() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Uploaded audio file is empty"
            )));
        }
        if data.len() > state.config.transcription.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "Audio file exceeds {} bytes",
                state.config.transcription.max_upload_bytes
            )));
        }

        tracing::info!(
            file_name = %file_name,
            mime_type = %mime_type,
            size = data.len(),
            "Transcription started"
        );

        let transcript = state
            .transcriber
            .transcribe(InlineMedia { mime_type, data })
            .await?;

        return Ok(Json(transcript));
    }

    Err(AppError::BadRequest(anyhow::anyhow!(
        "No file uploaded. Send the audio as multipart field '{}'",
        FILE_FIELD
    )))
}
