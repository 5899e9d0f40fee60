use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::transcript::extract_video_id;
use crate::DigestError;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    #[serde(rename = "targetLanguage")]
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Domain error carried across the HTTP boundary
pub struct HttpError(DigestError);

impl From<DigestError> for HttpError {
    fn from(error: DigestError) -> Self {
        Self(error)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });

        (status, body).into_response()
    }
}

/// Reject absent and empty fields alike; blank input is not a usable value.
fn require<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, HttpError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DigestError::MissingField(field).into()),
    }
}

/// POST /summary — fetch a video's transcript and return its condensed
/// summary.
pub async fn summarize_video(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, HttpError> {
    let url = require(&request.url, "URL")?;

    let video_id = extract_video_id(url).ok_or_else(|| {
        DigestError::TranscriptFetch(format!("could not extract a video id from '{url}'"))
    })?;

    tracing::info!(video_id, "received summary request");

    let transcript = state
        .transcripts
        .fetch(video_id)
        .await
        .map_err(|e| DigestError::TranscriptFetch(e.to_string()))?;

    let summary = state.assembler.summarize(&transcript).await?;

    tracing::info!(video_id, summary_chars = summary.len(), "summary request completed");

    Ok(Json(SummaryResponse { summary }))
}

/// POST /translate — translate text into a supported target language.
pub async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, HttpError> {
    // Request shape is checked before language support, so a body missing
    // both fields reports the missing field, not the language.
    let text = require(&request.text, "Text")?;
    let target = require(&request.target_language, "Target language")?;

    tracing::info!(target, text_chars = text.chars().count(), "received translate request");

    let translated_text = state.translation.translate(text, target).await?;

    Ok(Json(TranslateResponse { translated_text }))
}
