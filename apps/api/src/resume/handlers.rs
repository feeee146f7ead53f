//! Axum route handlers for resume and job-description parsing.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::resume::job_description::extract_required_competencies;
use crate::resume::models::ParsedResume;
use crate::resume::parse_resume;
use crate::resume::vocabulary::Vocabulary;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct JobCompetenciesRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct JobCompetenciesResponse {
    pub competencies: Vec<String>,
}

/// Rejects blank or oversized resume text.
pub fn ensure_resume_text(text: &str, max_bytes: usize) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if text.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "resume text is {} bytes; the limit is {max_bytes}",
            text.len()
        )));
    }
    Ok(())
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    ensure_resume_text(&request.resume_text, state.config.max_resume_bytes)?;
    Ok(Json(parse_resume(&request.resume_text)))
}

/// POST /api/v1/resumes/upload
///
/// Multipart upload with a single `file` field, PDF or plain text.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let is_pdf = field.content_type() == Some("application/pdf")
            || field
                .file_name()
                .is_some_and(|name| name.to_lowercase().ends_with(".pdf"));
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;

        info!(bytes = data.len(), is_pdf, "Resume upload received");
        let text = extract_upload_text(data, is_pdf).await?;
        ensure_resume_text(&text, state.config.max_resume_bytes)?;
        return Ok(Json(parse_resume(&text)));
    }

    Err(AppError::Validation("multipart field 'file' is required".to_string()))
}

async fn extract_upload_text(data: Bytes, is_pdf: bool) -> Result<String, AppError> {
    if !is_pdf {
        return String::from_utf8(data.to_vec())
            .map_err(|_| AppError::UnprocessableEntity("upload is not valid UTF-8 text".to_string()));
    }

    // pdf-extract can panic on malformed documents; a panicked task is reported the
    // same way as a parse failure.
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::UnprocessableEntity("could not read PDF".to_string())
            } else {
                AppError::Internal(e.into())
            }
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("could not read PDF: {e}")))
}

/// POST /api/v1/jobs/competencies
pub async fn handle_job_competencies(
    Json(request): Json<JobCompetenciesRequest>,
) -> Result<Json<JobCompetenciesResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    let competencies = extract_required_competencies(&request.jd_text, Vocabulary::standard());
    Ok(Json(JobCompetenciesResponse { competencies }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_rejected() {
        assert!(matches!(
            ensure_resume_text("  \n ", 100),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_oversized_text_rejected() {
        assert!(matches!(
            ensure_resume_text("abcdef", 5),
            Err(AppError::PayloadTooLarge(_))
        ));
        assert!(ensure_resume_text("abcde", 5).is_ok());
    }

    #[tokio::test]
    async fn test_plain_text_upload_passes_through() {
        let text = extract_upload_text(Bytes::from_static(b"Engineer at Acme"), false)
            .await
            .unwrap();
        assert_eq!(text, "Engineer at Acme");
    }

    #[tokio::test]
    async fn test_invalid_utf8_upload_rejected() {
        let result = extract_upload_text(Bytes::from_static(&[0xff, 0xfe, 0x00]), false).await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }

    #[tokio::test]
    async fn test_garbage_pdf_rejected() {
        let result = extract_upload_text(Bytes::from_static(b"not a pdf"), true).await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }
}
