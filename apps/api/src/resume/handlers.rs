//! Axum route handler for the resume analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::audit::{AuditEvent, AuditKind};
use crate::errors::AppError;
use crate::resume::analysis::{review, scan_document, ResumeAnalysisResponse};
use crate::resume::extract::{file_extension, is_allowed_file};
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "resume";

/// POST /resume-analyze
///
/// Extracts, scores and reviews an uploaded PDF or Word resume.
pub async fn handle_resume_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let (filename, data) = read_upload(&mut multipart).await?;

    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !is_allowed_file(&filename) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF and DOCX files are allowed.".to_string(),
        ));
    }

    info!("Analyzing resume '{}' ({} bytes)", filename, data.len());

    let scan = {
        let filename = filename.clone();
        tokio::task::spawn_blocking(move || scan_document(&data, &filename))
            .await
            .map_err(|e| AppError::Internal(e.into()))??
    };

    let response = review(scan, state.llm.as_ref(), &state.ai_status).await;

    state.audit.dispatch(AuditEvent::new(AuditKind::ResumeAnalysis {
        file_extension: file_extension(&filename).unwrap_or_default(),
        ats_score: response.ats_score,
        ai_feedback: response.analysis.is_some(),
    }));

    Ok(Json(response))
}

/// Finds the `resume` file field. Other fields are skipped.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(upload_error)?;
        return Ok((filename, data));
    }
    Err(AppError::Validation("No file uploaded".to_string()))
}

fn upload_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Invalid upload: {}", e.body_text()))
    }
}
