use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::schema::ResumeAnalysis;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeSummaryRow};
use crate::resumes::{extract, storage};
use crate::state::AppState;

/// Uploads with less extracted text than this are rejected as unreadable.
const MIN_EXTRACTED_CHARS: usize = 50;

const ALLOWED_MIME_TYPES: [&str; 2] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];
const ALLOWED_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub resume: UploadedResume,
    pub analysis: ResumeAnalysis,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedResume {
    pub id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub file_size: i64,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ResumeListResponse {
    pub count: usize,
    pub resumes: Vec<ResumeSummaryRow>,
}

fn is_supported_upload(file_name: &str, content_type: &str) -> bool {
    let ext = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    ALLOWED_MIME_TYPES.contains(&content_type)
        && ext
            .as_deref()
            .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e))
}

/// Removes a blob that belongs to a rejected upload. Best effort.
async fn discard_blob(state: &AppState, key: &str) {
    if let Err(e) = state.blobs.delete(key).await {
        warn!("Failed to clean up rejected upload {key}: {e}");
    }
}

/// POST /api/resumes/upload
///
/// Multipart pipeline: read the `resume` part, spool it to a temp file,
/// upload to the blob store, extract and clean the text, gate on the
/// validity check, then analyze and persist. Rejections after the blob
/// upload delete the blob again.
pub async fn handle_upload(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), AppError> {
    let mut upload: Option<(String, String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Upload error: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Upload error: {e}")))?;
        upload = Some((file_name, content_type, data));
        break;
    }

    let Some((file_name, content_type, data)) = upload else {
        return Err(AppError::Validation(
            "No file uploaded. Please upload a PDF or DOCX file.".to_string(),
        ));
    };

    if !is_supported_upload(&file_name, &content_type) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF and DOCX files are allowed.".to_string(),
        ));
    }
    if data.len() as u64 > state.config.max_file_size {
        return Err(AppError::Validation(
            "File is too large. Maximum size is 5MB.".to_string(),
        ));
    }

    info!(
        "Resume upload started: user={} file={} size={}",
        user.user_id,
        file_name,
        data.len()
    );

    // Spool to disk; the temp file is removed when it drops.
    let temp = NamedTempFile::new().map_err(|e| AppError::Internal(e.into()))?;
    tokio::fs::write(temp.path(), &data)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    let key = storage::object_key(&file_name);
    let file_url = state.blobs.upload(temp.path(), &key, &content_type).await?;

    // Text extraction is CPU-bound, so it runs off the async runtime.
    let extracted = {
        let path = temp.path().to_path_buf();
        let mime = content_type.clone();
        tokio::task::spawn_blocking(move || extract::extract_text(&path, &mime))
            .await
            .map_err(|e| AppError::Internal(e.into()))?
    };
    let text = match extracted {
        Ok(raw) => extract::clean_text(&raw),
        Err(e) => {
            discard_blob(&state, &key).await;
            return Err(AppError::Internal(e));
        }
    };

    if text.chars().count() < MIN_EXTRACTED_CHARS {
        discard_blob(&state, &key).await;
        return Err(AppError::Validation(
            "Could not extract sufficient text from the file. Please ensure the file contains readable text."
                .to_string(),
        ));
    }
    info!("Text extracted from resume: {} chars", text.chars().count());

    let verdict = state.analyzer.validate_resume(&text).await;
    if !verdict.valid {
        warn!(
            "Document validation failed: {} (confidence {})",
            verdict.reason, verdict.confidence
        );
        discard_blob(&state, &key).await;
        return Err(AppError::NotAResume {
            reason: verdict.reason,
            confidence: verdict.confidence,
        });
    }
    info!(
        "Document validated as resume (confidence {})",
        verdict.confidence
    );

    let analysis = state.analyzer.analyze_resume(&text).await;

    let resume: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes
            (id, user_id, file_name, file_url, file_key, file_type, file_size,
             original_text, overall_score, strengths, weaknesses, suggestions,
             key_skills, summary)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.user_id)
    .bind(&file_name)
    .bind(&file_url)
    .bind(&key)
    .bind(&content_type)
    .bind(data.len() as i64)
    .bind(&text)
    .bind(analysis.overall_score as i32)
    .bind(&analysis.strengths)
    .bind(&analysis.weaknesses)
    .bind(&analysis.suggestions)
    .bind(&analysis.key_skills)
    .bind(&analysis.summary)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Resume uploaded and analyzed: id={} score={}",
        resume.id, resume.overall_score
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Resume uploaded and analyzed successfully!".to_string(),
            resume: UploadedResume {
                id: resume.id,
                file_name: resume.file_name,
                file_url: resume.file_url,
                file_size: resume.file_size,
                uploaded_at: resume.uploaded_at,
            },
            analysis,
        }),
    ))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes: Vec<ResumeSummaryRow> = sqlx::query_as(
        r#"
        SELECT id, file_name, file_url, file_size, overall_score, summary, uploaded_at
        FROM resumes
        WHERE user_id = $1
        ORDER BY uploaded_at DESC
        "#,
    )
    .bind(user.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(ResumeListResponse {
        count: resumes.len(),
        resumes,
    }))
}

/// GET /api/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume: Option<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user.user_id)
            .fetch_optional(&state.db)
            .await?;

    let resume = resume.ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(resume))
}

/// DELETE /api/resumes/:id
/// Blob deletion is best effort; the row is removed either way.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let resume: Option<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user.user_id)
            .fetch_optional(&state.db)
            .await?;

    let resume = resume.ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    if let Err(e) = state.blobs.delete(&resume.file_key).await {
        warn!("Failed to delete blob for resume {id}: {e}");
    }

    sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    info!("Resume deleted: id={} user={}", id, user.user_id);

    Ok(Json(json!({ "message": "Resume deleted successfully" })))
}
