use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::ats_report::{generate_ats_report, AtsReport};
use crate::analysis::schema::{AtsAnalysis, ResumeAnalysis};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::{AnalysisHistoryRow, ResumeRow};
use crate::state::AppState;

/// Shorter job descriptions don't carry enough signal for keyword matching.
const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsCheckRequest {
    pub resume_id: Uuid,
    pub job_description: String,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub count: usize,
    pub history: Vec<AnalysisHistoryRow>,
}

#[derive(Serialize)]
pub struct ReAnalyzeResponse {
    pub message: String,
    pub analysis: ResumeAnalysis,
}

async fn fetch_owned_resume(
    state: &AppState,
    resume_id: Uuid,
    user_id: Uuid,
) -> Result<ResumeRow, AppError> {
    let resume: Option<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(resume_id)
            .bind(user_id)
            .fetch_optional(&state.db)
            .await?;
    resume.ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
}

fn require_job_description(job_description: &str) -> Result<(), AppError> {
    if job_description.chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(
            "Job description is too short. Please provide a detailed job description."
                .to_string(),
        ));
    }
    Ok(())
}

/// POST /api/analysis/ats-check
///
/// AI-backed ATS comparison. The score and keyword lists are written back to
/// the resume row, and every check appends an analysis_history snapshot.
pub async fn handle_ats_check(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<AtsCheckRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    require_job_description(&req.job_description)?;
    let resume = fetch_owned_resume(&state, req.resume_id, user.user_id).await?;

    info!(
        "Starting ATS check: resume={} user={}",
        resume.id, user.user_id
    );

    let ats = state
        .analyzer
        .check_ats(&resume.original_text, &req.job_description)
        .await;

    sqlx::query(
        r#"
        UPDATE resumes
        SET ats_score = $1, matched_keywords = $2, missing_keywords = $3, updated_at = now()
        WHERE id = $4
        "#,
    )
    .bind(ats.ats_score as i32)
    .bind(&ats.matched_keywords)
    .bind(&ats.missing_keywords)
    .bind(resume.id)
    .execute(&state.db)
    .await?;

    sqlx::query("INSERT INTO analysis_history (id, resume_id, score) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind(resume.id)
        .bind(ats.ats_score as i32)
        .execute(&state.db)
        .await?;

    info!(
        "ATS check completed: resume={} score={}",
        resume.id, ats.ats_score
    );

    Ok(Json(ats))
}

/// POST /api/analysis/ats-report
///
/// Fully deterministic keyword + formatting report. No AI call, nothing is
/// persisted; useful when the model is down or for instant feedback.
pub async fn handle_ats_report(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<AtsCheckRequest>,
) -> Result<Json<AtsReport>, AppError> {
    require_job_description(&req.job_description)?;
    let resume = fetch_owned_resume(&state, req.resume_id, user.user_id).await?;

    let report = generate_ats_report(&resume.original_text, &req.job_description);
    Ok(Json(report))
}

/// GET /api/analysis/history/:resume_id
pub async fn handle_analysis_history(
    State(state): State<AppState>,
    user: AuthUser,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, AppError> {
    let resume = fetch_owned_resume(&state, resume_id, user.user_id).await?;

    let history: Vec<AnalysisHistoryRow> = sqlx::query_as(
        "SELECT * FROM analysis_history WHERE resume_id = $1 ORDER BY analyzed_at DESC",
    )
    .bind(resume.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(HistoryResponse {
        count: history.len(),
        history,
    }))
}

/// POST /api/analysis/re-analyze/:resume_id
///
/// Re-runs the full analysis on the stored text and overwrites the resume's
/// analysis fields.
pub async fn handle_re_analyze(
    State(state): State<AppState>,
    user: AuthUser,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ReAnalyzeResponse>, AppError> {
    let resume = fetch_owned_resume(&state, resume_id, user.user_id).await?;

    info!(
        "Re-analysis started: resume={} user={}",
        resume.id, user.user_id
    );

    let analysis = state.analyzer.analyze_resume(&resume.original_text).await;

    sqlx::query(
        r#"
        UPDATE resumes
        SET overall_score = $1, strengths = $2, weaknesses = $3, suggestions = $4,
            key_skills = $5, summary = $6, updated_at = now()
        WHERE id = $7
        "#,
    )
    .bind(analysis.overall_score as i32)
    .bind(&analysis.strengths)
    .bind(&analysis.weaknesses)
    .bind(&analysis.suggestions)
    .bind(&analysis.key_skills)
    .bind(&analysis.summary)
    .bind(resume.id)
    .execute(&state.db)
    .await?;

    info!(
        "Re-analysis completed: resume={} score={}",
        resume.id, analysis.overall_score
    );

    Ok(Json(ReAnalyzeResponse {
        message: "Resume re-analyzed successfully".to_string(),
        analysis,
    }))
}
