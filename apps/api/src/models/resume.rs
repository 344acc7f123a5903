use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full resume row. `file_key` is the blob-store key and stays internal;
/// everything else is safe to return to the owning user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    #[serde(skip_serializing)]
    pub file_key: String,
    pub file_type: String,
    pub file_size: i64,
    pub original_text: String,
    pub overall_score: i32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub key_skills: Vec<String>,
    pub summary: String,
    pub ats_score: Option<i32>,
    pub matched_keywords: Option<Vec<String>>,
    pub missing_keywords: Option<Vec<String>>,
    pub uploaded_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lightweight projection for the resume list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummaryRow {
    pub id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub file_size: i64,
    pub overall_score: i32,
    pub summary: String,
    pub uploaded_at: DateTime<Utc>,
}

/// One ATS score snapshot per check, newest first in the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisHistoryRow {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub resume_id: Uuid,
    pub score: i32,
    pub analyzed_at: DateTime<Utc>,
}
