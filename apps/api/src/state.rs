use sqlx::PgPool;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;
use crate::resumes::storage::BlobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub blobs: BlobStore,
    /// Oracle-or-fallback analysis orchestrator; handlers never see the model.
    pub analyzer: ResumeAnalyzer,
    pub config: Config,
}
