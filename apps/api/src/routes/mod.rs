pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Body cap above the file-size limit so the multipart framing still fits
    // and oversized files get the explicit validation message.
    let body_limit = state.config.max_file_size as usize + 64 * 1024;

    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/register", post(auth::handle_register))
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/refresh", post(auth::handle_refresh))
        .route("/api/auth/me", get(auth::handle_me))
        .route("/api/auth/logout", post(auth::handle_logout))
        // Resumes
        .route("/api/resumes/upload", post(resumes::handle_upload))
        .route("/api/resumes", get(resumes::handle_list_resumes))
        .route(
            "/api/resumes/:id",
            get(resumes::handle_get_resume).delete(resumes::handle_delete_resume),
        )
        // Analysis
        .route("/api/analysis/ats-check", post(analysis::handle_ats_check))
        .route("/api/analysis/ats-report", post(analysis::handle_ats_report))
        .route(
            "/api/analysis/history/:resume_id",
            get(analysis::handle_analysis_history),
        )
        .route(
            "/api/analysis/re-analyze/:resume_id",
            post(analysis::handle_re_analyze),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
