use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::auth::{
    hash_password, issue_access_token, issue_refresh_token, verify_password,
    verify_refresh_token, AuthUser,
};
use crate::errors::AppError;
use crate::models::user::{PublicUser, UserRow};
use crate::state::AppState;

const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Serialize)]
pub struct MeResponse {
    pub user: PublicUser,
}

/// Mirrors `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`, no whitespace, and a dot
/// with something on both sides in the domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain
                    .bytes()
                    .enumerate()
                    .any(|(i, b)| b == b'.' && i > 0 && i < domain.len() - 1)
        }
        _ => false,
    }
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let email = req.email.to_lowercase();
    if !is_valid_email(&email) {
        return Err(AppError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }

    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Validation(
            "An account with this email already exists".to_string(),
        ));
    }

    if req.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AppError::Validation(
            "Password must be at least 6 characters long".to_string(),
        ));
    }

    let password_hash = hash_password(&req.password).await?;

    let user: UserRow = sqlx::query_as(
        r#"
        INSERT INTO users (id, email, name, password_hash)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&email)
    .bind(&req.name)
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await?;

    let access_token = issue_access_token(&state.config, user.id, &user.email)?;
    let refresh_token = issue_refresh_token(&state.config, user.id)?;

    info!("New user registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: PublicUser::from(&user),
            access_token,
            refresh_token,
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(req.email.to_lowercase())
        .fetch_optional(&state.db)
        .await?;

    // Same rejection whether the account is missing or the password is wrong.
    let Some(user) = user else {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    };
    if !verify_password(&req.password, &user.password_hash).await? {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let access_token = issue_access_token(&state.config, user.id, &user.email)?;
    let refresh_token = issue_refresh_token(&state.config, user.id)?;

    info!("User logged in: {}", user.email);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user: PublicUser::from(&user),
        access_token,
        refresh_token,
    }))
}

/// POST /api/auth/refresh
pub async fn handle_refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let claims = verify_refresh_token(&state.config, &req.refresh_token)?;

    let email: Option<String> = sqlx::query_scalar("SELECT email FROM users WHERE id = $1")
        .bind(claims.sub)
        .fetch_optional(&state.db)
        .await?;
    let Some(email) = email else {
        return Err(AppError::Unauthorized(
            "Invalid refresh token".to_string(),
        ));
    };

    let access_token = issue_access_token(&state.config, claims.sub, &email)?;

    Ok(Json(RefreshResponse { access_token }))
}

/// GET /api/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<MeResponse>, AppError> {
    let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user.user_id)
        .fetch_optional(&state.db)
        .await?;

    let row = row.ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(MeResponse {
        user: PublicUser::from(&row),
    }))
}

/// POST /api/auth/logout
/// JWTs are discarded client-side; this endpoint exists for audit logging.
pub async fn handle_logout(user: AuthUser) -> Json<Value> {
    info!("User logged out: {}", user.email);
    Json(json!({ "message": "Logged out successfully" }))
}
