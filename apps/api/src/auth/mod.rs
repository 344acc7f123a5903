// JWT auth: HS256 access + refresh tokens, bcrypt password hashing, and the
// AuthUser extractor that protects every resume and analysis route.

pub mod handlers;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

/// bcrypt work factor for password hashes.
pub const BCRYPT_COST: u32 = 10;

/// Claims carried by short-lived access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
}

/// Claims carried by long-lived refresh tokens. Signed with a separate secret
/// so a leaked access secret cannot mint refresh tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: Uuid,
    pub exp: i64,
}

pub fn issue_access_token(
    config: &Config,
    user_id: Uuid,
    email: &str,
) -> Result<String, AppError> {
    let claims = AccessClaims {
        sub: user_id,
        email: email.to_string(),
        exp: (Utc::now() + Duration::days(config.jwt_expire_days)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.into()))
}

pub fn issue_refresh_token(config: &Config, user_id: Uuid) -> Result<String, AppError> {
    let claims = RefreshClaims {
        sub: user_id,
        exp: (Utc::now() + Duration::days(config.jwt_refresh_expire_days)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_refresh_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.into()))
}

pub fn verify_access_token(config: &Config, token: &str) -> Result<AccessClaims, AppError> {
    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token has expired".to_string())
        }
        _ => AppError::Unauthorized("Invalid token".to_string()),
    })
}

pub fn verify_refresh_token(config: &Config, token: &str) -> Result<RefreshClaims, AppError> {
    decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(config.jwt_refresh_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Refresh token has expired".to_string())
        }
        _ => AppError::Unauthorized("Invalid refresh token".to_string()),
    })
}

/// bcrypt is CPU-bound; both helpers run it off the async runtime.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(&password, BCRYPT_COST))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::Internal(e.into()))
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::Internal(e.into()))
}

/// Authenticated caller, extracted from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = match header_value.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(token) if !token.is_empty() => token,
            Some(_) => {
                return Err(AppError::Unauthorized(
                    "Access denied. Invalid token format.".to_string(),
                ))
            }
            None => {
                return Err(AppError::Unauthorized(
                    "Access denied. No token provided.".to_string(),
                ))
            }
        };

        let claims = verify_access_token(&state.config, token)?;
        debug!("User authenticated: {}", claims.email);

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            s3_bucket: "unused".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            aws_access_key_id: "unused".to_string(),
            aws_secret_access_key: "unused".to_string(),
            gemini_api_key: "unused".to_string(),
            gemini_model: "unused".to_string(),
            gemini_base_url: "http://localhost".to_string(),
            jwt_secret: "access-secret-for-tests".to_string(),
            jwt_refresh_secret: "refresh-secret-for-tests".to_string(),
            jwt_expire_days: 7,
            jwt_refresh_expire_days: 30,
            max_file_size: 5 * 1024 * 1024,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token = issue_access_token(&config, user_id, "user@example.com").unwrap();
        let claims = verify_access_token(&config, &token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "user@example.com");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token = issue_refresh_token(&config, user_id).unwrap();
        let claims = verify_refresh_token(&config, &token).unwrap();

        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_access_token_rejected_with_wrong_secret() {
        let config = test_config();
        let mut other = test_config();
        other.jwt_secret = "a-different-secret".to_string();

        let token = issue_access_token(&config, Uuid::new_v4(), "user@example.com").unwrap();

        match verify_access_token(&other, &token) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid token"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_refresh_token_not_accepted_as_access_token() {
        let config = test_config();
        let token = issue_refresh_token(&config, Uuid::new_v4()).unwrap();

        assert!(verify_access_token(&config, &token).is_err());
    }

    #[test]
    fn test_expired_access_token_reports_expiry() {
        let config = test_config();
        let claims = AccessClaims {
            sub: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            // well past the default 60s validation leeway
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        match verify_access_token(&config, &token) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Token has expired"),
            other => panic!("expected expiry rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_password_hash_and_verify() {
        let hash = hash_password("hunter2secret").await.unwrap();

        assert_ne!(hash, "hunter2secret");
        assert!(verify_password("hunter2secret", &hash).await.unwrap());
        assert!(!verify_password("wrong-password", &hash).await.unwrap());
    }
}
