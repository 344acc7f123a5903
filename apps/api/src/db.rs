//! PostgreSQL pool construction. Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id            uuid PRIMARY KEY,
//!     email         text NOT NULL UNIQUE,
//!     name          text,
//!     password_hash text NOT NULL,
//!     created_at    timestamptz NOT NULL DEFAULT now(),
//!     updated_at    timestamptz NOT NULL DEFAULT now()
//! );
//!
//! CREATE TABLE resumes (
//!     id               uuid PRIMARY KEY,
//!     user_id          uuid NOT NULL REFERENCES users(id) ON DELETE CASCADE,
//!     file_name        text NOT NULL,
//!     file_url         text NOT NULL,
//!     file_key         text NOT NULL,
//!     file_type        text NOT NULL,
//!     file_size        bigint NOT NULL,
//!     original_text    text NOT NULL,
//!     overall_score    integer NOT NULL,
//!     strengths        text[] NOT NULL,
//!     weaknesses       text[] NOT NULL,
//!     suggestions      text[] NOT NULL,
//!     key_skills       text[] NOT NULL,
//!     summary          text NOT NULL,
//!     ats_score        integer,
//!     matched_keywords text[],
//!     missing_keywords text[],
//!     uploaded_at      timestamptz NOT NULL DEFAULT now(),
//!     updated_at       timestamptz NOT NULL DEFAULT now()
//! );
//!
//! CREATE TABLE analysis_history (
//!     id          uuid PRIMARY KEY,
//!     resume_id   uuid NOT NULL REFERENCES resumes(id) ON DELETE CASCADE,
//!     score       integer NOT NULL,
//!     analyzed_at timestamptz NOT NULL DEFAULT now()
//! );
//! ```

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
