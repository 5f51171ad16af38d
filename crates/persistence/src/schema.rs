//! Schema provisioning.
//!
//! Creates the four FitTrack tables when they are missing and seeds the
//! default users. Every statement is idempotent, so provisioning is safe to run
//! on every start.

use domain::models::user::DEFAULT_USERS;
use sqlx::SqlitePool;
use tracing::{info, instrument};

use crate::metrics::QueryTimer;

pub const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    avatar TEXT NOT NULL,
    color TEXT NOT NULL
)
"#;

pub const CREATE_WORKOUT_PACKAGES: &str = r#"
CREATE TABLE IF NOT EXISTS workout_packages (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    exercises TEXT NOT NULL,
    focus TEXT,
    duration TEXT,
    created_by TEXT NOT NULL,
    created_at TEXT NOT NULL
)
"#;

pub const CREATE_CUSTOM_WORKOUTS: &str = r#"
CREATE TABLE IF NOT EXISTS custom_workouts (
    date TEXT PRIMARY KEY,
    workout_name TEXT NOT NULL,
    exercises TEXT NOT NULL,
    focus TEXT,
    duration TEXT,
    created_by TEXT
)
"#;

pub const CREATE_WORKOUT_LOGS: &str = r#"
CREATE TABLE IF NOT EXISTS workout_logs (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    workout_name TEXT NOT NULL,
    duration_minutes INTEGER NOT NULL DEFAULT 0,
    actual_duration_seconds INTEGER NOT NULL DEFAULT 0,
    total_exercises INTEGER NOT NULL,
    completed_exercises INTEGER NOT NULL,
    completion_rate INTEGER NOT NULL,
    is_custom_workout INTEGER NOT NULL DEFAULT 0,
    CHECK (completed_exercises <= total_exercises)
)
"#;

/// Table statements in creation order. `workout_logs` references `users`.
pub const CREATE_TABLES: [(&str, &str); 4] = [
    ("users", CREATE_USERS),
    ("workout_packages", CREATE_WORKOUT_PACKAGES),
    ("custom_workouts", CREATE_CUSTOM_WORKOUTS),
    ("workout_logs", CREATE_WORKOUT_LOGS),
];

const SEED_DEFAULT_USER: &str = r#"
INSERT INTO users (id, name, avatar, color)
VALUES (?1, ?2, ?3, ?4)
ON CONFLICT(id) DO NOTHING
"#;

/// Creates missing tables, then seeds the default users.
///
/// Stops at the first failing statement and returns its error.
#[instrument(skip(pool))]
pub async fn provision(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let timer = QueryTimer::new("provision_schema");

    for (table, statement) in CREATE_TABLES {
        sqlx::query(statement).execute(pool).await?;
        tracing::debug!(table, "Table ensured");
    }

    let mut seeded = 0;
    for user in DEFAULT_USERS {
        let result = sqlx::query(SEED_DEFAULT_USER)
            .bind(user.id)
            .bind(user.name)
            .bind(user.avatar)
            .bind(user.color)
            .execute(pool)
            .await?;
        seeded += result.rows_affected();
    }

    timer.record();
    info!(seeded_users = seeded, "Database schema ready");
    Ok(())
}
