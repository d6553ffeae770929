use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A saved resume evaluation as stored in `resume_records`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecordRow {
    pub id: i64,
    pub user_email: String,
    pub score: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResumeRecord {
    pub user_email: String,
    pub score: i32,
    pub status: String,
}
