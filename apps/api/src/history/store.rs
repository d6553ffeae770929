use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{NewResumeRecord, ResumeRecordRow};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Durable storage for saved resume evaluations. The history tracker only ever
/// replays what this hands back.
///
/// Carried in `AppState` as `Arc<dyn ResumeRecordSource>`.
#[async_trait]
pub trait ResumeRecordSource: Send + Sync {
    /// Every stored record, any order.
    async fn fetch_all(&self) -> Result<Vec<ResumeRecordRow>, AppError>;

    /// Persists `record` and returns it with its assigned id and timestamp.
    async fn insert(&self, record: NewResumeRecord) -> Result<ResumeRecordRow, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PgResumeRecords — PostgreSQL implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct PgResumeRecords {
    pool: PgPool,
}

impl PgResumeRecords {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates `resume_records` if it does not exist yet.
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS resume_records (
                id          BIGSERIAL PRIMARY KEY,
                user_email  TEXT NOT NULL,
                score       INT NOT NULL,
                status      TEXT NOT NULL,
                created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )"#,
        )
        .execute(&self.pool)
        .await?;

        info!("resume_records table ready");
        Ok(())
    }
}

#[async_trait]
impl ResumeRecordSource for PgResumeRecords {
    async fn fetch_all(&self) -> Result<Vec<ResumeRecordRow>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRecordRow>(
            "SELECT id, user_email, score, status, created_at FROM resume_records ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, record: NewResumeRecord) -> Result<ResumeRecordRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRecordRow>(
            r#"INSERT INTO resume_records (user_email, score, status)
               VALUES ($1, $2, $3)
               RETURNING id, user_email, score, status, created_at"#,
        )
        .bind(&record.user_email)
        .bind(record.score)
        .bind(&record.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory implementation for handler tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub mod memory {
    use super::*;
    use chrono::Utc;
    use tokio::sync::Mutex;

    /// Assigns ids sequentially from 1, like a fresh BIGSERIAL.
    #[derive(Default)]
    pub struct InMemoryResumeRecords {
        rows: Mutex<Vec<ResumeRecordRow>>,
    }

    impl InMemoryResumeRecords {
        pub fn with_rows(rows: Vec<ResumeRecordRow>) -> Self {
            Self {
                rows: Mutex::new(rows),
            }
        }
    }

    #[async_trait]
    impl ResumeRecordSource for InMemoryResumeRecords {
        async fn fetch_all(&self) -> Result<Vec<ResumeRecordRow>, AppError> {
            Ok(self.rows.lock().await.clone())
        }

        async fn insert(&self, record: NewResumeRecord) -> Result<ResumeRecordRow, AppError> {
            let mut rows = self.rows.lock().await;
            let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
            let row = ResumeRecordRow {
                id,
                user_email: record.user_email,
                score: record.score,
                status: record.status,
                created_at: Utc::now(),
            };
            rows.push(row.clone());
            Ok(row)
        }
    }
}
