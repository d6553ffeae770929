use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::history::store::PgResumeRecords;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("failed to connect to DATABASE_URL")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Connects and makes sure the resume record table exists.
pub async fn connect_resume_records(database_url: &str) -> Result<PgResumeRecords> {
    let records = PgResumeRecords::new(create_pool(database_url).await?);
    records
        .ensure_schema()
        .await
        .context("failed to prepare resume_records table")?;
    Ok(records)
}
