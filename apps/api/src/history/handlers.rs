use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::handlers::validate_resume;
use crate::evaluation::resume_score::ResumeScoreInput;
use crate::history::store::ResumeRecordSource;
use crate::history::tracker::{ResumeHistoryEntry, ResumeHistoryStore};
use crate::models::resume::NewResumeRecord;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserEmailQuery {
    pub user_email: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user_email: String,
    pub count: usize,
    pub entries: Vec<ResumeHistoryEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub user_email: String,
    pub resume: ResumeScoreInput,
}

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub entry: ResumeHistoryEntry,
    /// Basic skills the saved resume lacks.
    pub missing_skills: Vec<String>,
}

/// GET /api/v1/history
pub async fn handle_list_history(
    State(state): State<AppState>,
    Query(params): Query<UserEmailQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let user_email = require_email(&params.user_email)?;
    ensure_loaded(&state.history, state.records.as_ref()).await?;

    let entries = state.history.read().await.list_history(user_email).to_vec();
    Ok(Json(HistoryResponse {
        user_email: user_email.to_string(),
        count: entries.len(),
        entries,
    }))
}

/// POST /api/v1/history
///
/// Scores the submitted resume, persists the record, then appends it to the
/// in-memory history.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(request): Json<SaveResumeRequest>,
) -> Result<(StatusCode, Json<SaveResumeResponse>), AppError> {
    let user_email = require_email(&request.user_email)?;
    validate_resume(&request.resume)?;
    let scored = request.resume.evaluate();

    // Load before appending, or a later rebuild would never run.
    ensure_loaded(&state.history, state.records.as_ref()).await?;

    // Held across the insert so in-memory order matches id order.
    let mut history = state.history.write().await;
    let row = state
        .records
        .insert(NewResumeRecord {
            user_email: user_email.to_string(),
            score: scored.score as i32,
            status: scored.status.as_str().to_string(),
        })
        .await?;

    let entry = ResumeHistoryEntry::from(row);
    history.add_entry(user_email, entry.clone());
    info!(resume_id = entry.resume_id, score = entry.score, "Saved resume record");

    Ok((
        StatusCode::CREATED,
        Json(SaveResumeResponse {
            entry,
            missing_skills: scored.missing_skills,
        }),
    ))
}

/// Rebuilds the store from storage when it holds nothing at all.
async fn ensure_loaded(
    history: &RwLock<ResumeHistoryStore>,
    records: &dyn ResumeRecordSource,
) -> Result<(), AppError> {
    if !history.read().await.is_empty() {
        return Ok(());
    }

    let mut store = history.write().await;
    // Another request may have rebuilt while we waited for the write lock.
    if store.is_empty() {
        store.rebuild(records.fetch_all().await?);
    }
    Ok(())
}

fn require_email(email: &str) -> Result<&str, AppError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("user_email cannot be empty".to_string()));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::store::memory::InMemoryResumeRecords;
    use crate::models::resume::ResumeRecordRow;
    use chrono::Utc;

    fn row(id: i64, email: &str) -> ResumeRecordRow {
        ResumeRecordRow {
            id,
            user_email: email.to_string(),
            score: 64,
            status: "Partially Ready".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_ensure_loaded_rebuilds_empty_store() {
        let records = InMemoryResumeRecords::with_rows(vec![row(2, "a@x.io"), row(1, "a@x.io")]);
        let history = RwLock::new(ResumeHistoryStore::new());

        ensure_loaded(&history, &records).await.unwrap();

        let store = history.read().await;
        let ids: Vec<i64> = store.list_history("a@x.io").iter().map(|e| e.resume_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_ensure_loaded_leaves_populated_store() {
        let records = InMemoryResumeRecords::with_rows(vec![row(1, "a@x.io")]);
        let mut store = ResumeHistoryStore::new();
        store.add_entry("b@x.io", row(9, "b@x.io").into());
        let history = RwLock::new(store);

        ensure_loaded(&history, &records).await.unwrap();

        let store = history.read().await;
        assert!(store.list_history("a@x.io").is_empty());
        assert_eq!(store.list_history("b@x.io").len(), 1);
    }

    #[test]
    fn test_require_email_trims() {
        assert_eq!(require_email("  a@x.io ").unwrap(), "a@x.io");
        assert!(matches!(require_email("   "), Err(AppError::Validation(_))));
    }
}
