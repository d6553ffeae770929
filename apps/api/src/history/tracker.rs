//! Per-user, append-only resume history kept in memory.
//!
//! The store has no locking of its own; AppState wraps it in an `RwLock`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::models::resume::ResumeRecordRow;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeHistoryEntry {
    pub resume_id: i64,
    pub created_at: DateTime<Utc>,
    pub score: u32,
    pub status: String,
}

impl From<ResumeRecordRow> for ResumeHistoryEntry {
    fn from(row: ResumeRecordRow) -> Self {
        Self {
            resume_id: row.id,
            created_at: row.created_at,
            score: row.score.max(0) as u32,
            status: row.status,
        }
    }
}

#[derive(Debug, Default)]
pub struct ResumeHistoryStore {
    by_user: HashMap<String, Vec<ResumeHistoryEntry>>,
}

impl ResumeHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, user_email: &str, entry: ResumeHistoryEntry) {
        self.by_user
            .entry(user_email.to_string())
            .or_default()
            .push(entry);
    }

    /// Entries in insertion order. Empty for users never seen.
    pub fn list_history(&self, user_email: &str) -> &[ResumeHistoryEntry] {
        self.by_user
            .get(user_email)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_user.is_empty()
    }

    /// Clears the store and replays `records` in ascending id order.
    ///
    /// Chronological order holds only as long as storage hands out ids
    /// monotonically.
    pub fn rebuild(&mut self, mut records: Vec<ResumeRecordRow>) {
        self.by_user.clear();
        records.sort_by_key(|r| r.id);

        let count = records.len();
        for record in records {
            let email = record.user_email.clone();
            self.add_entry(&email, record.into());
        }

        info!(
            records = count,
            users = self.by_user.len(),
            "Rebuilt resume history"
        );
    }
}
