use std::sync::Arc;

use tokio::sync::RwLock;

use crate::evaluation::fit_scoring::RoleFitScorer;
use crate::history::store::ResumeRecordSource;
use crate::history::tracker::ResumeHistoryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built-in catalog with the substring matcher unless configured otherwise.
    pub scorer: Arc<RoleFitScorer>,
    /// In-memory resume history. One lock guards every user's list.
    pub history: Arc<RwLock<ResumeHistoryStore>>,
    /// Durable store the history is rebuilt from.
    pub records: Arc<dyn ResumeRecordSource>,
}

impl AppState {
    pub fn new(scorer: RoleFitScorer, records: Arc<dyn ResumeRecordSource>) -> Self {
        Self {
            scorer: Arc::new(scorer),
            history: Arc::new(RwLock::new(ResumeHistoryStore::new())),
            records,
        }
    }
}
