pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::history::handlers as history;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roles API
        .route("/api/v1/roles", get(evaluation::handle_list_roles))
        .route("/api/v1/roles/:name", get(evaluation::handle_get_role))
        // Evaluation API
        .route("/api/v1/evaluate/fit", post(evaluation::handle_fit))
        .route("/api/v1/evaluate/roadmap", post(evaluation::handle_roadmap))
        .route("/api/v1/evaluate/compare", post(evaluation::handle_compare))
        .route(
            "/api/v1/evaluate/transition",
            post(evaluation::handle_transition),
        )
        .route("/api/v1/evaluate/simulate", post(evaluation::handle_simulate))
        .route("/api/v1/evaluate/impact", post(evaluation::handle_impact))
        .route(
            "/api/v1/evaluate/confidence",
            post(evaluation::handle_confidence),
        )
        .route(
            "/api/v1/evaluate/breakdown",
            post(evaluation::handle_breakdown),
        )
        .route("/api/v1/evaluate/resume", post(evaluation::handle_resume_score))
        // History API
        .route(
            "/api/v1/history",
            get(history::handle_list_history).post(history::handle_save_resume),
        )
        .with_state(state)
}
