//! Route definitions for the risk-owner directory.

use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/risk-owners", get(handlers::risk_owners))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
