//! Request handlers for the risk-owner directory.

use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use riskdir_core::DepartmentFilter;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct RiskOwnerParams {
    pub department: Option<String>,
}

/// Look up approved risk owners for a department.
///
/// A blank or absent `department` short-circuits to an empty list without
/// touching the store. A store failure is logged here and surfaced to the
/// caller only as a fixed generic message; no query or driver detail leaves
/// the process. Every response, including the failure body, goes out with
/// HTTP 200 — callers tell failure from "no results" by shape alone.
pub async fn risk_owners(
    State(state): State<AppState>,
    Query(params): Query<RiskOwnerParams>,
) -> Response {
    let Some(filter) = DepartmentFilter::parse(params.department.as_deref()) else {
        return Json(json!([])).into_response();
    };

    match state.store().risk_owners_in_department(&filter).await {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            tracing::error!(error = %e, department = filter.as_str(), "risk owner lookup failed");
            Json(json!({ "error": "Database error fetching risk owners." })).into_response()
        }
    }
}

pub async fn healthz() -> Response {
    Json(json!({ "ok": true, "service": "riskdir-server" })).into_response()
}
