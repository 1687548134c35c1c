use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use lead_radar::error::AppError;
use lead_radar::leads::{
    build_dashboard, select_contact, ContactCard, DashboardView, FacetOptions, FacetSelection,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct ContactRequest {
    #[serde(flatten)]
    pub(crate) facets: FacetSelection,
    pub(crate) row: usize,
}

pub(crate) fn lead_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/leads/facets", get(facets_endpoint))
        .route("/api/v1/leads/dashboard", post(dashboard_endpoint))
        .route("/api/v1/leads/contact", post(contact_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed) && state.leads.is_loaded();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn facets_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<FacetOptions>, AppError> {
    let table = state.leads.table()?;
    Ok(Json(FacetOptions::from_table(table)))
}

pub(crate) async fn dashboard_endpoint(
    Extension(state): Extension<AppState>,
    Json(selection): Json<FacetSelection>,
) -> Result<Json<DashboardView>, AppError> {
    let table = state.leads.table()?;
    Ok(Json(build_dashboard(table, &selection)))
}

pub(crate) async fn contact_endpoint(
    Extension(state): Extension<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactCard>, AppError> {
    let table = state.leads.table()?;
    let (_, view) = request.facets.apply(table);

    match select_contact(&view, request.row) {
        Some(card) => Ok(Json(card)),
        None => {
            debug!(row = request.row, available = view.len(), "selection outside filtered list");
            Err(AppError::SelectionNotFound {
                row: request.row,
                available: view.len(),
            })
        }
    }
}
