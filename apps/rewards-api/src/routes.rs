//! HTTP handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use rewards_core::ReceiptPayload;
use tracing::warn;

use crate::dto::{HealthResponse, PointsResponse, ReceiptIdResponse};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// `POST /receipts/process`
///
/// Any body that does not decode into a complete receipt is a 400, including
/// bodies axum itself would answer with 415 or 422.
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> ApiResult<Json<ReceiptIdResponse>> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Failed to decode receipt JSON");
        ApiError::validation(rejection.body_text())
    })?;

    let id = state.service.submit(&payload)?;
    Ok(Json(ReceiptIdResponse { id }))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.service.get_points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.service.receipt_count(),
    })
}
