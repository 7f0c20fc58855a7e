//! HTTP API endpoints for snapshots and the results download.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::DrawError;
use crate::state::{export, AppState};

/// Routes mounted under `/api`
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prizes", get(get_host_state))
        .route("/board", get(get_board))
        .route("/export.csv", get(export_csv))
}

/// Full operator snapshot.
///
/// GET /api/prizes
pub async fn get_host_state(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.host_state().await)
}

/// Public board (names hidden until announced).
///
/// GET /api/board
pub async fn get_board(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.board().await)
}

/// Download every record as CSV.
///
/// GET /api/export.csv
pub async fn export_csv(State(state): State<Arc<AppState>>) -> Response {
    let result = {
        let controller = state.controller.read().await;
        export::to_csv_bytes(controller.registry())
    };

    match result {
        Ok(bytes) => {
            let filename = export::export_filename(&state.export_title, chrono::Utc::now());
            tracing::info!("Exporting results as {}", filename);
            (
                StatusCode::OK,
                [
                    (
                        header::CONTENT_TYPE,
                        "text/csv; charset=utf-8".to_string(),
                    ),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e @ DrawError::Export(_)) => {
            tracing::error!("Export failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::warn!("Export rejected: {}", e);
            (StatusCode::CONFLICT, e.to_string()).into_response()
        }
    }
}
