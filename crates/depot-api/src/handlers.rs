//! Route handlers for the depot HTTP surface.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::info;

use depot_core::{EntryFailure, SelectionSpec};

use crate::error::ApiError;
use crate::state::{AppState, DepotManager};

/// Body of `POST /select`.
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    /// `"all"` or an explicit ordered list of entry names.
    #[serde(default)]
    pub entries: Option<SelectionSpec>,
}

/// Body of `POST /copy` and `POST /move`.
#[derive(Debug, Default, Deserialize)]
pub struct TransferRequest {
    /// Destination subdirectory; a collision-free name is generated when
    /// absent or empty.
    #[serde(default)]
    pub destination: Option<String>,
}

/// Confirmation body for requests without a richer payload.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// `GET /entries`
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let entries = run_blocking(state, |manager| manager.list_entries()).await??;
    Ok(Json(entries))
}

/// `POST /select`
pub async fn select_entries(
    State(state): State<AppState>,
    body: Result<Json<SelectRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let Some(spec) = request.entries else {
        return Err(ApiError::bad_request("Entries are required"));
    };

    run_blocking(state, move |manager| manager.select_entries(spec)).await??;
    Ok(Json(MessageBody {
        message: "Entries selected".to_string(),
    }))
}

/// `POST /copy`
pub async fn copy(
    State(state): State<AppState>,
    body: Option<Json<TransferRequest>>,
) -> Result<Json<Vec<EntryFailure>>, ApiError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let failures = run_blocking(state, move |manager| {
        manager.copy(request.destination.as_deref())
    })
    .await??;

    info!(failed = failures.len(), "copy request finished");
    Ok(Json(failures))
}

/// `POST /move`
pub async fn move_entries(
    State(state): State<AppState>,
    body: Option<Json<TransferRequest>>,
) -> Result<Json<Vec<EntryFailure>>, ApiError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let failures = run_blocking(state, move |manager| {
        manager.move_entries(request.destination.as_deref())
    })
    .await??;

    info!(failed = failures.len(), "move request finished");
    Ok(Json(failures))
}

/// `POST /delete`
pub async fn delete(State(state): State<AppState>) -> Result<Json<Vec<EntryFailure>>, ApiError> {
    let failures = run_blocking(state, |manager| manager.delete()).await?;

    info!(failed = failures.len(), "delete request finished");
    Ok(Json(failures))
}

/// Run a manager operation on the blocking thread pool.
///
/// Every capability call is synchronous and may block on the disk.
async fn run_blocking<T, F>(state: AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut DepotManager) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || state.with_manager(f))
        .await
        .map_err(|err| ApiError::internal(err.to_string()))
}
