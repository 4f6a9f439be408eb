use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{CompareVersionsRequest, CompareVersionsResponse, ItemHistory};
use super::service::AuditService;

/// Get the change history for an item
#[utoipa::path(
    get,
    path = "/api/audit/items/{id}/history",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Change history, newest first", body = Vec<ItemHistory>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Audit"
)]
#[instrument(skip(state))]
pub async fn get_item_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ItemHistory>>, AppError> {
    let history = AuditService::item_history(&state.db, id).await?;
    Ok(Json(history))
}

/// Compare two history snapshots
#[utoipa::path(
    post,
    path = "/api/audit/items/compare",
    request_body = CompareVersionsRequest,
    responses(
        (status = 200, description = "Decoded snapshot pair", body = CompareVersionsResponse),
        (status = 400, description = "Snapshot is not a JSON object", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Audit"
)]
#[instrument(skip_all)]
pub async fn compare_versions(
    Json(req): Json<CompareVersionsRequest>,
) -> Result<Json<CompareVersionsResponse>, AppError> {
    let comparison = AuditService::compare_versions(req.old, req.new)?;
    Ok(Json(comparison))
}
