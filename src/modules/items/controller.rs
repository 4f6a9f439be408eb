use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateItemRequest, Item, ItemIdResponse, ListItemsQuery, UpdateItemRequest};
use super::service::ItemService;

/// List items, optionally filtered by name
#[utoipa::path(
    get,
    path = "/api/items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "List of items", body = Vec<Item>)
    ),
    tag = "Items"
)]
#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = ItemService::list(&state.db, query.name).await?;
    Ok(Json(items))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "Items"
)]
#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Item>, AppError> {
    let item = ItemService::get(&state.db, id).await?;
    Ok(Json(item))
}

/// Create an item
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Items"
)]
#[instrument(skip(state, dto))]
pub async fn create_item(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let item = ItemService::create(&state.db, actor.actor_id, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Items"
)]
#[instrument(skip(state, dto))]
pub async fn update_item(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateItemRequest>,
) -> Result<Json<Item>, AppError> {
    let item = ItemService::update(&state.db, actor.actor_id, id, dto).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = ItemIdResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Role not permitted", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Items"
)]
#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ItemIdResponse>, AppError> {
    ItemService::delete(&state.db, actor.actor_id, id).await?;
    Ok(Json(ItemIdResponse { id }))
}
