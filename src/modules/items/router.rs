use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::{require_item_create, require_item_delete, require_item_update};
use crate::state::AppState;

use super::controller::{create_item, delete_item, get_item, list_items, update_item};

/// Item routes. Reads are public; each mutation is layered with the
/// authenticate middleware (outermost) and its capability gate, so token
/// failures are rejected before the role gate runs.
pub fn init_items_router(state: &AppState) -> Router<AppState> {
    let create = Router::new()
        .route("/", post(create_item))
        .route_layer(middleware::from_fn(require_item_create))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let update = Router::new()
        .route("/{id}", put(update_item))
        .route_layer(middleware::from_fn(require_item_update))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let remove = Router::new()
        .route("/{id}", delete(delete_item))
        .route_layer(middleware::from_fn(require_item_delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    Router::new()
        .route("/", get(list_items))
        .route("/{id}", get(get_item))
        .merge(create)
        .merge(update)
        .merge(remove)
}
